use crate::config::{ALLOWED_PITCH_DECK_TYPES, MAX_PITCH_DECK_BYTES};
use crate::registration::error::RegistrationError;

/// What we keep about the chosen pitch deck. The bytes never leave the
/// browser, so the name, size and type are all that matter here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PitchDeck {
    pub name: String,
    pub size: u64,
    pub mime_type: String,
}

impl PitchDeck {
    pub fn new(name: impl Into<String>, size: u64, mime_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size,
            mime_type: mime_type.into(),
        }
    }

    /// Size first, then type, the same order the picker reports them in.
    pub fn validate(&self) -> Result<(), RegistrationError> {
        if self.size > MAX_PITCH_DECK_BYTES {
            return Err(RegistrationError::FileTooLarge { size: self.size });
        }
        if !ALLOWED_PITCH_DECK_TYPES.contains(&self.mime_type.as_str()) {
            return Err(RegistrationError::UnsupportedFileType {
                mime: self.mime_type.clone(),
            });
        }
        Ok(())
    }
}

impl From<&web_sys::File> for PitchDeck {
    fn from(file: &web_sys::File) -> Self {
        // File sizes come back from JS as f64
        PitchDeck::new(file.name(), file.size() as u64, file.type_())
    }
}

/// A single edit coming from one input. The checkbox carries a bool, every
/// other input carries its text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
    TeamName(String),
    LeaderName(String),
    Phone(String),
    Members(String),
    Agree(bool),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationDraft {
    pub team_name: String,
    pub leader_name: String,
    pub phone: String,
    pub members: String,
    pub agree: bool,
    pub pitch_deck: Option<PitchDeck>,
}

impl RegistrationDraft {
    pub fn apply(&mut self, update: FieldUpdate) {
        match update {
            FieldUpdate::TeamName(value) => self.team_name = value,
            FieldUpdate::LeaderName(value) => self.leader_name = value,
            FieldUpdate::Phone(value) => self.phone = value,
            FieldUpdate::Members(value) => self.members = value,
            FieldUpdate::Agree(checked) => self.agree = checked,
        }
    }

    /// Members left blank means the leader is registering alone.
    pub fn members_or_individual(&self) -> &str {
        let members = self.members.trim();
        if members.is_empty() {
            "Individual"
        } else {
            members
        }
    }

    /// First required text field that is still blank, by its label.
    pub fn first_missing_field(&self) -> Option<&'static str> {
        [
            ("Team name", &self.team_name),
            ("Team leader name", &self.leader_name),
            ("Phone number", &self.phone),
        ]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty())
        .map(|(label, _)| label)
    }

    pub fn is_complete(&self) -> bool {
        self.first_missing_field().is_none() && self.agree && self.pitch_deck.is_some()
    }
}
