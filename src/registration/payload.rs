use crate::config;
use crate::registration::draft::RegistrationDraft;

/// Field/value pairs in the order the intake form expects them. The pitch
/// deck is deliberately absent: the intake form has no file field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormPayload {
    fields: Vec<(&'static str, String)>,
}

impl FormPayload {
    pub fn from_draft(draft: &RegistrationDraft) -> Self {
        let mut fields = vec![
            (config::FIELD_TEAM_NAME, draft.team_name.clone()),
            (config::FIELD_LEADER_NAME, draft.leader_name.clone()),
            (config::FIELD_PHONE, draft.phone.clone()),
            (config::FIELD_MEMBERS, draft.members_or_individual().to_string()),
        ];
        if draft.agree {
            fields.push((config::FIELD_AGREEMENT, "I agree".to_string()));
        }
        Self { fields }
    }

    /// `application/x-www-form-urlencoded` body.
    pub fn to_urlencoded(&self) -> String {
        self.fields
            .iter()
            .map(|(id, value)| format!("{}={}", urlencoding::encode(id), urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registration::draft::PitchDeck;

    impl FormPayload {
        fn get(&self, field: &str) -> Option<&str> {
            self.fields
                .iter()
                .find(|(id, _)| *id == field)
                .map(|(_, value)| value.as_str())
        }

        fn len(&self) -> usize {
            self.fields.len()
        }
    }

    fn filled_draft() -> RegistrationDraft {
        RegistrationDraft {
            team_name: "Null Pointers".into(),
            leader_name: "Rohit S".into(),
            phone: "+91 90000 00000".into(),
            members: String::new(),
            agree: true,
            pitch_deck: Some(PitchDeck::new("deck.pdf", 2_048, "application/pdf")),
        }
    }

    #[test]
    fn test_maps_fields_to_intake_ids() {
        let payload = FormPayload::from_draft(&filled_draft());
        assert_eq!(payload.get(config::FIELD_TEAM_NAME), Some("Null Pointers"));
        assert_eq!(payload.get(config::FIELD_LEADER_NAME), Some("Rohit S"));
        assert_eq!(payload.get(config::FIELD_PHONE), Some("+91 90000 00000"));
        assert_eq!(payload.get(config::FIELD_MEMBERS), Some("Individual"));
        assert_eq!(payload.get(config::FIELD_AGREEMENT), Some("I agree"));
        assert_eq!(payload.len(), 5);
    }

    #[test]
    fn test_agreement_omitted_when_unchecked() {
        let mut draft = filled_draft();
        draft.agree = false;
        let payload = FormPayload::from_draft(&draft);
        assert_eq!(payload.get(config::FIELD_AGREEMENT), None);
        assert_eq!(payload.len(), 4);
    }

    #[test]
    fn test_deck_is_not_sent() {
        let encoded = FormPayload::from_draft(&filled_draft()).to_urlencoded();
        assert!(!encoded.contains("deck.pdf"));
    }

    #[test]
    fn test_urlencoded_body() {
        let mut draft = filled_draft();
        draft.members = "Priya & John".into();
        let encoded = FormPayload::from_draft(&draft).to_urlencoded();
        assert_eq!(
            encoded,
            "entry.2092238618=Null%20Pointers\
             &entry.1556369182=Rohit%20S\
             &entry.1457601567=%2B91%2090000%2000000\
             &entry.479301265=Priya%20%26%20John\
             &entry.2109138769=I%20agree"
        );
    }
}
