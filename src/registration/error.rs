use thiserror::Error;

/// Everything that can go wrong between filling the form and the intake
/// endpoint accepting it. `Display` is the message shown under the submit
/// button, so keep it short and user facing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    #[error("File size must be less than 100MB")]
    FileTooLarge { size: u64 },

    #[error("Only PDF and PPT files are allowed")]
    UnsupportedFileType { mime: String },

    #[error("Please upload your pitch deck")]
    MissingPitchDeck,

    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("Please accept the data-sharing agreement")]
    AgreementRequired,

    #[error("Your registration is already being submitted")]
    AlreadySubmitting,

    // Detail goes to the console, never to the page
    #[error("An error occurred. Please try again.")]
    Transport(String),
}

impl RegistrationError {
    /// Transport failures leave the draft intact and can simply be retried.
    pub fn is_retryable(&self) -> bool {
        matches!(self, RegistrationError::Transport(_))
    }

    /// The picker refused the chosen file.
    pub fn is_file_rejection(&self) -> bool {
        matches!(
            self,
            RegistrationError::FileTooLarge { .. } | RegistrationError::UnsupportedFileType { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_user_facing() {
        assert_eq!(
            RegistrationError::FileTooLarge { size: 157_286_400 }.to_string(),
            "File size must be less than 100MB"
        );
        assert_eq!(
            RegistrationError::UnsupportedFileType { mime: "application/msword".into() }.to_string(),
            "Only PDF and PPT files are allowed"
        );
        assert_eq!(
            RegistrationError::MissingPitchDeck.to_string(),
            "Please upload your pitch deck"
        );
        assert_eq!(
            RegistrationError::MissingField("Team name").to_string(),
            "Team name is required"
        );
    }

    #[test]
    fn test_transport_detail_stays_out_of_message() {
        let err = RegistrationError::Transport("TypeError: Failed to fetch".into());
        assert_eq!(err.to_string(), "An error occurred. Please try again.");
        assert!(err.is_retryable());
        assert!(!RegistrationError::MissingPitchDeck.is_retryable());
    }

    #[test]
    fn test_file_rejections() {
        assert!(RegistrationError::FileTooLarge { size: 1 }.is_file_rejection());
        assert!(RegistrationError::UnsupportedFileType { mime: "text/plain".into() }.is_file_rejection());
        assert!(!RegistrationError::MissingPitchDeck.is_file_rejection());
        assert!(!RegistrationError::Transport("offline".into()).is_file_rejection());
    }
}
