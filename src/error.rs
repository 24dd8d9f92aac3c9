use thiserror::Error;

/// Type alias for Result with TriageError
pub type Result<T> = std::result::Result<T, TriageError>;

/// Error types for the inbox triage tool
#[derive(Error, Debug)]
pub enum TriageError {
    /// Configuration file is missing a value or fails validation
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// No email with the given id exists in the session
    #[error("No email with id {0} in the inbox")]
    EmailNotFound(u32),

    /// The email was already sent; the transition is irreversible
    #[error("Email {0} has already been sent")]
    AlreadySent(u32),

    /// No draft has been generated for the email yet
    #[error("No draft exists for email {0}")]
    DraftMissing(u32),

    /// An operation needed a selected email but none was selected
    #[error("No email selected")]
    NoSelection,

    /// Interactive prompt failed or was cancelled
    #[error("Prompt error: {0}")]
    PromptError(String),

    /// IO error (file operations, etc.)
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl TriageError {
    /// Check if the error stems from user input rather than the environment
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            TriageError::EmailNotFound(_)
                | TriageError::AlreadySent(_)
                | TriageError::DraftMissing(_)
                | TriageError::NoSelection
        )
    }
}

impl From<inquire::InquireError> for TriageError {
    fn from(error: inquire::InquireError) -> Self {
        TriageError::PromptError(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_errors() {
        assert!(TriageError::EmailNotFound(7).is_user_error());
        assert!(TriageError::AlreadySent(1).is_user_error());
        assert!(TriageError::DraftMissing(2).is_user_error());
        assert!(TriageError::NoSelection.is_user_error());
    }

    #[test]
    fn test_environment_errors() {
        let config = TriageError::ConfigError("bad value".to_string());
        assert!(!config.is_user_error());

        let io = TriageError::IoError(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing",
        ));
        assert!(!io.is_user_error());
    }

    #[test]
    fn test_error_display() {
        let error = TriageError::AlreadySent(3);
        let display = format!("{}", error);
        assert!(display.contains("already been sent"));
        assert!(display.contains('3'));

        let error = TriageError::EmailNotFound(42);
        assert!(format!("{}", error).contains("42"));
    }
}
