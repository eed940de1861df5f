//! Error types for Mailgun event records.

/// Errors that can occur while decoding or inspecting event records.
///
/// All error variants are marked with `#[non_exhaustive]` to allow
/// adding new error types without breaking changes.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The `event` field named a kind this crate does not know.
    #[error("Unknown event: {name}")]
    UnknownEvent {
        /// Event name as it appeared on the wire
        name: String,
    },

    /// The record is structurally valid JSON but not a valid event.
    #[error("Validation error: {message}")]
    Validation {
        /// Field that failed validation
        field: Option<String>,
        /// What went wrong
        message: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience `Result` type alias for event record operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Creates an unknown-event error.
    pub fn unknown_event<S: Into<String>>(name: S) -> Self {
        Error::UnknownEvent { name: name.into() }
    }

    /// Creates a new validation error.
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Error::Validation {
            field: None,
            message: message.into(),
        }
    }

    /// Creates a new validation error with a field name.
    pub fn validation_field<F, M>(field: F, message: M) -> Self
    where
        F: Into<String>,
        M: Into<String>,
    {
        Error::Validation {
            field: Some(field.into()),
            message: message.into(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_event_display() {
        let err = Error::unknown_event("bounced");
        assert_eq!(err.to_string(), "Unknown event: bounced");
    }

    #[test]
    fn test_validation_error_with_field() {
        let err = Error::validation_field("event", "missing");
        let Error::Validation { field, message } = err else {
            unreachable!("Expected Validation error variant");
        };
        assert_eq!(field, Some("event".to_string()));
        assert_eq!(message, "missing");
    }

    #[test]
    fn test_validation_without_field() {
        let err = Error::validation("not an object");
        assert_eq!(err.to_string(), "Validation error: not an object");
    }

    #[test]
    fn test_serde_error_conversion() {
        let serde_err = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err();
        let err: Error = serde_err.into();
        assert!(err.to_string().starts_with("Serialization error:"));
    }

    #[test]
    fn test_error_implements_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Error>();
    }
}
