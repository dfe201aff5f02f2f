//! Error types for flashcard-core.

use thiserror::Error;

/// Result type alias using ValidationError.
pub type Result<T> = std::result::Result<T, ValidationError>;

/// Client input that cannot be turned into a store call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid id: {0:?}")]
    InvalidId(String),

    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("malformed form body: {0}")]
    MalformedForm(String),
}

impl ValidationError {
    /// Message shown to the user on the error page.
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidId(_) => "Invalid deck ID.".to_string(),
            Self::MissingField(field) => format!("Missing required field: {}.", field),
            Self::MalformedForm(_) => "Could not read the submitted form.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            ValidationError::InvalidId("abc".to_string()).to_string(),
            "invalid id: \"abc\""
        );
        assert_eq!(
            ValidationError::MissingField("question").to_string(),
            "missing required field: question"
        );
    }

    #[test]
    fn test_user_message() {
        assert_eq!(
            ValidationError::InvalidId("abc".to_string()).user_message(),
            "Invalid deck ID."
        );
        assert_eq!(
            ValidationError::MissingField("answer").user_message(),
            "Missing required field: answer."
        );
    }
}
