use thiserror::Error;
use validator::ValidationErrors;
use serde_json::Error as JsonError;

#[derive(Debug, Error, PartialEq)]
pub enum SharedError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Conversion error: {0}")]
    Conversion(String),

    #[error("Unknown game title: {0}")]
    UnknownGame(String),
}

impl From<ValidationErrors> for SharedError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(errors.to_string())
    }
}

impl From<JsonError> for SharedError {
    fn from(error: JsonError) -> Self {
        Self::Conversion(error.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SharedError>;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_json_error_converts_to_conversion() {
        let err: SharedError = serde_json::from_str::<Vec<u32>>("{ nope")
            .unwrap_err()
            .into();
        assert!(matches!(err, SharedError::Conversion(_)));
    }

    #[test]
    fn test_validation_errors_convert_to_validation() {
        let mut errors = ValidationErrors::new();
        errors.add("win_rate", validator::ValidationError::new("range"));
        let err: SharedError = errors.into();
        assert!(matches!(err, SharedError::Validation(ref m) if m.contains("win_rate")));
    }

    #[test]
    fn test_unknown_game_message() {
        let err = SharedError::UnknownGame("Fortnite".to_string());
        assert_eq!(err.to_string(), "Unknown game title: Fortnite");
    }
}
