//! Error types for schema parsing and form validation

use thiserror::Error;

/// Message shown when well-formed JSON has the wrong shape
pub const SCHEMA_MISMATCH_MESSAGE: &str = "JSON does not match the required schema format.";

/// Errors produced while turning editor text into a [`crate::FormSchema`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// Text is not syntactically valid JSON; carries the parser diagnostic
    #[error("{0}")]
    Malformed(String),

    /// Valid JSON that fails the shape check. `reason` is for logs only and
    /// never part of the displayed message.
    #[error("JSON does not match the required schema format.")]
    SchemaMismatch { reason: String },
}

impl SchemaError {
    pub fn mismatch(reason: impl Into<String>) -> Self {
        Self::SchemaMismatch {
            reason: reason.into(),
        }
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::Malformed(_))
    }
}

impl From<serde_json::Error> for SchemaError {
    fn from(err: serde_json::Error) -> Self {
        Self::Malformed(err.to_string())
    }
}

/// A field's `validation.pattern` could not be compiled
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid validation pattern for field '{field_id}': {message}")]
pub struct PatternError {
    pub field_id: String,
    pub pattern: String,
    pub message: String,
}

/// Per-field failures reported on submit
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("This field is required")]
    Required,

    #[error("Value does not match the required pattern")]
    PatternMismatch,

    #[error("Please choose a valid option")]
    InvalidOption,

    /// The declared pattern does not compile, so the field can never pass
    #[error("Invalid validation pattern: {0}")]
    BrokenPattern(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mismatch_message_hides_reason() {
        let err = SchemaError::mismatch("fields[0].type is \"date\"");
        assert_eq!(err.to_string(), SCHEMA_MISMATCH_MESSAGE);
        assert!(!err.is_malformed());
    }

    #[test]
    fn test_malformed_mirrors_serde_diagnostic() {
        let serde_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let expected = serde_err.to_string();
        let err = SchemaError::from(serde_err);
        assert!(err.is_malformed());
        assert_eq!(err.to_string(), expected);
    }

    #[test]
    fn test_field_error_messages() {
        assert_eq!(FieldError::Required.to_string(), "This field is required");
        assert_eq!(
            FieldError::BrokenPattern("unclosed group".to_string()).to_string(),
            "Invalid validation pattern: unclosed group"
        );
    }
}
