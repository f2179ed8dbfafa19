//! Editor text and its latest parse result

use crate::error::SchemaError;
use crate::parser::parse_schema;
use crate::schema::FormSchema;

/// Raw editor text plus the outcome of parsing it.
///
/// A pristine editor (never edited) shows no error. Every edit replaces the
/// whole value with a fresh parse.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EditorState {
    text: String,
    outcome: Option<Result<FormSchema, SchemaError>>,
}

impl EditorState {
    pub fn with_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let outcome = Some(parse_schema(&text));
        Self { text, outcome }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn schema(&self) -> Option<&FormSchema> {
        self.outcome.as_ref().and_then(|r| r.as_ref().ok())
    }

    pub fn error(&self) -> Option<&SchemaError> {
        self.outcome.as_ref().and_then(|r| r.as_ref().err())
    }

    /// Message to show under the editor
    pub fn error_message(&self) -> Option<String> {
        self.error().map(|e| e.to_string())
    }
}
