//! Form schema types
//!
//! A [`FormSchema`] is the validated, typed view of the editor text. It is
//! produced only by [`crate::parser::parse_schema`] and never mutated; every
//! edit yields a fresh value.

use serde::Serialize;
use std::fmt;

// ============================================================================
// Field Kind
// ============================================================================

/// Control variant declared by a field's `type` key
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Email,
    Select,
    Radio,
    Textarea,
}

impl FieldKind {
    /// Every kind the parser accepts, in wire order
    pub const ALL: [FieldKind; 5] = [
        FieldKind::Text,
        FieldKind::Email,
        FieldKind::Select,
        FieldKind::Radio,
        FieldKind::Textarea,
    ];

    /// Parse the wire literal (`"text"`, `"email"`, ...)
    pub fn from_wire(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == value)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Email => "email",
            FieldKind::Select => "select",
            FieldKind::Radio => "radio",
            FieldKind::Textarea => "textarea",
        }
    }

    /// Whether `validation.pattern` is enforced for this kind
    pub fn supports_pattern(&self) -> bool {
        matches!(self, FieldKind::Text | FieldKind::Email)
    }

    /// Whether the kind picks its value from `options`
    pub fn is_choice(&self) -> bool {
        matches!(self, FieldKind::Select | FieldKind::Radio)
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Field
// ============================================================================

/// One entry of a choice field's `options` list
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FieldOption {
    pub label: String,
    pub value: String,
}

impl FieldOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// `validation` block of a field
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct FieldValidation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
}

/// A single input declaration
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Field {
    pub id: String,
    pub label: String,
    #[serde(rename = "type")]
    pub kind: FieldKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation: Option<FieldValidation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<FieldOption>>,
}

impl Field {
    pub fn new(id: impl Into<String>, label: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            kind,
            placeholder: None,
            required: false,
            validation: None,
            options: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.validation = Some(FieldValidation {
            pattern: Some(pattern.into()),
        });
        self
    }

    pub fn with_options(mut self, options: Vec<FieldOption>) -> Self {
        self.options = Some(options);
        self
    }

    /// The declared regex source, if any
    pub fn pattern(&self) -> Option<&str> {
        self.validation.as_ref().and_then(|v| v.pattern.as_deref())
    }

    /// Declared options; absent and empty lists both read as empty
    pub fn options(&self) -> &[FieldOption] {
        self.options.as_deref().unwrap_or(&[])
    }
}

// ============================================================================
// Form Schema
// ============================================================================

/// Root configuration object
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FormSchema {
    #[serde(rename = "formTitle")]
    pub title: String,
    #[serde(rename = "formDescription")]
    pub description: String,
    pub fields: Vec<Field>,
}

impl FormSchema {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            fields: Vec::new(),
        }
    }

    pub fn with_field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// Look up a field by id. With duplicate ids the last declaration wins,
    /// matching how values collide in the submitted mapping.
    pub fn field(&self, id: &str) -> Option<&Field> {
        self.fields.iter().rev().find(|f| f.id == id)
    }
}
