//! Form model and state
//!
//! [`FormModel`] is the render plan for one schema snapshot. [`FormState`]
//! bundles the current model with field values and inline errors. Every
//! transition consumes the previous state and returns the next one, so a
//! caller only ever holds one version.

use std::collections::HashMap;
use std::sync::Arc;

use log::debug;
use serde_json::{Map, Value};

use crate::control::{FieldControl, FieldRule};
use crate::error::FieldError;
use crate::schema::{Field, FieldKind, FormSchema};

// ============================================================================
// Form Model
// ============================================================================

/// A field together with the control and rule derived from it
#[derive(Clone, Debug)]
pub struct RenderedField {
    pub field: Field,
    pub control: FieldControl,
    pub rule: FieldRule,
}

impl RenderedField {
    pub fn new(field: Field) -> Self {
        let control = FieldControl::for_field(&field);
        let rule = FieldRule::for_field(&field, &control);
        Self {
            field,
            control,
            rule,
        }
    }

    pub fn id(&self) -> &str {
        &self.field.id
    }

    pub fn kind(&self) -> FieldKind {
        self.field.kind
    }
}

/// Render plan for a schema snapshot; one block per declared field, in order
#[derive(Clone, Debug)]
pub struct FormModel {
    pub title: String,
    pub description: String,
    pub fields: Vec<RenderedField>,
}

impl FormModel {
    pub fn new(schema: FormSchema) -> Self {
        Self {
            title: schema.title,
            description: schema.description,
            fields: schema.fields.into_iter().map(RenderedField::new).collect(),
        }
    }

    /// Fields that take part in submission
    pub fn collected(&self) -> impl Iterator<Item = &RenderedField> {
        self.fields.iter().filter(|f| f.control.collects_value())
    }

    /// Last field with this id that takes part in submission. A select or
    /// radio without options never shadows an input sharing its id.
    pub fn collected_field(&self, id: &str) -> Option<&RenderedField> {
        self.collected().filter(|f| f.id() == id).last()
    }
}

// ============================================================================
// Submission
// ============================================================================

/// Flat id -> value mapping produced by a successful submit.
/// Keys follow field order; an unselected radio group maps to `null`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Submission(Map<String, Value>);

impl Submission {
    pub fn get(&self, id: &str) -> Option<&Value> {
        self.0.get(id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }

    /// Two-space indented JSON as shown in the success dialog
    pub fn to_pretty_json(&self) -> String {
        serde_json::to_string_pretty(&self.0).unwrap_or_else(|_| "{}".to_string())
    }
}

/// Result of pressing submit
#[derive(Clone, Debug, PartialEq)]
pub enum SubmitOutcome {
    Accepted(Submission),
    /// Ids of the fields now showing an error, in field order
    Rejected(Vec<String>),
    /// Nothing to submit while no valid schema is loaded
    NoSchema,
}

// ============================================================================
// Form State
// ============================================================================

/// Current schema, values and inline errors
#[derive(Clone, Debug, Default)]
pub struct FormState {
    model: Option<Arc<FormModel>>,
    values: HashMap<String, Option<String>>,
    errors: HashMap<String, FieldError>,
    submit_attempted: bool,
}

impl FormState {
    /// State for a freshly parsed schema
    pub fn new(schema: FormSchema) -> Self {
        Self::default().with_schema(Some(schema))
    }

    /// Install a new schema snapshot, or clear it with `None`.
    ///
    /// Values survive for fields whose id and kind are unchanged (and, for
    /// choice fields, whose value is still a declared option). Errors and the
    /// submit-attempt flag are reset.
    pub fn with_schema(self, schema: Option<FormSchema>) -> Self {
        let Some(schema) = schema else {
            return Self::default();
        };

        let model = FormModel::new(schema);
        let previous = self.model.as_deref();

        let mut values = HashMap::new();
        for rendered in model.collected() {
            let kept = previous
                .and_then(|old| old.collected_field(rendered.id()))
                .filter(|old| old.kind() == rendered.kind())
                .and_then(|_| self.values.get(rendered.id()).cloned())
                .filter(|value| match value {
                    Some(v) if rendered.kind().is_choice() => {
                        rendered.control.options().iter().any(|o| &o.value == v)
                    }
                    _ => true,
                });

            let value = kept.unwrap_or_else(|| rendered.control.initial_value());
            values.insert(rendered.id().to_string(), value);
        }

        debug!(
            "Installed form model '{}' with {} field(s)",
            model.title,
            model.fields.len()
        );

        Self {
            model: Some(Arc::new(model)),
            values,
            errors: HashMap::new(),
            submit_attempted: false,
        }
    }

    /// Record input for one field. After a submit attempt the field is
    /// re-validated on its own; other fields' errors are left alone.
    pub fn with_value(mut self, id: &str, value: Option<String>) -> Self {
        let Some(rule) = self
            .model
            .as_ref()
            .and_then(|m| m.collected_field(id))
            .map(|f| f.rule.clone())
        else {
            return self;
        };

        if self.submit_attempted {
            match rule.check(value.as_deref()) {
                Ok(()) => {
                    self.errors.remove(id);
                }
                Err(e) => {
                    self.errors.insert(id.to_string(), e);
                }
            }
        }

        self.values.insert(id.to_string(), value);
        self
    }

    /// Validate every field. On success the mapping is built from current
    /// values; on failure exactly the failing fields carry errors and all
    /// values are kept.
    pub fn submit(mut self) -> (Self, SubmitOutcome) {
        let Some(model) = self.model.clone() else {
            return (self, SubmitOutcome::NoSchema);
        };

        self.submit_attempted = true;

        let mut errors = HashMap::new();
        let mut failing = Vec::new();
        for rendered in model.collected() {
            let value = self.values.get(rendered.id()).and_then(|v| v.as_deref());
            if let Err(e) = rendered.rule.check(value) {
                if !errors.contains_key(rendered.id()) {
                    failing.push(rendered.id().to_string());
                }
                errors.insert(rendered.id().to_string(), e);
            }
        }
        self.errors = errors;

        if !failing.is_empty() {
            debug!("Submission blocked by {} field(s)", failing.len());
            return (self, SubmitOutcome::Rejected(failing));
        }

        let mut mapping = Map::new();
        for rendered in model.collected() {
            let value = match self.values.get(rendered.id()).cloned().flatten() {
                Some(v) => Value::String(v),
                None => Value::Null,
            };
            mapping.insert(rendered.id().to_string(), value);
        }

        (self, SubmitOutcome::Accepted(Submission(mapping)))
    }

    pub fn model(&self) -> Option<&FormModel> {
        self.model.as_deref()
    }

    /// Shared handle to the current model; a new handle is created for every
    /// installed schema, so pointer identity tracks schema versions.
    pub fn model_handle(&self) -> Option<Arc<FormModel>> {
        self.model.clone()
    }

    pub fn has_schema(&self) -> bool {
        self.model.is_some()
    }

    pub fn value(&self, id: &str) -> Option<&str> {
        self.values.get(id).and_then(|v| v.as_deref())
    }

    pub fn error(&self, id: &str) -> Option<&FieldError> {
        self.errors.get(id)
    }

    pub fn errors(&self) -> &HashMap<String, FieldError> {
        &self.errors
    }

    pub fn submit_attempted(&self) -> bool {
        self.submit_attempted
    }
}
