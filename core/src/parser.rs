//! Schema Parser
//!
//! Turns raw editor text into a [`FormSchema`] in two steps:
//! 1. structural parse as generic JSON
//! 2. shape check of the keys the renderer depends on
//!
//! Only `formTitle`, `formDescription`, `fields`, and each field's `id`,
//! `label` and `type` are checked. Optional keys with an unexpected JSON type
//! are read as absent. Bad regex sources, missing options and duplicate ids
//! pass through and surface later in the form model.

use log::debug;
use serde_json::{Map, Value};

use crate::error::SchemaError;
use crate::schema::{Field, FieldKind, FieldOption, FieldValidation, FormSchema};

/// Parse and validate editor text.
///
/// Stateless: the same input always yields an equal result.
pub fn parse_schema(raw: &str) -> Result<FormSchema, SchemaError> {
    let value: Value = serde_json::from_str(raw)?;
    let result = schema_from_value(&value);
    match &result {
        Ok(schema) => debug!(
            "Parsed form schema '{}' with {} field(s)",
            schema.title,
            schema.fields.len()
        ),
        Err(SchemaError::SchemaMismatch { reason }) => {
            debug!("Rejected form schema: {}", reason)
        }
        Err(SchemaError::Malformed(_)) => {}
    }
    result
}

/// Shape-check an already parsed JSON value
pub fn schema_from_value(value: &Value) -> Result<FormSchema, SchemaError> {
    let root = value
        .as_object()
        .ok_or_else(|| SchemaError::mismatch("root is not an object"))?;

    let title = required_str(root, "formTitle", "formTitle")?;
    let description = required_str(root, "formDescription", "formDescription")?;

    let raw_fields = root
        .get("fields")
        .and_then(Value::as_array)
        .ok_or_else(|| SchemaError::mismatch("fields is missing or not an array"))?;

    let fields = raw_fields
        .iter()
        .enumerate()
        .map(|(idx, raw)| field_from_value(idx, raw))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(FormSchema {
        title,
        description,
        fields,
    })
}

fn field_from_value(idx: usize, value: &Value) -> Result<Field, SchemaError> {
    let obj = value
        .as_object()
        .ok_or_else(|| SchemaError::mismatch(format!("fields[{}] is not an object", idx)))?;

    let id = required_str(obj, "id", &format!("fields[{}].id", idx))?;
    let label = required_str(obj, "label", &format!("fields[{}].label", idx))?;

    let kind = match obj.get("type") {
        Some(Value::String(s)) => FieldKind::from_wire(s).ok_or_else(|| {
            SchemaError::mismatch(format!("fields[{}].type \"{}\" is not a known kind", idx, s))
        })?,
        _ => {
            return Err(SchemaError::mismatch(format!(
                "fields[{}].type is missing or not a string",
                idx
            )))
        }
    };

    let placeholder = obj
        .get("placeholder")
        .and_then(Value::as_str)
        .map(String::from);

    let required = obj.get("required").and_then(Value::as_bool).unwrap_or(false);

    let validation = obj
        .get("validation")
        .and_then(Value::as_object)
        .map(|v| FieldValidation {
            pattern: v.get("pattern").and_then(Value::as_str).map(String::from),
        });

    let options = obj
        .get("options")
        .and_then(Value::as_array)
        .map(|list| list.iter().filter_map(option_from_value).collect());

    Ok(Field {
        id,
        label,
        kind,
        placeholder,
        required,
        validation,
        options,
    })
}

fn option_from_value(value: &Value) -> Option<FieldOption> {
    let obj = value.as_object()?;
    let label = obj.get("label")?.as_str()?;
    let value = obj.get("value")?.as_str()?;
    Some(FieldOption::new(label, value))
}

fn required_str(obj: &Map<String, Value>, key: &str, path: &str) -> Result<String, SchemaError> {
    obj.get(key)
        .and_then(Value::as_str)
        .map(String::from)
        .ok_or_else(|| SchemaError::mismatch(format!("{} is missing or not a string", path)))
}

// ============================================================================
// Tests
// ============================================================================
