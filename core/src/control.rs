//! Field to control dispatch
//!
//! Every parsed [`Field`] maps to exactly one [`FieldControl`] (what to draw)
//! and one [`FieldRule`] (what to check on submit). The UI matches on
//! `FieldControl` exhaustively, so a new kind cannot be silently skipped.

use fancy_regex::Regex;
use log::warn;

use crate::error::{FieldError, PatternError};
use crate::schema::{Field, FieldKind, FieldOption};

/// Rows used for multi-line inputs
pub const TEXTAREA_ROWS: u32 = 4;

// ============================================================================
// Controls
// ============================================================================

/// HTML `type` of a single-line input
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputType {
    Text,
    /// Format checking is left to the browser's native email input
    Email,
}

impl InputType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputType::Text => "text",
            InputType::Email => "email",
        }
    }
}

/// The control drawn for one field
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldControl {
    SingleLine {
        input_type: InputType,
        placeholder: Option<String>,
    },
    MultiLine {
        placeholder: Option<String>,
        rows: u32,
    },
    /// Drop-down; the first option is the initial selection
    Select { options: Vec<FieldOption> },
    /// One radio input per option, grouped by the field id
    RadioGroup { options: Vec<FieldOption> },
    /// A select or radio field declared without options. Only the label and
    /// a notice are drawn; the field takes no part in submission.
    MissingOptions { kind: FieldKind },
}

impl FieldControl {
    pub fn for_field(field: &Field) -> Self {
        match field.kind {
            FieldKind::Text => FieldControl::SingleLine {
                input_type: InputType::Text,
                placeholder: field.placeholder.clone(),
            },
            FieldKind::Email => FieldControl::SingleLine {
                input_type: InputType::Email,
                placeholder: field.placeholder.clone(),
            },
            FieldKind::Textarea => FieldControl::MultiLine {
                placeholder: field.placeholder.clone(),
                rows: TEXTAREA_ROWS,
            },
            FieldKind::Select | FieldKind::Radio if field.options().is_empty() => {
                FieldControl::MissingOptions { kind: field.kind }
            }
            FieldKind::Select => FieldControl::Select {
                options: field.options().to_vec(),
            },
            FieldKind::Radio => FieldControl::RadioGroup {
                options: field.options().to_vec(),
            },
        }
    }

    /// Whether the field produces an entry in the submitted mapping
    pub fn collects_value(&self) -> bool {
        !matches!(self, FieldControl::MissingOptions { .. })
    }

    /// Value a freshly rendered control holds before any input.
    /// `None` means "nothing selected" (radio groups).
    pub fn initial_value(&self) -> Option<String> {
        match self {
            FieldControl::SingleLine { .. } | FieldControl::MultiLine { .. } => Some(String::new()),
            FieldControl::Select { options } => options.first().map(|o| o.value.clone()),
            FieldControl::RadioGroup { .. } | FieldControl::MissingOptions { .. } => None,
        }
    }

    pub fn options(&self) -> &[FieldOption] {
        match self {
            FieldControl::Select { options } | FieldControl::RadioGroup { options } => options,
            _ => &[],
        }
    }
}

// ============================================================================
// Rules
// ============================================================================

/// Compile an untrusted pattern source. Look-around and backreferences are
/// accepted, so browser-style patterns keep working.
pub fn compile_pattern(field_id: &str, source: &str) -> Result<Regex, PatternError> {
    Regex::new(source).map_err(|e| {
        warn!("Field '{}' has an invalid pattern {:?}: {}", field_id, source, e);
        PatternError {
            field_id: field_id.to_string(),
            pattern: source.to_string(),
            message: e.to_string(),
        }
    })
}

/// Submission constraints for one field
#[derive(Clone, Debug)]
pub struct FieldRule {
    required: bool,
    pattern: Option<Result<Regex, PatternError>>,
    allowed: Option<Vec<String>>,
}

impl FieldRule {
    pub fn for_field(field: &Field, control: &FieldControl) -> Self {
        let pattern = if field.kind.supports_pattern() {
            field.pattern().map(|src| compile_pattern(&field.id, src))
        } else {
            None
        };

        let allowed = match control {
            FieldControl::Select { options } | FieldControl::RadioGroup { options } => {
                Some(options.iter().map(|o| o.value.clone()).collect())
            }
            _ => None,
        };

        Self {
            required: field.required,
            pattern,
            allowed,
        }
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    /// The compile failure of the declared pattern, if there is one
    pub fn pattern_error(&self) -> Option<&PatternError> {
        self.pattern.as_ref().and_then(|p| p.as_ref().err())
    }

    /// Check a value. `None` is "nothing selected"; only the empty string or
    /// no selection count as missing. Pattern checks skip empty values and
    /// match anywhere in the value.
    pub fn check(&self, value: Option<&str>) -> Result<(), FieldError> {
        let value = value.unwrap_or_default();

        if value.is_empty() && self.required {
            return Err(FieldError::Required);
        }

        if let Some(Err(e)) = &self.pattern {
            return Err(FieldError::BrokenPattern(e.message.clone()));
        }

        if value.is_empty() {
            return Ok(());
        }

        if let Some(allowed) = &self.allowed {
            if !allowed.iter().any(|v| v == value) {
                return Err(FieldError::InvalidOption);
            }
        }

        if let Some(Ok(re)) = &self.pattern {
            match re.is_match(value) {
                Ok(true) => {}
                Ok(false) => return Err(FieldError::PatternMismatch),
                Err(e) => {
                    warn!("Pattern {:?} gave up on input: {}", re.as_str(), e);
                    return Err(FieldError::PatternMismatch);
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(field: &Field) -> FieldRule {
        FieldRule::for_field(field, &FieldControl::for_field(field))
    }

    #[test]
    fn test_dispatch_per_kind() {
        let text = Field::new("a", "A", FieldKind::Text).with_placeholder("type here");
        assert_eq!(
            FieldControl::for_field(&text),
            FieldControl::SingleLine {
                input_type: InputType::Text,
                placeholder: Some("type here".to_string()),
            }
        );

        let email = Field::new("e", "E", FieldKind::Email);
        assert!(matches!(
            FieldControl::for_field(&email),
            FieldControl::SingleLine { input_type: InputType::Email, .. }
        ));

        let area = Field::new("t", "T", FieldKind::Textarea);
        assert_eq!(
            FieldControl::for_field(&area),
            FieldControl::MultiLine { placeholder: None, rows: TEXTAREA_ROWS }
        );
    }

    #[test]
    fn test_choice_without_options_renders_notice() {
        for kind in [FieldKind::Select, FieldKind::Radio] {
            let bare = Field::new("c", "C", kind);
            let empty = Field::new("c", "C", kind).with_options(vec![]);
            for field in [bare, empty] {
                let control = FieldControl::for_field(&field);
                assert_eq!(control, FieldControl::MissingOptions { kind });
                assert!(!control.collects_value());
            }
        }
    }

    #[test]
    fn test_initial_values() {
        let select = Field::new("s", "S", FieldKind::Select).with_options(vec![
            FieldOption::new("One", "1"),
            FieldOption::new("Two", "2"),
        ]);
        assert_eq!(FieldControl::for_field(&select).initial_value(), Some("1".to_string()));

        let radio = Field::new("r", "R", FieldKind::Radio)
            .with_options(vec![FieldOption::new("Yes", "y")]);
        assert_eq!(FieldControl::for_field(&radio).initial_value(), None);

        let text = Field::new("t", "T", FieldKind::Text);
        assert_eq!(FieldControl::for_field(&text).initial_value(), Some(String::new()));
    }

    #[test]
    fn test_required() {
        let r = rule(&Field::new("name", "Name", FieldKind::Text).required());
        assert_eq!(r.check(Some("")), Err(FieldError::Required));
        assert_eq!(r.check(None), Err(FieldError::Required));
        assert_eq!(r.check(Some(" ")), Ok(()));
        assert_eq!(r.check(Some("John Doe")), Ok(()));

        let optional = rule(&Field::new("name", "Name", FieldKind::Text));
        assert_eq!(optional.check(Some("")), Ok(()));
    }

    #[test]
    fn test_pattern() {
        let r = rule(&Field::new("n", "N", FieldKind::Text).with_pattern("^[0-9]+$"));
        assert_eq!(r.check(Some("abc")), Err(FieldError::PatternMismatch));
        assert_eq!(r.check(Some("123")), Ok(()));
        assert_eq!(r.check(Some("")), Ok(()));
    }

    #[test]
    fn test_pattern_is_unanchored() {
        let r = rule(&Field::new("n", "N", FieldKind::Email).with_pattern("[0-9]"));
        assert_eq!(r.check(Some("abc1")), Ok(()));
        assert_eq!(r.check(Some("abc")), Err(FieldError::PatternMismatch));
    }

    #[test]
    fn test_lookaround_and_backreference_patterns() {
        let field = Field::new("pw", "Password", FieldKind::Text).with_pattern("^(?=.*[0-9]).{4,}$");
        let r = rule(&field);
        assert!(r.pattern_error().is_none());
        assert_eq!(r.check(Some("abc1")), Ok(()));
        assert_eq!(r.check(Some("abcd")), Err(FieldError::PatternMismatch));

        let r = rule(&Field::new("x", "X", FieldKind::Text).with_pattern("(?<=x)y"));
        assert_eq!(r.check(Some("xy")), Ok(()));
        assert_eq!(r.check(Some("zy")), Err(FieldError::PatternMismatch));

        let r = rule(&Field::new("d", "D", FieldKind::Text).with_pattern(r"^(\w)\1$"));
        assert_eq!(r.check(Some("aa")), Ok(()));
        assert_eq!(r.check(Some("ab")), Err(FieldError::PatternMismatch));
    }

    #[test]
    fn test_pattern_ignored_for_textarea() {
        let r = rule(&Field::new("t", "T", FieldKind::Textarea).with_pattern("^[0-9]+$"));
        assert_eq!(r.check(Some("free text")), Ok(()));
    }

    #[test]
    fn test_required_textarea() {
        let r = rule(&Field::new("t", "T", FieldKind::Textarea).required());
        assert_eq!(r.check(Some("")), Err(FieldError::Required));
        assert_eq!(r.check(Some("line one\nline two")), Ok(()));
    }

    #[test]
    fn test_broken_pattern_blocks() {
        let field = Field::new("n", "N", FieldKind::Text).with_pattern("([");
        let r = rule(&field);
        let err = r.pattern_error().expect("pattern should fail to compile");
        assert_eq!(err.field_id, "n");
        assert_eq!(err.pattern, "([");
        assert!(matches!(r.check(Some("anything")), Err(FieldError::BrokenPattern(_))));
        assert!(matches!(r.check(Some("")), Err(FieldError::BrokenPattern(_))));
    }

    #[test]
    fn test_choice_values_must_be_declared() {
        let field = Field::new("c", "C", FieldKind::Radio)
            .required()
            .with_options(vec![FieldOption::new("Red", "red"), FieldOption::new("Blue", "blue")]);
        let r = rule(&field);
        assert_eq!(r.check(None), Err(FieldError::Required));
        assert_eq!(r.check(Some("green")), Err(FieldError::InvalidOption));
        assert_eq!(r.check(Some("blue")), Ok(()));
    }
}
