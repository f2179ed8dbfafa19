//! # schemaform-core
//!
//! Pure logic behind the schema form builder: parsing editor text into a
//! [`FormSchema`], mapping each field to a control and a rule, and tracking
//! values, inline errors and submission in a [`FormState`].
//!
//! ```rust
//! use schemaform_core::{parse_schema, FormState, SubmitOutcome};
//!
//! let schema = parse_schema(
//!     r#"{"formTitle":"Test","formDescription":"d",
//!         "fields":[{"id":"name","label":"Name","type":"text","required":true}]}"#,
//! )
//! .unwrap();
//!
//! let (state, outcome) = FormState::new(schema).submit();
//! assert!(matches!(outcome, SubmitOutcome::Rejected(_)));
//!
//! let (_, outcome) = state.with_value("name", Some("John Doe".into())).submit();
//! assert!(matches!(outcome, SubmitOutcome::Accepted(_)));
//! ```
//!
//! The crate has no platform dependencies and builds for `wasm32` as well as
//! the host.

pub mod control;
pub mod download;
pub mod editor;
pub mod error;
pub mod form;
pub mod parser;
pub mod sample;
pub mod schema;

pub use control::{FieldControl, FieldRule, InputType};
pub use download::SchemaDownload;
pub use editor::EditorState;
pub use error::{FieldError, PatternError, SchemaError};
pub use form::{FormModel, FormState, RenderedField, SubmitOutcome, Submission};
pub use parser::parse_schema;
pub use schema::{Field, FieldKind, FieldOption, FormSchema};
