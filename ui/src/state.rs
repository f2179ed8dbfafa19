//! Page-level reactive state
//!
//! Each signal holds one immutable version of its value; event handlers build
//! the next version and install it wholesale.

use std::sync::Arc;

use leptos::prelude::*;
use schemaform_core::{EditorState, FormModel, FormState, SubmitOutcome, Submission};

/// Model handle compared by identity, so views rebuild only when a new
/// schema is installed and not on every keystroke.
#[derive(Clone)]
pub struct ModelHandle(pub Arc<FormModel>);

impl PartialEq for ModelHandle {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

#[derive(Clone, Copy)]
pub struct AppState {
    pub editor: RwSignal<EditorState>,
    pub form: RwSignal<FormState>,
    pub submitted: RwSignal<Option<Submission>>,
    pub dark_mode: RwSignal<bool>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            editor: RwSignal::new(EditorState::default()),
            form: RwSignal::new(FormState::default()),
            submitted: RwSignal::new(None),
            dark_mode: RwSignal::new(false),
        }
    }

    /// Re-parse the editor text and push the result to the form
    pub fn set_editor_text(&self, text: String) {
        let editor = EditorState::with_text(text);
        let schema = editor.schema().cloned();
        if let Some(err) = editor.error() {
            log::debug!("Editor text rejected: {}", err);
        }
        self.form
            .update(|form| *form = std::mem::take(form).with_schema(schema));
        self.editor.set(editor);
    }

    pub fn set_field_value(&self, id: &str, value: Option<String>) {
        self.form
            .update(|form| *form = std::mem::take(form).with_value(id, value));
    }

    /// Validate all fields and open the success dialog when they pass
    pub fn submit(&self) {
        let mut outcome = SubmitOutcome::NoSchema;
        self.form.update(|form| {
            let (next, result) = std::mem::take(form).submit();
            *form = next;
            outcome = result;
        });

        match outcome {
            SubmitOutcome::Accepted(submission) => {
                log::info!("Form submitted: {}", submission.to_pretty_json());
                self.submitted.set(Some(submission));
            }
            SubmitOutcome::Rejected(failing) => {
                log::debug!("Submission blocked by fields: {:?}", failing);
            }
            SubmitOutcome::NoSchema => {}
        }
    }

    pub fn close_submission(&self) {
        self.submitted.set(None);
    }

    /// Current model, rebuilt only when the schema version changes
    pub fn model(&self) -> Memo<Option<ModelHandle>> {
        let form = self.form;
        Memo::new(move |_| form.with(|f| f.model_handle().map(ModelHandle)))
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
