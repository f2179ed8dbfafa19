//! Live form preview
//!
//! Draws the current schema as a form, or a placeholder while the editor
//! holds no valid schema. Field blocks are rebuilt only when a new schema
//! version is installed.

pub mod fields;
pub mod submission_dialog;

use leptos::prelude::*;
use leptos::web_sys;

use crate::state::AppState;
use fields::FieldBlock;
pub use submission_dialog::SubmissionDialog;

#[component]
pub fn FormPreview(state: AppState) -> impl IntoView {
    let model = state.model();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        state.submit();
    };

    view! {
        {move || match model.get() {
        None => view! {
            <div class="flex justify-center items-center h-[400px] mt-12 border-2 border-gray-200 text-center rounded-lg">
                "Awaiting valid JSON schema..."
            </div>
        }
        .into_any(),
        Some(handle) => {
            let form_model = handle.0;
            view! {
                <form
                    class="flex flex-col lg:p-4 p-6 border-2 border-gray-200 mt-9 rounded-lg"
                    on:submit=on_submit
                >
                    <p class="text-center lg:text-3xl text-2xl font-semibold mb-4">
                        "Design Using JSON Data"
                    </p>
                    <h2 class="text-lg font-semibold mb-2">{form_model.title.clone()}</h2>
                    <p class="text-gray-600 mb-4">{form_model.description.clone()}</p>

                    {form_model.fields.iter().cloned().map(|rendered| view! {
                        <FieldBlock rendered=rendered state=state />
                    }).collect_view()}

                    <button type="submit" class="p-2 mt-4 bg-blue-500 text-white rounded-md">
                        "Submit"
                    </button>
                </form>
            }
            .into_any()
        }
        }}
    }
}
