//! Success dialog showing the submitted mapping

use leptos::prelude::*;

use crate::state::AppState;

#[component]
pub fn SubmissionDialog(state: AppState) -> impl IntoView {
    view! {
        {move || state.submitted.get().map(|submission| view! {
            <div class="fixed inset-0 flex items-center justify-center bg-black bg-opacity-50 z-50">
                <div class="bg-white dark:bg-gray-800 p-6 rounded-lg shadow-lg w-full max-w-md">
                    <h2 class="text-lg font-semibold mb-4 text-center">
                        "Form Submitted Successfully!"
                    </h2>
                    <p class="text-gray-700 dark:text-gray-300 mb-4">"Here is your submitted data:"</p>
                    <pre class="bg-gray-100 dark:bg-gray-900 p-3 rounded-md text-sm overflow-auto">
                        {submission.to_pretty_json()}
                    </pre>
                    <div class="flex justify-end mt-4">
                        <button
                            type="button"
                            class="px-4 py-2 bg-blue-500 text-white rounded-md"
                            on:click=move |_| state.close_submission()
                        >
                            "Close"
                        </button>
                    </div>
                </div>
            </div>
        })}
    }
}
