use leptos::prelude::*;

mod components;
mod download;
mod state;

use components::form_preview::{FormPreview, SubmissionDialog};
use components::json_editor::SchemaEditor;
use state::AppState;

#[component]
pub fn App() -> impl IntoView {
    let state = AppState::new();

    let toggle_theme = move |_| state.dark_mode.update(|dark| *dark = !*dark);

    view! {
        <div class=move || {
            let theme = if state.dark_mode.get() { "dark bg-gray-900 text-gray-100" } else { "" };
            format!("min-h-screen lg:p-6 sm:p-2 transition-colors {}", theme)
        }>
            <div class="flex justify-end">
                <button
                    type="button"
                    class="text-sm px-3 py-1 border border-gray-300 rounded-md"
                    on:click=toggle_theme
                >
                    {move || if state.dark_mode.get() { "Light mode" } else { "Dark mode" }}
                </button>
            </div>

            <h1 class="flex justify-center lg:mt-4 sm:mt-9 font-extrabold mb-4 text-center lg:text-5xl sm:text-3xl">
                "Dynamic Form Generator"
            </h1>

            <div class="flex flex-col md:flex-row lg:px-32 sm:px-0 rounded-lg">
                <div class="w-full md:w-1/2 h-auto">
                    <SchemaEditor state=state />
                </div>
                <div class="w-full md:w-1/2 lg:p-2 p-4">
                    <FormPreview state=state />
                </div>
            </div>

            <SubmissionDialog state=state />
        </div>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(App);
}
