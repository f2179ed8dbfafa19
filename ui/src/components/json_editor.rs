//! Schema JSON Editor
//!
//! Textarea with a syntax-highlighted overlay, line numbers, the live parse
//! error, and format / sample / download actions. Every input event re-parses
//! the full text.

use leptos::prelude::*;
use leptos::web_sys;
use schemaform_core::sample::SAMPLE_SCHEMA;
use wasm_bindgen::JsCast;

use crate::download;
use crate::state::AppState;

/// Split JSON text into `(text, css class)` tokens for highlighting.
/// Whitespace gets an empty class; anything unrecognised is `json-error`.
pub fn tokenize_json(json: &str) -> Vec<(String, &'static str)> {
    let mut tokens = Vec::new();
    let mut chars = json.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            ' ' | '\t' | '\n' | '\r' => {
                let mut ws = ch.to_string();
                while let Some(c) = chars.next_if(|c| matches!(c, ' ' | '\t' | '\n' | '\r')) {
                    ws.push(c);
                }
                tokens.push((ws, ""));
            }
            '"' => {
                let mut s = ch.to_string();
                let mut escaped = false;
                for c in chars.by_ref() {
                    s.push(c);
                    if escaped {
                        escaped = false;
                    } else if c == '\\' {
                        escaped = true;
                    } else if c == '"' {
                        break;
                    }
                }
                // A string followed by a colon is an object key
                let is_key = chars
                    .clone()
                    .find(|c| !matches!(c, ' ' | '\t'))
                    == Some(':');
                tokens.push((s, if is_key { "json-key" } else { "json-string" }));
            }
            '0'..='9' | '-' => {
                let mut num = ch.to_string();
                while let Some(c) =
                    chars.next_if(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'))
                {
                    num.push(c);
                }
                tokens.push((num, "json-number"));
            }
            c if c.is_ascii_alphabetic() => {
                let mut word = c.to_string();
                while let Some(c) = chars.next_if(|c| c.is_ascii_alphabetic()) {
                    word.push(c);
                }
                let class = match word.as_str() {
                    "true" | "false" => "json-boolean",
                    "null" => "json-null",
                    _ => "json-error",
                };
                tokens.push((word, class));
            }
            '{' | '}' => tokens.push((ch.to_string(), "json-brace")),
            '[' | ']' => tokens.push((ch.to_string(), "json-bracket")),
            ':' => tokens.push((ch.to_string(), "json-colon")),
            ',' => tokens.push((ch.to_string(), "json-comma")),
            _ => tokens.push((ch.to_string(), "json-error")),
        }
    }

    tokens
}

/// Highlighted HTML for the overlay
pub fn highlight_json(json: &str) -> String {
    let mut html = String::new();

    for (text, class) in tokenize_json(json) {
        let escaped = text
            .replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;");

        if class.is_empty() {
            html.push_str(&escaped);
        } else {
            html.push_str(&format!(r#"<span class="{}">{}</span>"#, class, escaped));
        }
    }

    // Keep the overlay as tall as the textarea when the text ends in a newline
    if json.ends_with('\n') {
        html.push(' ');
    }

    html
}

fn count_lines(text: &str) -> usize {
    text.split('\n').count().max(1)
}

/// Pretty-print valid JSON
pub fn format_json(json: &str) -> Result<String, String> {
    let value = serde_json::from_str::<serde_json::Value>(json).map_err(|e| e.to_string())?;
    serde_json::to_string_pretty(&value).map_err(|e| e.to_string())
}

#[component]
pub fn SchemaEditor(
    state: AppState,
    #[prop(default = 20)]
    rows: u32,
) -> impl IntoView {
    let text = move || state.editor.with(|e| e.text().to_string());
    let error = move || state.editor.with(|e| e.error_message());

    let on_input = move |ev: web_sys::Event| {
        state.set_editor_text(event_target_value(&ev));
    };

    // Tab inserts two spaces instead of moving focus
    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        if ev.key() != "Tab" {
            return;
        }
        ev.prevent_default();
        let Some(textarea) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlTextAreaElement>().ok())
        else {
            return;
        };

        let current = textarea.value();
        let start = textarea.selection_start().ok().flatten().unwrap_or(0) as usize;
        let end = textarea.selection_end().ok().flatten().unwrap_or(0) as usize;
        // Selection offsets are UTF-16 code units
        let utf16: Vec<u16> = current.encode_utf16().collect();
        let (start, end) = (start.min(utf16.len()), end.min(utf16.len()));
        let new_value = format!(
            "{}  {}",
            String::from_utf16_lossy(&utf16[..start]),
            String::from_utf16_lossy(&utf16[end..])
        );

        textarea.set_value(&new_value);
        let cursor = (start + 2) as u32;
        let _ = textarea.set_selection_start(Some(cursor));
        let _ = textarea.set_selection_end(Some(cursor));
        state.set_editor_text(new_value);
    };

    let on_scroll = move |ev: web_sys::Event| {
        let Some(textarea) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlTextAreaElement>().ok())
        else {
            return;
        };
        let highlight = textarea
            .parent_element()
            .and_then(|p| p.query_selector(".json-highlight").ok().flatten())
            .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok());
        if let Some(highlight) = highlight {
            highlight.set_scroll_top(textarea.scroll_top());
            highlight.set_scroll_left(textarea.scroll_left());
        }
    };

    let on_format = move |_| {
        if let Ok(formatted) = format_json(&text()) {
            state.set_editor_text(formatted);
        }
    };

    let on_sample = move |_| state.set_editor_text(SAMPLE_SCHEMA.to_string());

    let on_download = move |_| download::save_editor_text(&text());

    view! {
        <div class="flex flex-col p-4">
            <div class="flex justify-between items-center mb-4">
                <h2 class="text-lg font-semibold">"JSON Editor"</h2>
                <div class="flex gap-2">
                    <button
                        type="button"
                        class="text-xs px-2 py-1 bg-gray-100 hover:bg-gray-200 text-gray-600 rounded transition-colors"
                        on:click=on_sample
                    >
                        "Load sample"
                    </button>
                    <button
                        type="button"
                        class="text-xs px-2 py-1 bg-gray-100 hover:bg-gray-200 text-gray-600 rounded transition-colors"
                        on:click=on_format
                        disabled=move || format_json(&text()).is_err()
                    >
                        "Format"
                    </button>
                </div>
            </div>

            <div class="json-editor-wrapper">
                <div class="json-line-numbers" aria-hidden="true">
                    {move || {
                        let lines = count_lines(&text());
                        (1..=lines.max(rows as usize))
                            .map(|n| view! { <div class="json-line-number">{n}</div> })
                            .collect_view()
                    }}
                </div>

                <div class="json-editor-area">
                    <pre
                        class="json-highlight"
                        aria-hidden="true"
                        inner_html=move || highlight_json(&text())
                    />
                    <textarea
                        class="json-textarea"
                        rows=rows
                        placeholder="Paste your JSON schema here..."
                        spellcheck="false"
                        autocomplete="off"
                        prop:value=text
                        on:input=on_input
                        on:keydown=on_keydown
                        on:scroll=on_scroll
                    />
                </div>
            </div>

            {move || error().map(|err| view! {
                <p class="mt-1 text-sm text-red-500">{err}</p>
            })}

            <button
                type="button"
                class="mt-4 p-2 bg-blue-500 text-white rounded-md"
                on:click=on_download
            >
                "Download JSON"
            </button>
        </div>
    }
}
