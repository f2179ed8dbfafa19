//! Field Renderers
//!
//! One component per [`FieldControl`] variant. Values and inline errors are
//! read from the shared form state with fine-grained closures so typing does
//! not rebuild the inputs.

use leptos::prelude::*;
use leptos::web_sys;
use schemaform_core::{FieldControl, FieldKind, FieldOption, InputType, RenderedField};

use crate::state::AppState;

const INPUT_CLASS: &str = "w-full p-2 border rounded-md border-gray-200 focus:outline-none focus:ring-2 focus:ring-blue-500";

// ============================================================================
// Field Block
// ============================================================================

/// Label, control and inline error for one declared field
#[component]
pub fn FieldBlock(rendered: RenderedField, state: AppState) -> impl IntoView {
    let id = rendered.id().to_string();
    let label = rendered.field.label.clone();
    let required = rendered.rule.is_required();
    let pattern_problem = rendered.rule.pattern_error().map(|e| e.message.clone());

    let control = match rendered.control {
        FieldControl::SingleLine { input_type, placeholder } => view! {
            <SingleLineInput id=id.clone() input_type=input_type placeholder=placeholder state=state />
        }
        .into_any(),
        FieldControl::MultiLine { placeholder, rows } => view! {
            <MultiLineInput id=id.clone() placeholder=placeholder rows=rows state=state />
        }
        .into_any(),
        FieldControl::Select { options } => view! {
            <OptionSelect id=id.clone() options=options state=state />
        }
        .into_any(),
        FieldControl::RadioGroup { options } => view! {
            <RadioGroup id=id.clone() options=options state=state />
        }
        .into_any(),
        FieldControl::MissingOptions { kind } => view! {
            <MissingOptionsNotice kind=kind />
        }
        .into_any(),
    };

    let error_id = id.clone();
    let error = move || {
        state
            .form
            .with(|f| f.error(&error_id).map(|e| e.to_string()))
    };

    view! {
        <div class="my-4" data-field-id=id>
            <label class="block mb-1">
                {label}
                {required.then(|| view! { <span class="text-red-500 ml-1">"*"</span> })}
            </label>
            {control}
            {pattern_problem.map(|msg| view! {
                <p class="text-amber-600 text-xs mt-1">{format!("Pattern will not compile: {}", msg)}</p>
            })}
            {move || error().map(|msg| view! {
                <p class="text-red-500 text-sm">{msg}</p>
            })}
        </div>
    }
}

// ============================================================================
// Text Inputs
// ============================================================================

#[component]
fn SingleLineInput(
    id: String,
    input_type: InputType,
    placeholder: Option<String>,
    state: AppState,
) -> impl IntoView {
    let value_id = id.clone();
    let input_id = id.clone();

    view! {
        <input
            type=input_type.as_str()
            name=id
            class=INPUT_CLASS
            placeholder=placeholder.unwrap_or_default()
            prop:value=move || {
                state.form.with(|f| f.value(&value_id).unwrap_or_default().to_string())
            }
            on:input=move |ev: web_sys::Event| {
                state.set_field_value(&input_id, Some(event_target_value(&ev)));
            }
        />
    }
}

#[component]
fn MultiLineInput(
    id: String,
    placeholder: Option<String>,
    rows: u32,
    state: AppState,
) -> impl IntoView {
    let value_id = id.clone();
    let input_id = id.clone();

    view! {
        <textarea
            name=id
            rows=rows
            class=INPUT_CLASS
            placeholder=placeholder.unwrap_or_default()
            prop:value=move || {
                state.form.with(|f| f.value(&value_id).unwrap_or_default().to_string())
            }
            on:input=move |ev: web_sys::Event| {
                state.set_field_value(&input_id, Some(event_target_value(&ev)));
            }
        />
    }
}

// ============================================================================
// Choice Inputs
// ============================================================================

#[component]
fn OptionSelect(id: String, options: Vec<FieldOption>, state: AppState) -> impl IntoView {
    let value_id = id.clone();
    let input_id = id.clone();

    view! {
        <select
            name=id
            class=INPUT_CLASS
            prop:value=move || {
                state.form.with(|f| f.value(&value_id).unwrap_or_default().to_string())
            }
            on:change=move |ev: web_sys::Event| {
                state.set_field_value(&input_id, Some(event_target_value(&ev)));
            }
        >
            {options.into_iter().map(|option| {
                let selected_id = id.clone();
                let selected_value = option.value.clone();
                view! {
                    <option
                        value=option.value
                        selected=move || {
                            state.form.with(|f| f.value(&selected_id) == Some(selected_value.as_str()))
                        }
                    >
                        {option.label}
                    </option>
                }
            }).collect_view()}
        </select>
    }
}

/// Radio inputs share the field id as group name; the group collapses to a
/// single id -> value entry.
#[component]
fn RadioGroup(id: String, options: Vec<FieldOption>, state: AppState) -> impl IntoView {
    view! {
        <div class="flex lg:flex-row flex-col gap-2">
            {options.into_iter().map(|option| {
                let checked_id = id.clone();
                let change_id = id.clone();
                let checked_value = option.value.clone();
                let change_value = option.value.clone();
                view! {
                    <label class="flex items-center">
                        <input
                            type="radio"
                            name=id.clone()
                            value=option.value
                            class="mr-2"
                            prop:checked=move || {
                                state.form.with(|f| f.value(&checked_id) == Some(checked_value.as_str()))
                            }
                            on:change=move |_| {
                                state.set_field_value(&change_id, Some(change_value.clone()));
                            }
                        />
                        {option.label}
                    </label>
                }
            }).collect_view()}
        </div>
    }
}

#[component]
fn MissingOptionsNotice(kind: FieldKind) -> impl IntoView {
    view! {
        <div class="text-sm text-gray-400 italic">
            {format!("No options defined for this {} field", kind)}
        </div>
    }
}
