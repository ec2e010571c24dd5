//! Field input renderers
//!
//! Maps a [`FieldDescriptor`] to the matching input widget and writes every
//! keystroke back into the form session. All kinds produce string values;
//! the number and date kinds only constrain what the browser lets the user
//! type.

use leptos::prelude::*;
use leptos::web_sys;
use wasm_bindgen::JsCast;

use crate::model::{FieldDescriptor, FieldKind};
use crate::state::AppState;

/// Renders one schema field as its input widget
#[component]
pub fn FieldInput(state: AppState, field: FieldDescriptor) -> impl IntoView {
    match field.kind {
        FieldKind::Choice => view! { <ChoiceSelect state=state field=field /> }.into_any(),
        _ => view! { <TextLikeInput state=state field=field /> }.into_any(),
    }
}

// ============================================================================
// Text-like Input
// ============================================================================

/// Input for the text, number, date, and password kinds
#[component]
fn TextLikeInput(state: AppState, field: FieldDescriptor) -> impl IntoView {
    let input_type = match field.kind {
        FieldKind::Number => "number",
        FieldKind::Date => "date",
        FieldKind::Password => "password",
        _ => "text",
    };
    let name = field.name.clone();
    let name_for_change = field.name.clone();

    let on_input = move |ev: web_sys::Event| {
        let target = ev.target().unwrap();
        let input: web_sys::HtmlInputElement = target.dyn_into().unwrap();
        state.set_field_value(&name_for_change, input.value());
    };

    view! {
        <div class="mb-4">
            <label class="block text-sm font-medium text-gray-700 mb-1">{field.label.clone()}</label>
            <input
                type=input_type
                class="w-full px-3 py-2 text-sm border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-amber-500"
                prop:value=move || {
                    state
                        .session
                        .with(|s| s.field_value(&name).unwrap_or_default().to_owned())
                }
                on:input=on_input
            />
        </div>
    }
}

// ============================================================================
// Choice Select
// ============================================================================

/// Dropdown for the choice kind, offering the descriptor's option list
#[component]
fn ChoiceSelect(state: AppState, field: FieldDescriptor) -> impl IntoView {
    let name = field.name.clone();
    let name_for_change = field.name.clone();

    let on_change = move |ev: web_sys::Event| {
        let target = ev.target().unwrap();
        let select: web_sys::HtmlSelectElement = target.dyn_into().unwrap();
        state.set_field_value(&name_for_change, select.value());
    };

    view! {
        <div class="mb-4">
            <label class="block text-sm font-medium text-gray-700 mb-1">{field.label.clone()}</label>
            <select
                class="w-full px-3 py-2 text-sm border border-gray-300 rounded-md bg-white focus:outline-none focus:ring-2 focus:ring-amber-500"
                prop:value=move || {
                    state
                        .session
                        .with(|s| s.field_value(&name).unwrap_or_default().to_owned())
                }
                on:change=on_change
            >
                <option value="">"-- Select --"</option>
                {field
                    .options
                    .iter()
                    .map(|option| {
                        let value = option.clone();
                        let label = option.clone();
                        view! { <option value=value>{label}</option> }
                    })
                    .collect::<Vec<_>>()}
            </select>
        </div>
    }
}
