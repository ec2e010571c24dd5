//! Schema-driven entry dialog
//!
//! Modal that renders one input per field descriptor of the active schema,
//! in schema order. The title and save path depend on the derived dialog
//! state: a plain open appends on save, an edit open replaces the record
//! under the edit cursor.

use leptos::prelude::*;

use super::field_input::FieldInput;
use crate::model::DialogState;
use crate::state::AppState;

#[component]
pub fn FormDialog(state: AppState) -> impl IntoView {
    let title = move || match state.session.with(|s| s.dialog_state()) {
        DialogState::OpenEdit(_) => "Edit Entry",
        _ => "New Entry",
    };

    let fields = move || {
        let form_type = state.active_form_type();
        state.registry.with_value(|registry| {
            registry
                .lookup(&form_type)
                .map(|schema| schema.fields.clone())
                .unwrap_or_default()
        })
    };

    view! {
        <Show when=move || state.session.with(|s| s.dialog_state() != DialogState::Closed)>
            <div class="fixed inset-0 bg-black bg-opacity-50 flex items-center justify-center z-50">
                <div class="bg-white rounded-lg p-6 max-w-md w-full mx-4">
                    <h3 class="text-lg font-semibold mb-4 text-gray-800">{title}</h3>
                    <div>
                        {move || {
                            fields()
                                .into_iter()
                                .map(|field| view! { <FieldInput state=state field=field /> })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                    <div class="flex justify-end gap-3 mt-2">
                        <button
                            class="px-4 py-2 text-gray-600 hover:bg-gray-100 rounded"
                            on:click=move |_| state.cancel()
                        >
                            "Cancel"
                        </button>
                        <button
                            class="px-4 py-2 bg-amber-400 text-gray-800 font-medium rounded hover:bg-amber-500"
                            on:click=move |_| state.commit()
                        >
                            "Save"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
