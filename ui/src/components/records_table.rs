//! Submitted records table
//!
//! Lists the committed records of the active form type with per-row edit
//! and delete actions. Columns follow the schema's field order; a cell is
//! blank when the record has no value for that field. Row indices are
//! reported back to the state container, which re-renders synchronously,
//! so an index never outlives the list it came from.

use leptos::prelude::*;

use crate::model::display_label;
use crate::state::AppState;

#[component]
pub fn RecordsTable(state: AppState) -> impl IntoView {
    let heading = move || format!("{} Data", display_label(&state.active_form_type()));

    // (name, label) pairs of the active schema, in schema order
    let columns = move || {
        let form_type = state.active_form_type();
        state.registry.with_value(|registry| {
            registry
                .lookup(&form_type)
                .map(|schema| {
                    schema
                        .fields
                        .iter()
                        .map(|f| (f.name.clone(), f.label.clone()))
                        .collect::<Vec<_>>()
                })
                .unwrap_or_default()
        })
    };

    view! {
        <div class="mt-8">
            <h3 class="text-lg font-semibold text-gray-800">{heading}</h3>
            {move || {
                let form_type = state.active_form_type();
                let rows = state
                    .store
                    .with(|store| store.list_for(&form_type).cloned().collect::<Vec<_>>());
                if rows.is_empty() {
                    return view! { <p class="text-gray-500 mt-2">"No entries found."</p> }
                        .into_any();
                }
                let columns = columns();
                let header = columns.clone();
                view! {
                    <div class="mt-2 bg-white rounded-lg shadow overflow-x-auto">
                        <table class="min-w-full divide-y divide-gray-200">
                            <thead class="bg-gray-50">
                                <tr>
                                    {header
                                        .into_iter()
                                        .map(|(_, label)| view! {
                                            <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">
                                                {label}
                                            </th>
                                        })
                                        .collect::<Vec<_>>()}
                                    <th class="px-6 py-3 text-right text-xs font-medium text-gray-500 uppercase tracking-wider">
                                        "Actions"
                                    </th>
                                </tr>
                            </thead>
                            <tbody class="bg-white divide-y divide-gray-200">
                                {rows
                                    .into_iter()
                                    .enumerate()
                                    .map(|(index, record)| {
                                        let cells = columns
                                            .iter()
                                            .map(|(name, _)| {
                                                record.get(name).cloned().unwrap_or_default()
                                            })
                                            .collect::<Vec<_>>();
                                        view! {
                                            <tr>
                                                {cells
                                                    .into_iter()
                                                    .map(|value| view! {
                                                        <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-700">
                                                            {value}
                                                        </td>
                                                    })
                                                    .collect::<Vec<_>>()}
                                                <td class="px-6 py-4 whitespace-nowrap text-right text-sm">
                                                    <button
                                                        class="text-blue-600 hover:text-blue-800 mr-3"
                                                        title="Edit"
                                                        on:click=move |_| state.open_for_edit(index)
                                                    >
                                                        <svg class="w-5 h-5 inline" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                                                            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M11 5H6a2 2 0 00-2 2v11a2 2 0 002 2h11a2 2 0 002-2v-5m-1.414-9.414a2 2 0 112.828 2.828L11.828 15H9v-2.828l8.586-8.586z"/>
                                                        </svg>
                                                    </button>
                                                    <button
                                                        class="text-red-600 hover:text-red-800"
                                                        title="Delete"
                                                        on:click=move |_| state.remove_record(index)
                                                    >
                                                        <svg class="w-5 h-5 inline" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                                                            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M19 7l-.867 12.142A2 2 0 0116.138 21H7.862a2 2 0 01-1.995-1.858L5 7m5 4v6m4-6v6m1-10V4a1 1 0 00-1-1h-4a1 1 0 00-1 1v3M4 7h16"/>
                                                        </svg>
                                                    </button>
                                                </td>
                                            </tr>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </tbody>
                        </table>
                    </div>
                }
                .into_any()
            }}
        </div>
    }
}
