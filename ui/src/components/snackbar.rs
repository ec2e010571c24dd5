//! Transient confirmation snackbar
//!
//! Bottom-anchored success message raised by the state container after a
//! create, update, or delete. Auto-dismisses after a few seconds; clicking
//! it dismisses immediately.

use leptos::prelude::*;

use crate::state::AppState;

#[component]
pub fn Snackbar(state: AppState) -> impl IntoView {
    view! {
        {move || {
            state.snackbar.get().map(|message| view! {
                <div class="fixed bottom-4 left-1/2 -translate-x-1/2 z-50">
                    <div
                        class="px-4 py-3 bg-green-50 border border-green-200 rounded-lg shadow text-green-800 text-sm cursor-pointer"
                        on:click=move |_| state.snackbar.set(None)
                    >
                        {message}
                    </div>
                </div>
            })
        }}
    }
}
