use leptos::prelude::*;

mod components;
pub mod model;
mod state;

use components::form_dialog::FormDialog;
use components::records_table::RecordsTable;
use components::snackbar::Snackbar;
use model::display_label;
use state::AppState;

#[component]
pub fn App() -> impl IntoView {
    let state = AppState::new();

    // Static option list; the registry never changes after startup
    let type_options = state.registry.with_value(|registry| {
        registry
            .form_types()
            .map(|form_type| (form_type.to_owned(), display_label(form_type)))
            .collect::<Vec<_>>()
    });

    view! {
        <div class="min-h-screen bg-gray-100 pb-8">
            // Navigation bar
            <header class="bg-slate-800 text-white">
                <div class="max-w-5xl mx-auto px-4 py-4">
                    <h1 class="text-xl font-semibold">"Dynamic Form Application"</h1>
                </div>
            </header>

            // Main content
            <main class="max-w-5xl mx-auto px-4 mt-8">
                <h2 class="text-3xl font-semibold text-center text-gray-800 mb-6">
                    "Dynamic Form"
                </h2>

                <div>
                    <label class="block text-sm font-medium text-gray-700 mb-1">
                        "Select Form Type"
                    </label>
                    <select
                        class="w-full px-3 py-2 border border-gray-300 rounded-lg bg-white focus:outline-none focus:ring-2 focus:ring-amber-500"
                        prop:value=move || state.active_form_type()
                        on:change=move |ev| state.select_form_type(&event_target_value(&ev))
                    >
                        {type_options
                            .into_iter()
                            .map(|(value, label)| view! { <option value=value>{label}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                </div>

                <button
                    class="block mx-auto my-6 px-6 py-2 bg-amber-400 text-gray-800 font-medium rounded-lg hover:bg-amber-500 transition-colors"
                    on:click=move |_| state.open_for_new()
                >
                    {move || {
                        state.session.with(|s| {
                            if s.edit_cursor().is_some() { "Fill Edit" } else { "Fill Details" }
                        })
                    }}
                </button>

                <FormDialog state=state />
                <RecordsTable state=state />
            </main>

            <Snackbar state=state />
        </div>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(App);
}
