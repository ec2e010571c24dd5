//! Shared UI state container
//!
//! One explicitly owned state object, created once in [`crate::App`] and
//! passed to every component as a prop instead of living in ambient
//! globals. The handler methods wrap the model operations, log rejected
//! calls, and raise the snackbar confirmations.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::model::{CommitOutcome, FormSession, RecordStore, SchemaRegistry};

/// How long a snackbar confirmation stays visible
const SNACKBAR_MILLIS: u32 = 6_000;

#[derive(Clone, Copy)]
pub struct AppState {
    /// Immutable after startup, hence stored rather than a signal
    pub registry: StoredValue<SchemaRegistry>,
    pub session: RwSignal<FormSession>,
    pub store: RwSignal<RecordStore>,
    pub snackbar: RwSignal<Option<String>>,
}

impl AppState {
    pub fn new() -> Self {
        let registry = SchemaRegistry::builtin();
        let initial_type = registry
            .form_types()
            .next()
            .unwrap_or_default()
            .to_owned();
        Self {
            registry: StoredValue::new(registry),
            session: RwSignal::new(FormSession::new(initial_type)),
            store: RwSignal::new(RecordStore::new()),
            snackbar: RwSignal::new(None),
        }
    }

    /// Active form type as an owned string, tracked reactively
    pub fn active_form_type(&self) -> String {
        self.session.with(|s| s.active_form_type().to_owned())
    }

    pub fn select_form_type(&self, form_type: &str) {
        let state = *self;
        self.session.update(|session| {
            let result = state
                .registry
                .with_value(|registry| session.select_form_type(form_type, registry));
            if let Err(err) = result {
                log::warn!("form type change rejected: {err}");
            }
        });
    }

    pub fn set_field_value(&self, name: &str, value: String) {
        self.session.update(|session| session.set_field_value(name, value));
    }

    pub fn open_for_new(&self) {
        self.session.update(|session| session.open_for_new());
    }

    pub fn open_for_edit(&self, index: usize) {
        let state = *self;
        self.session.update(|session| {
            let result = state
                .store
                .with_untracked(|store| session.open_for_edit(index, store));
            if let Err(err) = result {
                log::warn!("edit rejected: {err}");
            }
        });
    }

    pub fn cancel(&self) {
        self.session.update(|session| session.cancel());
    }

    pub fn commit(&self) {
        let state = *self;
        let mut outcome = None;
        self.store.update(|store| {
            state.session.update(|session| match session.commit(store) {
                Ok(done) => outcome = Some(done),
                Err(err) => log::warn!("commit rejected: {err}"),
            });
        });
        match outcome {
            Some(CommitOutcome::Created) => {
                log::info!("record created");
                self.show_message("Form submitted successfully.");
            }
            Some(CommitOutcome::Updated) => {
                log::info!("record updated");
                self.show_message("Changes saved successfully.");
            }
            None => {}
        }
    }

    pub fn remove_record(&self, index: usize) {
        let form_type = self.session.with_untracked(|s| s.active_form_type().to_owned());
        let mut removed = false;
        self.store.update(|store| match store.remove_at(&form_type, index) {
            Ok(_) => removed = true,
            Err(err) => log::warn!("delete rejected: {err}"),
        });
        if removed {
            log::info!("record {index} deleted from '{form_type}'");
            self.show_message("Entry deleted successfully.");
        }
    }

    /// Show a snackbar message that auto-dismisses
    pub fn show_message(&self, message: impl Into<String>) {
        self.snackbar.set(Some(message.into()));
        let snackbar = self.snackbar;
        Timeout::new(SNACKBAR_MILLIS, move || snackbar.set(None)).forget();
    }
}
