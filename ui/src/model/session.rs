//! Form session state machine
//!
//! Tracks which form type is active, the values entered into the currently
//! open form, and whether the dialog is editing an existing record or
//! creating a new one.
//!
//! The dialog lifecycle is `Closed -> OpenNew | OpenEdit(i) -> Closed`,
//! where a commit closes via append or replace and a cancel closes without
//! touching the store.

use std::collections::HashMap;

use super::error::FormError;
use super::schema::SchemaRegistry;
use super::store::{Record, RecordStore};

/// What a successful commit did, so the caller can pick the matching
/// confirmation message
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommitOutcome {
    Created,
    Updated,
}

/// Derived dialog lifecycle state
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DialogState {
    Closed,
    OpenNew,
    OpenEdit(usize),
}

/// The in-progress form being filled, plus the edit cursor.
///
/// Note the deliberate parity quirks carried over from the shipped
/// behavior: `cancel` keeps the entered values and the edit cursor, and
/// `select_form_type` clears values but not the cursor. All transient state
/// is reset in exactly one place, [`FormSession::reset_transient`], so a
/// stricter policy is a one-line change per operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormSession {
    active_form_type: String,
    field_values: HashMap<String, String>,
    edit_cursor: Option<usize>,
    dialog_open: bool,
}

impl FormSession {
    /// Start a session on the given form type. The caller passes a
    /// registered type; `select_form_type` guards later changes.
    pub fn new(initial_form_type: impl Into<String>) -> Self {
        Self {
            active_form_type: initial_form_type.into(),
            field_values: HashMap::new(),
            edit_cursor: None,
            dialog_open: false,
        }
    }

    pub fn active_form_type(&self) -> &str {
        &self.active_form_type
    }

    pub fn field_value(&self, name: &str) -> Option<&str> {
        self.field_values.get(name).map(String::as_str)
    }

    pub fn edit_cursor(&self) -> Option<usize> {
        self.edit_cursor
    }

    pub fn dialog_state(&self) -> DialogState {
        if !self.dialog_open {
            DialogState::Closed
        } else {
            match self.edit_cursor {
                Some(index) => DialogState::OpenEdit(index),
                None => DialogState::OpenNew,
            }
        }
    }

    /// Switch the active form type. Clears the entered values; the edit
    /// cursor survives a type change (shipped behavior).
    pub fn select_form_type(
        &mut self,
        form_type: &str,
        registry: &SchemaRegistry,
    ) -> Result<(), FormError> {
        registry.lookup(form_type)?;
        self.active_form_type = form_type.to_owned();
        self.field_values.clear();
        Ok(())
    }

    /// Insert or overwrite one entered value. No validation happens here or
    /// at commit time; see [`FormSession::missing_required`].
    pub fn set_field_value(&mut self, name: &str, value: impl Into<String>) {
        self.field_values.insert(name.to_owned(), value.into());
    }

    /// Open the dialog for a new entry. Leaves any previously entered
    /// values and a stale edit cursor in place (shipped behavior).
    pub fn open_for_new(&mut self) {
        self.dialog_open = true;
    }

    /// Open the dialog to edit the record at `index`, pre-populating the
    /// form with a copy of it
    pub fn open_for_edit(&mut self, index: usize, store: &RecordStore) -> Result<(), FormError> {
        match store.get(&self.active_form_type, index) {
            Some(record) => {
                self.field_values = record.clone();
                self.edit_cursor = Some(index);
                self.dialog_open = true;
                Ok(())
            }
            None => Err(FormError::IndexOutOfRange {
                form_type: self.active_form_type.clone(),
                index,
                len: store.len_for(&self.active_form_type),
            }),
        }
    }

    /// Close the dialog. Entered values and the edit cursor are retained
    /// (shipped behavior).
    pub fn cancel(&mut self) {
        self.dialog_open = false;
    }

    /// Move the entered values into the store: replace at the edit cursor,
    /// or append when there is none. On success all transient state is
    /// reset; on failure nothing changes.
    pub fn commit(&mut self, store: &mut RecordStore) -> Result<CommitOutcome, FormError> {
        let record: Record = self.field_values.clone();
        let outcome = match self.edit_cursor {
            Some(index) => {
                store.replace_at(&self.active_form_type, index, record)?;
                CommitOutcome::Updated
            }
            None => {
                store.append(&self.active_form_type, record);
                CommitOutcome::Created
            }
        };
        self.reset_transient();
        Ok(outcome)
    }

    /// Required fields of the active schema that are absent or empty.
    ///
    /// Commit does not consult this; it is the hook a validating policy
    /// would call at commit time.
    pub fn missing_required(&self, registry: &SchemaRegistry) -> Vec<String> {
        let schema = match registry.lookup(&self.active_form_type) {
            Ok(schema) => schema,
            Err(_) => return Vec::new(),
        };
        schema
            .fields
            .iter()
            .filter(|f| f.required)
            .filter(|f| self.field_values.get(&f.name).map_or(true, |v| v.is_empty()))
            .map(|f| f.name.clone())
            .collect()
    }

    /// The single reset point for transient session state: clears the
    /// entered values, drops the edit cursor, and closes the dialog.
    /// `cancel` and `open_for_new` deliberately do not call this.
    fn reset_transient(&mut self) {
        self.field_values.clear();
        self.edit_cursor = None;
        self.dialog_open = false;
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SchemaRegistry;

    fn session() -> FormSession {
        FormSession::new("userInformation")
    }

    #[test]
    fn new_session_starts_closed() {
        let session = session();
        assert_eq!(session.dialog_state(), DialogState::Closed);
        assert_eq!(session.edit_cursor(), None);
    }

    #[test]
    fn select_form_type_rejects_unknown_types() {
        let registry = SchemaRegistry::builtin();
        let mut session = session();
        session.set_field_value("firstName", "Ada");

        let err = session.select_form_type("bankInformation", &registry).unwrap_err();
        assert_eq!(err, FormError::UnknownFormType("bankInformation".to_owned()));
        // rejected switch leaves the session untouched
        assert_eq!(session.active_form_type(), "userInformation");
        assert_eq!(session.field_value("firstName"), Some("Ada"));
    }

    #[test]
    fn select_form_type_clears_values_but_not_cursor() {
        let registry = SchemaRegistry::builtin();
        let mut store = RecordStore::new();
        let mut session = session();

        session.set_field_value("firstName", "Ada");
        session.commit(&mut store).unwrap();
        session.open_for_edit(0, &store).unwrap();

        session.select_form_type("addressInformation", &registry).unwrap();
        assert_eq!(session.field_value("firstName"), None);
        assert_eq!(session.edit_cursor(), Some(0));
    }

    #[test]
    fn open_for_new_leaves_existing_state_in_place() {
        let mut session = session();
        session.set_field_value("firstName", "Ada");
        session.open_for_new();

        assert_eq!(session.dialog_state(), DialogState::OpenNew);
        assert_eq!(session.field_value("firstName"), Some("Ada"));
    }

    #[test]
    fn cancel_closes_but_retains_values_and_cursor() {
        let mut store = RecordStore::new();
        let mut session = session();
        session.set_field_value("firstName", "Ada");
        session.commit(&mut store).unwrap();

        session.open_for_edit(0, &store).unwrap();
        session.cancel();

        assert_eq!(session.dialog_state(), DialogState::Closed);
        assert_eq!(session.field_value("firstName"), Some("Ada"));
        assert_eq!(session.edit_cursor(), Some(0));
        // reopening as "new" now shows the stale record, as shipped
        session.open_for_new();
        assert_eq!(session.dialog_state(), DialogState::OpenEdit(0));
    }

    #[test]
    fn commit_new_record_appends_and_resets() {
        let mut store = RecordStore::new();
        let mut session = session();
        session.open_for_new();
        session.set_field_value("firstName", "Ada");
        session.set_field_value("lastName", "Lovelace");

        let outcome = session.commit(&mut store).unwrap();
        assert_eq!(outcome, CommitOutcome::Created);
        assert_eq!(store.len_for("userInformation"), 1);
        let listed: Vec<_> = store.list_for("userInformation").collect();
        assert_eq!(listed[0]["firstName"], "Ada");
        assert_eq!(listed[0]["lastName"], "Lovelace");

        assert_eq!(session.dialog_state(), DialogState::Closed);
        assert_eq!(session.edit_cursor(), None);
        assert_eq!(session.field_value("firstName"), None);
    }

    #[test]
    fn edit_commit_round_trip_preserves_record() {
        let mut store = RecordStore::new();
        let mut session = session();
        session.set_field_value("firstName", "Ada");
        session.set_field_value("lastName", "Lovelace");
        session.commit(&mut store).unwrap();
        let original = store.get("userInformation", 0).cloned().unwrap();

        session.open_for_edit(0, &store).unwrap();
        assert_eq!(session.dialog_state(), DialogState::OpenEdit(0));
        assert_eq!(session.field_value("firstName"), Some("Ada"));

        let outcome = session.commit(&mut store).unwrap();
        assert_eq!(outcome, CommitOutcome::Updated);
        assert_eq!(store.len_for("userInformation"), 1);
        assert_eq!(store.get("userInformation", 0), Some(&original));
    }

    #[test]
    fn open_for_edit_rejects_invalid_index() {
        let store = RecordStore::new();
        let mut session = session();

        let err = session.open_for_edit(0, &store).unwrap_err();
        assert_eq!(
            err,
            FormError::IndexOutOfRange {
                form_type: "userInformation".to_owned(),
                index: 0,
                len: 0,
            }
        );
        assert_eq!(session.dialog_state(), DialogState::Closed);
    }

    #[test]
    fn commit_with_stale_cursor_fails_and_keeps_state() {
        let mut store = RecordStore::new();
        let mut session = session();
        session.set_field_value("firstName", "Ada");
        session.commit(&mut store).unwrap();

        session.open_for_edit(0, &store).unwrap();
        store.remove_at("userInformation", 0).unwrap();

        let err = session.commit(&mut store).unwrap_err();
        assert!(matches!(err, FormError::IndexOutOfRange { .. }));
        // failed commit keeps the dialog open with the entered values
        assert_eq!(session.dialog_state(), DialogState::OpenEdit(0));
        assert_eq!(session.field_value("firstName"), Some("Ada"));
    }

    #[test]
    fn missing_required_reports_absent_and_empty_fields() {
        let registry = SchemaRegistry::builtin();
        let mut session = session();

        session.set_field_value("firstName", "Ada");
        session.set_field_value("lastName", "");
        assert_eq!(session.missing_required(&registry), vec!["lastName"]);

        session.set_field_value("lastName", "Lovelace");
        assert!(session.missing_required(&registry).is_empty());
        // "age" is optional and never reported
    }

    #[test]
    fn commit_proceeds_despite_missing_required_fields() {
        let registry = SchemaRegistry::builtin();
        let mut store = RecordStore::new();
        let mut session = session();
        session.set_field_value("age", "36");

        assert!(!session.missing_required(&registry).is_empty());
        let outcome = session.commit(&mut store).unwrap();
        assert_eq!(outcome, CommitOutcome::Created);
        assert_eq!(store.len_for("userInformation"), 1);
    }
}
