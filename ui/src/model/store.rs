//! In-memory record store
//!
//! Holds the committed records per form type as ordered, index-addressable
//! lists. Indices are stable between a read and the corresponding write
//! because all access happens on the single UI thread; the store still
//! range-checks every indexed operation at its boundary.

use std::collections::HashMap;

use super::error::FormError;

/// A committed snapshot of field values, keyed by field name.
///
/// All values are stored as entered, as strings, regardless of the declared
/// field kind.
pub type Record = HashMap<String, String>;

/// Per form-type ordered lists of committed records
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecordStore {
    records: HashMap<String, Vec<Record>>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record to the end of a form type's list. Always succeeds;
    /// the list is created on first use.
    pub fn append(&mut self, form_type: &str, record: Record) {
        self.records
            .entry(form_type.to_owned())
            .or_default()
            .push(record);
    }

    /// Overwrite the record at `index`, preserving its position
    pub fn replace_at(
        &mut self,
        form_type: &str,
        index: usize,
        record: Record,
    ) -> Result<(), FormError> {
        match self.records.get_mut(form_type) {
            Some(list) if index < list.len() => {
                list[index] = record;
                Ok(())
            }
            other => Err(FormError::IndexOutOfRange {
                form_type: form_type.to_owned(),
                index,
                len: other.map(|l| l.len()).unwrap_or(0),
            }),
        }
    }

    /// Remove the record at `index`, shifting subsequent records left.
    ///
    /// Any previously computed index past `index` is stale after this call.
    pub fn remove_at(&mut self, form_type: &str, index: usize) -> Result<Record, FormError> {
        match self.records.get_mut(form_type) {
            Some(list) if index < list.len() => Ok(list.remove(index)),
            other => Err(FormError::IndexOutOfRange {
                form_type: form_type.to_owned(),
                index,
                len: other.map(|l| l.len()).unwrap_or(0),
            }),
        }
    }

    /// The record at `index`, if it exists
    pub fn get(&self, form_type: &str, index: usize) -> Option<&Record> {
        self.records.get(form_type).and_then(|list| list.get(index))
    }

    /// Current records for a form type in insertion/edit order; empty for
    /// unknown types. The iterator is lazy, finite, and restartable.
    pub fn list_for(&self, form_type: &str) -> impl Iterator<Item = &Record> {
        self.records
            .get(form_type)
            .map(|list| list.as_slice())
            .unwrap_or_default()
            .iter()
    }

    pub fn len_for(&self, form_type: &str) -> usize {
        self.records.get(form_type).map(|list| list.len()).unwrap_or(0)
    }
}

// ============================================================================
// Tests
// ============================================================================
