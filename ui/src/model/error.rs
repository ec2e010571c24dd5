//! Model error types

use thiserror::Error;

/// Errors raised at the form session / record store API boundary.
///
/// Under normal UI-driven use these never fire: the selector only offers
/// registered form types and the table only reports live row indices. They
/// exist as defensive checks; a failed operation leaves state unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    /// The form type identifier is not present in the schema registry
    #[error("unknown form type: '{0}'")]
    UnknownFormType(String),

    /// A record index is outside the current bounds of a record list
    #[error("index {index} out of range for '{form_type}' ({len} records)")]
    IndexOutOfRange {
        form_type: String,
        index: usize,
        len: usize,
    },
}
