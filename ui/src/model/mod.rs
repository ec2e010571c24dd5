//! Core form/record model
//!
//! Pure Rust, no browser dependencies: the schema registry, the form
//! session state machine, and the in-memory record store. The presentation
//! layer in `components` renders this model; nothing here renders.

mod error;
mod schema;
mod session;
mod store;

pub use error::FormError;
pub use schema::{display_label, FieldDescriptor, FieldKind, FormSchema, SchemaRegistry};
pub use session::{CommitOutcome, DialogState, FormSession};
pub use store::{Record, RecordStore};
