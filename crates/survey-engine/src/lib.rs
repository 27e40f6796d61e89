//! Survey document engine.
//!
//! Interprets a form definition stored as a flat, ordered list of rows plus
//! a flat list of shared choice-list entries: path resolution over the
//! implied tree, label-holder recognition, locking policy, library
//! extraction, and cascading-select import. No I/O, no UI; every operation
//! takes the document by reference for its duration.

pub mod cascade;
pub mod edit;
pub mod error;
pub mod export;
pub mod labels;
pub mod library;
pub mod locking;
pub mod paths;

pub use cascade::{CascadeFragment, CascadeImporter, CascadeState, INVALID_PASTE_MESSAGE};
pub use error::{EngineError, Result};
pub use export::{DerivedColumn, ordered_columns};
pub use labels::{is_label_holder, resolve_label};
pub use library::{extract_group, extract_question, unnullify_translations};
pub use locking::{has_any_locking, has_restriction, is_fully_locked};
pub use paths::{FlatPathTable, FlattenedQuestion, PathEntry, PathOptions, flatten_questions, resolve_paths};
