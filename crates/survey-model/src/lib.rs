pub mod choice;
pub mod document;
pub mod error;
pub mod ids;
pub mod label;
pub mod locking;
pub mod row;

pub use choice::Choice;
pub use document::{Document, DocumentSettings};
pub use error::{ModelError, Result};
pub use ids::{ChoiceKey, ListName, RowKey};
pub use label::LabelText;
pub use locking::{GLOBAL_LOCK_PROFILE, LockingProfile, Restriction};
pub use row::{Row, RowType};
