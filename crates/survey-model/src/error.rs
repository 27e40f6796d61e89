use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid row key: {0:?}")]
    InvalidRowKey(String),
    #[error("invalid choice key: {0:?}")]
    InvalidChoiceKey(String),
    #[error("invalid list name: {0:?}")]
    InvalidListName(String),
    #[error("unknown row type: {0:?}")]
    UnknownRowType(String),
    #[error("unknown locking restriction: {0:?}")]
    UnknownRestriction(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
