use survey_model::Restriction;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("mutation refused by locking restriction `{restriction}`")]
    Locked { restriction: Restriction },
    #[error("no row with identity {0:?}")]
    RowNotFound(String),
    #[error("cascade importer has no confirmed parse")]
    CascadeNotReady,
}

pub type Result<T> = std::result::Result<T, EngineError>;
