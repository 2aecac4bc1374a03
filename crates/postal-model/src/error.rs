use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown rejection reason: {0}")]
    UnknownReason(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
