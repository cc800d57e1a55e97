use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelRegistryError {
    #[error("Model not found: {0}")]
    ModelNotFound(Uuid),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type ModelRegistryResult<T> = Result<T, ModelRegistryError>;
