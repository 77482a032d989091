use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum ShelfError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Book not found: {0}")]
    NotFound(Uuid),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

impl ShelfError {
    pub fn is_validation(&self) -> bool {
        matches!(self, ShelfError::Validation(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ShelfError::NotFound(_))
    }
}

pub type Result<T> = std::result::Result<T, ShelfError>;
