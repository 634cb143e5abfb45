//! Error types for blob store operations.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("object store error: {0}")]
    ObjectStore(#[from] object_store::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("blob not found: {0}")]
    NotFound(String),

    #[error("invalid store configuration: {0}")]
    Config(String),

    #[error("delete rejected: {0}")]
    DeleteRejected(String),
}
