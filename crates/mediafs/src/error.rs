//! Error types for filesystem operations.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, FsError>;

#[derive(Error, Debug)]
pub enum FsError {
    #[error("store error: {0}")]
    Store(#[from] blobstore::StoreError),

    #[error("blob not found: {0}")]
    NotFound(String),

    #[error("invalid root URL: {0}")]
    InvalidRootUrl(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
