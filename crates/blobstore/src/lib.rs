//! Blob store client abstraction for the mediafs adapter.
//!
//! The filesystem layer talks to object storage exclusively through the
//! [`BlobStore`] trait: a narrow surface covering upload, download, delete,
//! existence, timestamps, and prefix listing (flat or single-level).
//!
//! Two implementations are provided:
//! - [`ObjectStoreBlobStore`], wrapping any `object_store` backend (Azure,
//!   S3, local filesystem), selected by URL scheme in [`StoreConfig`].
//! - [`MemoryBlobStore`], an in-memory double for tests.

pub mod config;
pub mod error;
pub mod memory;
mod object;
mod store;

pub use config::StoreConfig;
pub use error::{Result, StoreError};
pub use memory::MemoryBlobStore;
pub use object::{ObjectStoreBlobStore, build_object_store};
pub use store::{BlobHandle, BlobStore, ListItem};
