//! The filesystem capability contract.

use crate::error::Result;
use async_trait::async_trait;
use bytes::Bytes;
use chrono::{DateTime, Utc};
use std::io::Cursor;

/// What happened to a delete request.
///
/// Deletes never raise: the legacy contract favors availability, so failures
/// are logged and reported here instead of collapsing into silence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// At least one blob was removed.
    Deleted,
    /// Nothing existed at the path; the store was not mutated.
    Absent,
    /// The store reported an error; it was logged, not raised.
    Failed,
}

/// The capability surface a storage backend must provide to the CMS media
/// subsystem. [`BlobFileSystem`](crate::BlobFileSystem) is the blob-backed
/// implementation; any backing store satisfying this trait can be swapped in.
#[async_trait]
pub trait FileSystem: Send + Sync {
    /// Write `content` at `path`.
    ///
    /// When `overwrite_if_exists` is false and a blob already exists, a
    /// warning is logged and the write proceeds anyway; the flag only gates
    /// the warning. Content type is derived from the file extension.
    async fn add_file(&self, path: &str, content: Bytes, overwrite_if_exists: bool) -> Result<()>;

    /// Delete the blob at `path`, if present.
    async fn delete_file(&self, path: &str) -> DeleteOutcome;

    /// Delete every blob under the simulated directory at `path`.
    ///
    /// A no-op ([`DeleteOutcome::Absent`]) when the directory does not
    /// exist. The `recursive` flag is accepted for interface compatibility;
    /// deletion is always recursive.
    async fn delete_directory(&self, path: &str, recursive: bool) -> DeleteOutcome;

    /// Whether a blob exists at `path`. Store errors report `false`.
    async fn file_exists(&self, path: &str) -> bool;

    /// Whether the simulated directory at `path` has any blobs under it.
    /// Store errors report `false`.
    async fn directory_exists(&self, path: &str) -> bool;

    /// Blob names directly under `path`. `filter` is accepted for interface
    /// compatibility but not applied.
    async fn get_files(&self, path: &str, filter: Option<&str>) -> Result<Vec<String>>;

    /// Simulated directory names directly under `path`, each reduced to its
    /// final path segment.
    async fn get_directories(&self, path: &str) -> Result<Vec<String>>;

    /// Prefix the container root URL onto `path`; idempotent.
    fn get_full_path(&self, path: &str) -> String;

    /// Strip the container root from a full path or URL, scheme-insensitively.
    fn get_relative_path(&self, path_or_url: &str) -> String;

    /// Absolute URL for `path`.
    fn get_url(&self, path: &str) -> String;

    /// Download the blob at `path` into memory, readable from the start.
    async fn open_file(&self, path: &str) -> Result<Cursor<Bytes>>;

    /// Store-reported creation timestamp (the store keeps a single
    /// timestamp; this mirrors last-modified).
    async fn get_created(&self, path: &str) -> Result<DateTime<Utc>>;

    /// Store-reported last-modified timestamp.
    async fn get_last_modified(&self, path: &str) -> Result<DateTime<Utc>>;
}
