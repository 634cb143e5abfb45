//! The blob store client trait.

use crate::error::{Result, StoreError};
use async_trait::async_trait;
use bytes::Bytes;
use chrono::{DateTime, Utc};

/// A resolved handle to a stored blob.
///
/// Keys are container-relative, forward-slash separated, and are the literal
/// object names in the underlying store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlobHandle {
    pub key: String,
    pub size: u64,
    pub last_modified: DateTime<Utc>,
    pub e_tag: Option<String>,
}

/// One entry from a prefix listing.
///
/// Single-level listings group deeper entries into virtual directories;
/// flat listings yield blobs only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListItem {
    Blob(BlobHandle),
    /// A virtual directory, named by its container-relative prefix
    /// (no trailing slash).
    Directory(String),
}

/// Narrow interface to a cloud blob container.
///
/// All operations are container-scoped; keys never include the container
/// name or a URL prefix. No retries happen at this layer.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Ensure the backing container exists and is reachable.
    ///
    /// Called once at adapter construction. Access-level provisioning is
    /// backend-specific and may be a no-op.
    async fn ensure_container(&self) -> Result<()>;

    /// Resolve a handle for `key`, or `None` when no such blob exists.
    async fn head(&self, key: &str) -> Result<Option<BlobHandle>>;

    /// Write `content` to `key`, replacing any existing blob.
    async fn upload(&self, key: &str, content: Bytes, content_type: Option<&str>) -> Result<()>;

    /// Read the full content of the blob at `key`.
    async fn download(&self, key: &str) -> Result<Bytes>;

    /// Delete the blob at `key`. Returns `false` when it was already absent.
    async fn delete(&self, key: &str) -> Result<bool>;

    /// List entries under `prefix` (empty string lists the container root).
    ///
    /// `flat` returns every blob regardless of depth; otherwise the listing
    /// is single-level with virtual directory grouping.
    async fn list(&self, prefix: &str, flat: bool) -> Result<Vec<ListItem>>;

    async fn exists(&self, key: &str) -> Result<bool> {
        Ok(self.head(key).await?.is_some())
    }

    async fn last_modified(&self, key: &str) -> Result<DateTime<Utc>> {
        match self.head(key).await? {
            Some(handle) => Ok(handle.last_modified),
            None => Err(StoreError::NotFound(key.to_string())),
        }
    }
}
