//! In-memory blob store for tests.

use crate::error::{Result, StoreError};
use crate::store::{BlobHandle, BlobStore, ListItem};
use async_trait::async_trait;
use bytes::Bytes;
use chrono::{DateTime, Utc};
use std::collections::{BTreeMap, BTreeSet};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use tokio::sync::Mutex;

#[derive(Debug, Clone)]
struct MemoryBlob {
    content: Bytes,
    content_type: Option<String>,
    last_modified: DateTime<Utc>,
    revision: u64,
}

/// In-memory [`BlobStore`] with the same prefix-listing semantics as the
/// real backends: a prefix scopes a virtual directory, and single-level
/// listings group deeper keys into [`ListItem::Directory`] entries.
#[derive(Debug, Default)]
pub struct MemoryBlobStore {
    blobs: Mutex<BTreeMap<String, MemoryBlob>>,
    next_revision: AtomicU64,
    fail_deletes: AtomicBool,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent delete fail, for exercising failure handling.
    pub fn fail_deletes(&self, fail: bool) {
        self.fail_deletes.store(fail, Ordering::SeqCst);
    }

    /// All stored keys, in lexical order.
    pub async fn keys(&self) -> Vec<String> {
        self.blobs.lock().await.keys().cloned().collect()
    }

    /// The content type recorded for `key`, if any.
    pub async fn content_type(&self, key: &str) -> Option<String> {
        self.blobs
            .lock()
            .await
            .get(key)
            .and_then(|blob| blob.content_type.clone())
    }

    fn handle(key: &str, blob: &MemoryBlob) -> BlobHandle {
        BlobHandle {
            key: key.to_string(),
            size: blob.content.len() as u64,
            last_modified: blob.last_modified,
            e_tag: Some(format!("rev-{}", blob.revision)),
        }
    }
}

/// Normalize a listing prefix to directory form: empty, or ending in `/`.
fn dir_prefix(prefix: &str) -> String {
    let trimmed = prefix.trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("{trimmed}/")
    }
}

#[async_trait]
impl BlobStore for MemoryBlobStore {
    async fn ensure_container(&self) -> Result<()> {
        Ok(())
    }

    async fn head(&self, key: &str) -> Result<Option<BlobHandle>> {
        let blobs = self.blobs.lock().await;
        Ok(blobs.get(key).map(|blob| Self::handle(key, blob)))
    }

    async fn upload(&self, key: &str, content: Bytes, content_type: Option<&str>) -> Result<()> {
        let revision = self.next_revision.fetch_add(1, Ordering::SeqCst);
        let mut blobs = self.blobs.lock().await;
        blobs.insert(
            key.to_string(),
            MemoryBlob {
                content,
                content_type: content_type.map(str::to_string),
                last_modified: Utc::now(),
                revision,
            },
        );
        Ok(())
    }

    async fn download(&self, key: &str) -> Result<Bytes> {
        let blobs = self.blobs.lock().await;
        blobs
            .get(key)
            .map(|blob| blob.content.clone())
            .ok_or_else(|| StoreError::NotFound(key.to_string()))
    }

    async fn delete(&self, key: &str) -> Result<bool> {
        if self.fail_deletes.load(Ordering::SeqCst) {
            return Err(StoreError::DeleteRejected("injected failure".to_string()));
        }
        let mut blobs = self.blobs.lock().await;
        Ok(blobs.remove(key).is_some())
    }

    async fn list(&self, prefix: &str, flat: bool) -> Result<Vec<ListItem>> {
        let scope = dir_prefix(prefix);
        let blobs = self.blobs.lock().await;

        let mut items = Vec::new();
        let mut dirs = BTreeSet::new();
        for (key, blob) in blobs.iter() {
            let Some(rest) = key.strip_prefix(&scope) else {
                continue;
            };
            if flat {
                items.push(ListItem::Blob(Self::handle(key, blob)));
            } else {
                match rest.split_once('/') {
                    None => items.push(ListItem::Blob(Self::handle(key, blob))),
                    Some((child, _)) => {
                        dirs.insert(format!("{scope}{child}"));
                    }
                }
            }
        }
        items.extend(dirs.into_iter().map(ListItem::Directory));
        Ok(items)
    }
}
