//! The blob-backed filesystem adapter.

use crate::cache::HandleCache;
use crate::config::{DirScope, MediaFsConfig};
use crate::error::{FsError, Result};
use crate::fs::{DeleteOutcome, FileSystem};
use crate::mime::MimeMap;
use crate::path::{ContainerRoot, last_segment};
use async_trait::async_trait;
use blobstore::{BlobHandle, BlobStore, ListItem, StoreError};
use bytes::Bytes;
use chrono::{DateTime, Utc};
use std::io::{Cursor, SeekFrom};
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncSeek, AsyncSeekExt};

/// [`FileSystem`] over a cloud blob container.
///
/// A single instance is shared across concurrent callers; the only internal
/// state beyond the immutable root is the handle cache, and concurrent
/// lookups of the same key at worst duplicate one remote resolution.
pub struct BlobFileSystem {
    store: Arc<dyn BlobStore>,
    root: ContainerRoot,
    mime: MimeMap,
    cache: HandleCache,
    dir_scope: DirScope,
}

impl BlobFileSystem {
    /// Construct the adapter and bootstrap the container.
    pub async fn new(store: Arc<dyn BlobStore>, config: &MediaFsConfig) -> Result<Self> {
        let root = ContainerRoot::new(&config.root_url, &config.container)?;
        store.ensure_container().await?;
        diagnostics::log_info!(
            "media filesystem ready at {root}",
            root: root.url().to_string()
        );
        Ok(Self {
            store,
            root,
            mime: MimeMap::new(config.mime_types.clone()),
            cache: HandleCache::new(
                config.cache_capacity,
                Duration::from_secs(config.cache_ttl_secs),
            ),
            dir_scope: config.dir_scope,
        })
    }

    pub fn root(&self) -> &ContainerRoot {
        &self.root
    }

    /// Buffer a seekable source from offset 0 and store it at `path`.
    pub async fn add_file_from_reader<R>(
        &self,
        path: &str,
        reader: &mut R,
        overwrite_if_exists: bool,
    ) -> Result<()>
    where
        R: AsyncRead + AsyncSeek + Unpin + Send,
    {
        reader.seek(SeekFrom::Start(0)).await?;
        let mut buffer = Vec::new();
        reader.read_to_end(&mut buffer).await?;
        self.add_file(path, Bytes::from(buffer), overwrite_if_exists)
            .await
    }

    /// Resolve a handle through the cache, warning on a missing blob.
    async fn resolve(&self, key: &str) -> Result<Option<BlobHandle>> {
        if let Some(handle) = self.cache.get(key).await {
            diagnostics::log_debug!("cache hit for {key}", key: key.to_string());
            return Ok(Some(handle));
        }
        match self.store.head(key).await? {
            Some(handle) => {
                self.cache.insert(key.to_string(), handle.clone()).await;
                Ok(Some(handle))
            }
            None => {
                diagnostics::log_warn!("blob not found: {key}", key: key.to_string());
                Ok(None)
            }
        }
    }

    /// The listing prefix used for directory existence and deletion,
    /// per the configured compatibility scope.
    fn scoped_prefix<'a>(&self, key: &'a str) -> &'a str {
        match self.dir_scope {
            DirScope::FullPrefix => key,
            DirScope::LastSegment => last_segment(key),
        }
    }
}

#[async_trait]
impl FileSystem for BlobFileSystem {
    async fn add_file(&self, path: &str, content: Bytes, overwrite_if_exists: bool) -> Result<()> {
        let key = self.root.key(path);
        if !overwrite_if_exists && self.file_exists(path).await {
            diagnostics::log_warn!(
                "a file at '{key}' already exists; overwriting",
                key: key.clone()
            );
        }
        let content_type = self.mime.for_name(&key).map(str::to_string);
        self.store
            .upload(&key, content, content_type.as_deref())
            .await?;
        self.cache.remove(&key).await;
        diagnostics::log_info!("uploaded {key}", key: key);
        Ok(())
    }

    async fn delete_file(&self, path: &str) -> DeleteOutcome {
        let key = self.root.key(path);
        match self.store.delete(&key).await {
            Ok(true) => {
                self.cache.remove(&key).await;
                diagnostics::log_info!("deleted {key}", key: key);
                DeleteOutcome::Deleted
            }
            Ok(false) => DeleteOutcome::Absent,
            Err(e) => {
                diagnostics::log_error!(
                    "delete failed for '{key}': {error}",
                    key: key,
                    error: e.to_string()
                );
                DeleteOutcome::Failed
            }
        }
    }

    async fn delete_directory(&self, path: &str, _recursive: bool) -> DeleteOutcome {
        // The recursive flag is accepted for interface compatibility; the
        // flat listing already covers every nested blob.
        let key = self.root.key(path);
        let prefix = self.scoped_prefix(&key);
        let items = match self.store.list(prefix, true).await {
            Ok(items) => items,
            Err(e) => {
                diagnostics::log_error!(
                    "directory listing failed for '{prefix}': {error}",
                    prefix: prefix.to_string(),
                    error: e.to_string()
                );
                return DeleteOutcome::Failed;
            }
        };
        if items.is_empty() {
            return DeleteOutcome::Absent;
        }

        let mut failed = false;
        for item in items {
            let ListItem::Blob(handle) = item else {
                continue;
            };
            match self.store.delete(&handle.key).await {
                Ok(_) => self.cache.remove(&handle.key).await,
                Err(e) => {
                    diagnostics::log_error!(
                        "delete failed for '{key}': {error}",
                        key: handle.key.clone(),
                        error: e.to_string()
                    );
                    failed = true;
                }
            }
        }
        if failed {
            DeleteOutcome::Failed
        } else {
            DeleteOutcome::Deleted
        }
    }

    async fn file_exists(&self, path: &str) -> bool {
        let key = self.root.key(path);
        match self.resolve(&key).await {
            Ok(handle) => handle.is_some(),
            Err(e) => {
                diagnostics::log_warn!(
                    "existence check failed for '{key}': {error}",
                    key: key,
                    error: e.to_string()
                );
                false
            }
        }
    }

    async fn directory_exists(&self, path: &str) -> bool {
        let key = self.root.key(path);
        let prefix = self.scoped_prefix(&key);
        match self.store.list(prefix, true).await {
            Ok(items) => !items.is_empty(),
            Err(e) => {
                diagnostics::log_warn!(
                    "existence check failed for '{prefix}': {error}",
                    prefix: prefix.to_string(),
                    error: e.to_string()
                );
                false
            }
        }
    }

    async fn get_files(&self, path: &str, filter: Option<&str>) -> Result<Vec<String>> {
        if let Some(filter) = filter {
            diagnostics::log_debug!(
                "file filter '{filter}' is not applied",
                filter: filter.to_string()
            );
        }
        let key = self.root.key(path);
        let items = self.store.list(&key, false).await?;
        Ok(items
            .into_iter()
            .filter_map(|item| match item {
                ListItem::Blob(handle) => Some(handle.key),
                ListItem::Directory(_) => None,
            })
            .collect())
    }

    async fn get_directories(&self, path: &str) -> Result<Vec<String>> {
        let key = self.root.key(path);
        let items = self.store.list(&key, false).await?;
        Ok(items
            .into_iter()
            .filter_map(|item| match item {
                ListItem::Directory(name) => Some(last_segment(&name).to_string()),
                ListItem::Blob(_) => None,
            })
            .collect())
    }

    fn get_full_path(&self, path: &str) -> String {
        self.root.full_path(path)
    }

    fn get_relative_path(&self, path_or_url: &str) -> String {
        self.root.relative_path(path_or_url)
    }

    fn get_url(&self, path: &str) -> String {
        self.root.url_for(path)
    }

    async fn open_file(&self, path: &str) -> Result<Cursor<Bytes>> {
        let key = self.root.key(path);
        let content = self.store.download(&key).await.map_err(|e| match e {
            StoreError::NotFound(key) => FsError::NotFound(key),
            other => FsError::Store(other),
        })?;
        Ok(Cursor::new(content))
    }

    async fn get_created(&self, path: &str) -> Result<DateTime<Utc>> {
        // The store keeps a single timestamp per blob.
        self.get_last_modified(path).await
    }

    async fn get_last_modified(&self, path: &str) -> Result<DateTime<Utc>> {
        let key = self.root.key(path);
        match self.resolve(&key).await? {
            Some(handle) => Ok(handle.last_modified),
            None => Err(FsError::NotFound(key)),
        }
    }
}
