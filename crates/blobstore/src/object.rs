//! `object_store`-backed blob store.

use crate::error::{Result, StoreError};
use crate::store::{BlobHandle, BlobStore, ListItem};
use async_trait::async_trait;
use bytes::Bytes;
use futures::TryStreamExt;
use object_store::path::Path;
use object_store::{Attribute, Attributes, ObjectMeta, ObjectStore, PutOptions, PutPayload};
use std::sync::Arc;

use crate::config::StoreConfig;

/// Blob store over any `object_store` backend.
pub struct ObjectStoreBlobStore {
    store: Arc<dyn ObjectStore>,
}

impl ObjectStoreBlobStore {
    pub fn new(store: Arc<dyn ObjectStore>) -> Self {
        Self { store }
    }

    pub fn from_config(config: &StoreConfig) -> Result<Self> {
        Ok(Self::new(build_object_store(config)?))
    }
}

fn handle_from_meta(meta: ObjectMeta) -> BlobHandle {
    BlobHandle {
        key: meta.location.to_string(),
        size: meta.size,
        last_modified: meta.last_modified,
        e_tag: meta.e_tag,
    }
}

#[async_trait]
impl BlobStore for ObjectStoreBlobStore {
    async fn ensure_container(&self) -> Result<()> {
        // Container provisioning and access levels live with the deployment;
        // this verifies the container is reachable before serving requests.
        self.store.list_with_delimiter(None).await?;
        diagnostics::log_debug!("container reachable");
        Ok(())
    }

    async fn head(&self, key: &str) -> Result<Option<BlobHandle>> {
        let location = Path::from(key);
        match self.store.head(&location).await {
            Ok(meta) => Ok(Some(handle_from_meta(meta))),
            Err(object_store::Error::NotFound { .. }) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn upload(&self, key: &str, content: Bytes, content_type: Option<&str>) -> Result<()> {
        let location = Path::from(key);
        let payload = PutPayload::from(content);
        match content_type {
            Some(ct) => {
                let mut attributes = Attributes::new();
                attributes.insert(Attribute::ContentType, ct.to_string().into());
                let opts = PutOptions {
                    attributes,
                    ..Default::default()
                };
                self.store.put_opts(&location, payload, opts).await?;
            }
            None => {
                self.store.put(&location, payload).await?;
            }
        }
        Ok(())
    }

    async fn download(&self, key: &str) -> Result<Bytes> {
        let location = Path::from(key);
        match self.store.get(&location).await {
            Ok(result) => Ok(result.bytes().await?),
            Err(object_store::Error::NotFound { .. }) => Err(StoreError::NotFound(key.to_string())),
            Err(e) => Err(e.into()),
        }
    }

    async fn delete(&self, key: &str) -> Result<bool> {
        let location = Path::from(key);
        match self.store.delete(&location).await {
            Ok(()) => Ok(true),
            Err(object_store::Error::NotFound { .. }) => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    async fn list(&self, prefix: &str, flat: bool) -> Result<Vec<ListItem>> {
        let prefix = if prefix.is_empty() {
            None
        } else {
            Some(Path::from(prefix))
        };

        if flat {
            let metas: Vec<ObjectMeta> = self.store.list(prefix.as_ref()).try_collect().await?;
            Ok(metas
                .into_iter()
                .map(|meta| ListItem::Blob(handle_from_meta(meta)))
                .collect())
        } else {
            let result = self.store.list_with_delimiter(prefix.as_ref()).await?;
            let mut items: Vec<ListItem> = result
                .common_prefixes
                .into_iter()
                .map(|p| ListItem::Directory(p.to_string()))
                .collect();
            items.extend(
                result
                    .objects
                    .into_iter()
                    .map(|meta| ListItem::Blob(handle_from_meta(meta))),
            );
            Ok(items)
        }
    }
}

/// Build an `object_store` backend from connection config.
///
/// Dispatches on the URL scheme: `az://container`, `s3://bucket`, or a local
/// path (with or without a `file://` prefix).
pub fn build_object_store(config: &StoreConfig) -> Result<Arc<dyn ObjectStore>> {
    if let Some(rest) = config.url.strip_prefix("az://") {
        let container = rest.split('/').next().unwrap_or("");

        let mut builder = object_store::azure::MicrosoftAzureBuilder::new()
            .with_container_name(container)
            .with_account(&config.account);

        if !config.access_key.is_empty() {
            builder = builder.with_access_key(&config.access_key);
        }
        if !config.endpoint.is_empty() {
            builder = builder
                .with_endpoint(config.endpoint.clone())
                .with_allow_http(config.endpoint.starts_with("http://"));
        }

        let store = builder
            .build()
            .map_err(|e| StoreError::Config(format!("failed to build Azure store: {e}")))?;
        Ok(Arc::new(store))
    } else if let Some(rest) = config.url.strip_prefix("s3://") {
        let bucket = rest.split('/').next().unwrap_or("");

        let mut builder = object_store::aws::AmazonS3Builder::new()
            .with_bucket_name(bucket)
            .with_region(&config.region);

        if !config.access_key.is_empty() {
            builder = builder.with_access_key_id(&config.access_key);
        }
        if !config.secret_key.is_empty() {
            builder = builder.with_secret_access_key(&config.secret_key);
        }
        if !config.endpoint.is_empty() {
            builder = builder
                .with_endpoint(config.endpoint.clone())
                .with_allow_http(config.endpoint.starts_with("http://"));
        }

        let store = builder
            .build()
            .map_err(|e| StoreError::Config(format!("failed to build S3 store: {e}")))?;
        Ok(Arc::new(store))
    } else {
        let path = config.url.strip_prefix("file://").unwrap_or(&config.url);
        std::fs::create_dir_all(path)?;
        let store = object_store::local::LocalFileSystem::new_with_prefix(path)
            .map_err(|e| StoreError::Config(format!("failed to build local store: {e}")))?;
        Ok(Arc::new(store))
    }
}
