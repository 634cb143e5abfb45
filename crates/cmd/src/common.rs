//! Configuration loading and filesystem construction shared by commands.

use anyhow::{Context, Result};
use blobstore::{ObjectStoreBlobStore, StoreConfig};
use mediafs::{BlobFileSystem, MediaFsConfig};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;

/// Top-level CLI configuration: store connection plus adapter settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub store: StoreConfig,
    pub filesystem: MediaFsConfig,
}

pub fn load_config(path: &Path) -> Result<AppConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    serde_yaml_ng::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
}

pub async fn build_filesystem(config: &AppConfig) -> Result<BlobFileSystem> {
    let store = Arc::new(ObjectStoreBlobStore::from_config(&config.store)?);
    let fs = BlobFileSystem::new(store, &config.filesystem).await?;
    Ok(fs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mediafs.yaml");
        std::fs::write(
            &path,
            concat!(
                "store:\n",
                "  url: file:///tmp/media\n",
                "filesystem:\n",
                "  container: media\n",
                "  root_url: http://127.0.0.1:10000/acct\n",
                "  mime_types:\n",
                "    svg: image/svg+xml\n",
            ),
        )
        .unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.store.url, "file:///tmp/media");
        assert_eq!(config.filesystem.container, "media");
        assert_eq!(
            config.filesystem.mime_types.get("svg").map(String::as_str),
            Some("image/svg+xml")
        );
    }

    #[test]
    fn test_missing_config_is_an_error() {
        let err = load_config(Path::new("/nonexistent/mediafs.yaml")).unwrap_err();
        assert!(err.to_string().contains("reading config"));
    }
}
