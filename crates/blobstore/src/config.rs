//! Store connection configuration.

use serde::{Deserialize, Serialize};

/// Connection settings for the backing object store.
///
/// The URL scheme selects the backend:
/// - `az://container` - Azure Blob Storage
/// - `s3://bucket` - S3-compatible storage
/// - `file:///path` (or a bare path) - local filesystem, for development
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    pub url: String,

    /// Azure storage account name.
    #[serde(default)]
    pub account: String,

    /// Azure access key, or S3 access key id.
    #[serde(default)]
    pub access_key: String,

    /// S3 secret key.
    #[serde(default)]
    pub secret_key: String,

    /// S3 region.
    #[serde(default)]
    pub region: String,

    /// Custom endpoint (Azurite, MinIO, R2, etc.).
    #[serde(default)]
    pub endpoint: String,
}
