//! Adapter configuration, fixed at construction.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// How directory existence checks (and directory deletes) scope their
/// prefix listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DirScope {
    /// Scope by the last path segment only: `a/b` checks under prefix `b`.
    /// This reproduces the legacy adapter and is the compatibility default.
    #[default]
    LastSegment,
    /// Scope by the full container-relative prefix: `a/b` checks `a/b`.
    FullPrefix,
}

/// Settings for a [`BlobFileSystem`](crate::BlobFileSystem). Immutable once
/// the adapter is constructed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaFsConfig {
    /// Container name in the backing store.
    pub container: String,

    /// Public base URL the container is served under
    /// (scheme + host\[:port\]\[/path\]).
    pub root_url: String,

    #[serde(default)]
    pub dir_scope: DirScope,

    /// Maximum number of cached blob handles; zero disables the cache.
    #[serde(default = "default_cache_capacity")]
    pub cache_capacity: usize,

    /// Seconds before a cached handle expires.
    #[serde(default = "default_cache_ttl_secs")]
    pub cache_ttl_secs: u64,

    /// Extension to MIME-type pairs consulted after the built-in table.
    #[serde(default)]
    pub mime_types: HashMap<String, String>,
}

fn default_cache_capacity() -> usize {
    1024
}

fn default_cache_ttl_secs() -> u64 {
    60
}

impl MediaFsConfig {
    /// Config with default cache, scoping, and MIME settings.
    pub fn new(container: impl Into<String>, root_url: impl Into<String>) -> Self {
        Self {
            container: container.into(),
            root_url: root_url.into(),
            dir_scope: DirScope::default(),
            cache_capacity: default_cache_capacity(),
            cache_ttl_secs: default_cache_ttl_secs(),
            mime_types: HashMap::new(),
        }
    }
}
