mod roundtrip;

use crate::{BlobFileSystem, MediaFsConfig};
use blobstore::MemoryBlobStore;
use std::sync::Arc;

/// Adapter over a fresh in-memory store, with the emulator-style root URL
/// used throughout these tests.
pub(crate) async fn test_fs() -> (Arc<MemoryBlobStore>, BlobFileSystem) {
    test_fs_with(MediaFsConfig::new(
        "media",
        "http://127.0.0.1:10000/devstoreaccount1",
    ))
    .await
}

pub(crate) async fn test_fs_with(config: MediaFsConfig) -> (Arc<MemoryBlobStore>, BlobFileSystem) {
    let store = Arc::new(MemoryBlobStore::new());
    let fs = BlobFileSystem::new(store.clone(), &config)
        .await
        .unwrap();
    (store, fs)
}

pub(crate) fn content(text: &str) -> bytes::Bytes {
    bytes::Bytes::from(text.to_string())
}
