//! Bounded, time-expiring cache of resolved blob handles.
//!
//! The legacy adapter cached handles for the lifetime of the instance with
//! no bound and no expiry; this cache keeps the lookup savings while putting
//! a configurable capacity and TTL on staleness.

use blobstore::BlobHandle;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;

struct CacheEntry {
    handle: BlobHandle,
    inserted: Instant,
}

pub struct HandleCache {
    capacity: usize,
    ttl: Duration,
    entries: Mutex<HashMap<String, CacheEntry>>,
}

impl HandleCache {
    /// A cache holding at most `capacity` handles, each for at most `ttl`.
    /// A capacity of zero disables caching entirely.
    pub fn new(capacity: usize, ttl: Duration) -> Self {
        Self {
            capacity,
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub async fn get(&self, key: &str) -> Option<BlobHandle> {
        let mut entries = self.entries.lock().await;
        match entries.get(key) {
            Some(entry) if entry.inserted.elapsed() < self.ttl => Some(entry.handle.clone()),
            Some(_) => {
                entries.remove(key);
                None
            }
            None => None,
        }
    }

    pub async fn insert(&self, key: String, handle: BlobHandle) {
        if self.capacity == 0 {
            return;
        }
        let mut entries = self.entries.lock().await;
        let ttl = self.ttl;
        entries.retain(|_, entry| entry.inserted.elapsed() < ttl);
        if entries.len() >= self.capacity {
            let oldest = entries
                .iter()
                .min_by_key(|(_, entry)| entry.inserted)
                .map(|(key, _)| key.clone());
            if let Some(oldest) = oldest {
                entries.remove(&oldest);
            }
        }
        entries.insert(
            key,
            CacheEntry {
                handle,
                inserted: Instant::now(),
            },
        );
    }

    pub async fn remove(&self, key: &str) {
        self.entries.lock().await.remove(key);
    }

    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.lock().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn handle(key: &str) -> BlobHandle {
        BlobHandle {
            key: key.to_string(),
            size: 1,
            last_modified: Utc::now(),
            e_tag: None,
        }
    }

    #[tokio::test]
    async fn test_hit_and_miss() {
        let cache = HandleCache::new(8, Duration::from_secs(60));
        cache.insert("a".to_string(), handle("a")).await;

        assert_eq!(cache.get("a").await.map(|h| h.key), Some("a".to_string()));
        assert!(cache.get("b").await.is_none());
    }

    #[tokio::test]
    async fn test_ttl_expiry() {
        let cache = HandleCache::new(8, Duration::from_millis(10));
        cache.insert("a".to_string(), handle("a")).await;

        tokio::time::sleep(Duration::from_millis(30)).await;
        assert!(cache.get("a").await.is_none());
        assert!(cache.is_empty().await);
    }

    #[tokio::test]
    async fn test_capacity_bound_evicts_oldest() {
        let cache = HandleCache::new(2, Duration::from_secs(60));
        cache.insert("a".to_string(), handle("a")).await;
        tokio::time::sleep(Duration::from_millis(5)).await;
        cache.insert("b".to_string(), handle("b")).await;
        tokio::time::sleep(Duration::from_millis(5)).await;
        cache.insert("c".to_string(), handle("c")).await;

        assert_eq!(cache.len().await, 2);
        assert!(cache.get("a").await.is_none());
        assert!(cache.get("b").await.is_some());
        assert!(cache.get("c").await.is_some());
    }

    #[tokio::test]
    async fn test_zero_capacity_disables_caching() {
        let cache = HandleCache::new(0, Duration::from_secs(60));
        cache.insert("a".to_string(), handle("a")).await;
        assert!(cache.get("a").await.is_none());
    }

    #[tokio::test]
    async fn test_remove() {
        let cache = HandleCache::new(8, Duration::from_secs(60));
        cache.insert("a".to_string(), handle("a")).await;
        cache.remove("a").await;
        assert!(cache.get("a").await.is_none());
    }
}
