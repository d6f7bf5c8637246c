//! In-process cache backed by DashMap

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;

use super::CacheProvider;
use super::CachedValue;

/// An in-memory cache on a concurrent hash map.
///
/// Expired entries are dropped lazily on `get` and in bulk by
/// [`purge_expired`](CacheProvider::purge_expired). Contents are lost when
/// the process exits.
#[derive(Debug, Default)]
pub struct MemoryCache {
    entries: DashMap<String, CachedValue>,
}

impl MemoryCache {
    /// Creates a new empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored entries, expired ones included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl CacheProvider for MemoryCache {
    async fn get(&self, key: &str) -> Option<CachedValue> {
        let entry = self.entries.get(key)?;
        if entry.is_expired() {
            // Release the shard read lock before removing.
            drop(entry);
            self.entries.remove(key);
            log::trace!("cache entry {key} expired");
            return None;
        }
        Some(entry.value().clone())
    }

    async fn set(&self, key: &str, value: CachedValue) {
        self.entries.insert(key.to_string(), value);
    }

    async fn remove(&self, key: &str) {
        self.entries.remove(key);
    }

    async fn clear(&self) {
        self.entries.clear();
    }

    async fn purge_expired(&self) -> usize {
        let now = Utc::now();
        let before = self.entries.len();
        self.entries.retain(|_, value| !value.is_expired_at(now));
        before.saturating_sub(self.entries.len())
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[tokio::test]
    async fn test_get_returns_live_entries() {
        let cache = MemoryCache::new();
        cache
            .set("rows:quotes", CachedValue::expiring_in(b"[1]".to_vec(), Duration::from_secs(60)))
            .await;

        let hit = cache.get("rows:quotes").await.unwrap();
        assert_eq!(hit.data, b"[1]".to_vec());
        assert!(cache.get("rows:lodges").await.is_none());
    }

    #[tokio::test]
    async fn test_expired_entries_are_dropped() {
        let cache = MemoryCache::new();
        cache.set("stale", CachedValue::expiring_in(Vec::new(), Duration::ZERO)).await;
        cache
            .set("fresh", CachedValue::expiring_in(Vec::new(), Duration::from_secs(60)))
            .await;
        cache.set("also-stale", CachedValue::expiring_in(Vec::new(), Duration::ZERO)).await;

        assert_eq!(cache.len(), 3);
        assert!(cache.get("stale").await.is_none());
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.purge_expired().await, 1);
        assert_eq!(cache.len(), 1);
    }

    #[tokio::test]
    async fn test_remove_and_clear() {
        let cache = MemoryCache::new();
        let ttl = Duration::from_secs(60);
        cache.set("a", CachedValue::expiring_in(Vec::new(), ttl)).await;
        cache.set("b", CachedValue::expiring_in(Vec::new(), ttl)).await;

        cache.remove("a").await;
        assert!(cache.get("a").await.is_none());
        cache.clear().await;
        assert!(cache.is_empty());
    }
}
