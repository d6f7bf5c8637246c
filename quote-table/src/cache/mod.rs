//! Row cache
//!
//! Fetched rows are kept for a short TTL so that moving between back-office
//! screens does not refetch the same table. Entries are stored as serialized
//! bytes behind the [`CacheProvider`] trait; [`MemoryCache`] is the
//! in-process implementation.

mod config;
mod memory;

pub use config::*;
pub use memory::*;

use std::time::Duration;

use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;

/// A cached entry with the times it was stored and stops being valid.
#[derive(Debug, Clone, PartialEq)]
pub struct CachedValue {
    /// The cached data, serialized as bytes (JSON for row sets).
    pub data: Vec<u8>,
    /// When this entry was stored.
    pub stored_at: DateTime<Utc>,
    /// When this entry expires and must no longer be returned.
    pub expires_at: DateTime<Utc>,
}

impl CachedValue {
    /// Creates an entry that expires `ttl` from now.
    pub fn expiring_in(data: Vec<u8>, ttl: Duration) -> Self {
        let stored_at = Utc::now();
        let ttl = chrono::Duration::from_std(ttl).unwrap_or(chrono::Duration::zero());
        Self {
            data,
            stored_at,
            expires_at: stored_at + ttl,
        }
    }

    /// Returns `true` if the entry has expired at `now`.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    /// Returns `true` if the entry has expired.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }
}

/// Trait for cache backends.
///
/// Implementations must never hand out an expired entry from
/// [`get`](CacheProvider::get).
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use quote_table::cache::{CacheProvider, CachedValue, MemoryCache};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let cache = MemoryCache::new();
/// cache.set("rows:lodges", CachedValue::expiring_in(b"[]".to_vec(), Duration::from_secs(60))).await;
/// assert!(cache.get("rows:lodges").await.is_some());
/// # }
/// ```
#[async_trait]
pub trait CacheProvider: Send + Sync {
    /// Returns the live entry for `key`, if any.
    async fn get(&self, key: &str) -> Option<CachedValue>;

    /// Stores an entry, replacing any previous one.
    async fn set(&self, key: &str, value: CachedValue);

    /// Drops the entry for `key`.
    async fn remove(&self, key: &str);

    /// Drops every entry.
    async fn clear(&self);

    /// Drops expired entries and returns how many were removed.
    async fn purge_expired(&self) -> usize;
}
