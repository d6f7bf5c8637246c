//! Record source with a TTL row cache in front.

use async_trait::async_trait;

use super::CacheRow;
use super::RecordSource;
use crate::cache::CacheConfig;
use crate::cache::CacheProvider;
use crate::cache::CachedValue;
use crate::cache::MemoryCache;
use crate::error::SourceError;
use crate::model::RecordId;

/// Wraps a [`RecordSource`] so repeated fetches of a table are served from a
/// cache until the entry expires.
///
/// Rows are stored through [`CacheRow`], which keeps every value's kind, so
/// a hit returns the same records as the fetch that filled it. Deleting
/// through this source drops the table's entry so the next fetch sees the
/// change.
#[derive(Debug)]
pub struct CachedSource<S, C = MemoryCache> {
    inner: S,
    cache: C,
    config: CacheConfig,
}

impl<S: RecordSource> CachedSource<S> {
    /// Caches `inner` in memory with the default TTL.
    pub fn new(inner: S) -> Self {
        Self::with_cache(inner, MemoryCache::new(), CacheConfig::default())
    }
}

impl<S: RecordSource, C: CacheProvider> CachedSource<S, C> {
    /// Caches `inner` in the given cache.
    pub fn with_cache(inner: S, cache: C, config: CacheConfig) -> Self {
        Self { inner, cache, config }
    }

    /// The wrapped source.
    pub fn inner(&self) -> &S {
        &self.inner
    }

    /// The cache backing this source.
    pub fn cache(&self) -> &C {
        &self.cache
    }

    /// Drops the cached rows of `table`.
    pub async fn invalidate(&self, table: &str) {
        self.cache.remove(&cache_key(table)).await;
    }
}

fn cache_key(table: &str) -> String {
    format!("rows:{table}")
}

#[async_trait]
impl<S, C> RecordSource for CachedSource<S, C>
where
    S: RecordSource,
    S::Record: CacheRow,
    C: CacheProvider,
{
    type Record = S::Record;

    async fn fetch(&self, table: &str) -> Result<Vec<Self::Record>, SourceError> {
        let key = cache_key(table);
        if let Some(cached) = self.cache.get(&key).await {
            match S::Record::decode_rows(&cached.data) {
                Ok(rows) => {
                    log::trace!("serving {table} from cache");
                    return Ok(rows);
                }
                Err(err) => {
                    log::warn!("dropping unreadable cache entry for {table}: {err}");
                    self.cache.remove(&key).await;
                }
            }
        }

        let rows = self.inner.fetch(table).await?;
        if self.config.is_enabled() {
            match S::Record::encode_rows(&rows) {
                Ok(data) => {
                    self.cache
                        .set(&key, CachedValue::expiring_in(data, self.config.rows_ttl))
                        .await;
                }
                Err(err) => log::warn!("not caching {table}: {err}"),
            }
        }
        Ok(rows)
    }

    async fn delete(&self, table: &str, ids: &[RecordId]) -> Result<usize, SourceError> {
        let deleted = self.inner.delete(table, ids).await;
        // Invalidate even on failure; the store may have applied part of it.
        self.invalidate(table).await;
        deleted
    }
}
