//! Cache configuration

use std::time::Duration;

/// How long fetched rows stay cached.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use quote_table::cache::CacheConfig;
///
/// let config = CacheConfig::default().with_rows_ttl(Duration::from_secs(30));
/// assert!(config.is_enabled());
/// assert!(!CacheConfig::no_cache().is_enabled());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheConfig {
    /// TTL for a table's row set.
    ///
    /// Default: 60 seconds
    pub rows_ttl: Duration,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            rows_ttl: Duration::from_secs(60),
        }
    }
}

impl CacheConfig {
    /// Creates a new cache config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the row TTL.
    pub fn with_rows_ttl(mut self, ttl: Duration) -> Self {
        self.rows_ttl = ttl;
        self
    }

    /// Creates a config with no caching (zero TTL).
    pub fn no_cache() -> Self {
        Self {
            rows_ttl: Duration::ZERO,
        }
    }

    /// Returns `true` if anything is cached at all.
    pub fn is_enabled(&self) -> bool {
        !self.rows_ttl.is_zero()
    }
}
