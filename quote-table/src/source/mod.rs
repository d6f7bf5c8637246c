//! Data access for table screens.
//!
//! Screens never reach for a global database client. They are handed a
//! [`RecordSource`] and load rows through it before building a
//! [`TableEngine`](crate::table::TableEngine). Bulk handlers that mutate
//! rows go through the same source.
//!
//! - [`MemorySource`] keeps tables in memory (tests, demos, fixtures)
//! - [`CachedSource`] fronts any source with a TTL row cache

mod cached;
mod codec;
mod memory;

pub use cached::CachedSource;
pub use codec::CacheRow;
pub use memory::MemorySource;

use async_trait::async_trait;

use crate::error::SourceError;
use crate::model::RecordId;
use crate::model::TableRecord;

/// Interface to the store that holds the rows of each table.
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Row type produced by this source.
    type Record: TableRecord + Send + Sync;

    /// Loads every row of `table`.
    async fn fetch(&self, table: &str) -> Result<Vec<Self::Record>, SourceError>;

    /// Deletes the rows of `table` with the given ids.
    ///
    /// Returns how many rows were deleted; unknown ids are skipped.
    async fn delete(&self, table: &str, ids: &[RecordId]) -> Result<usize, SourceError>;
}
