//! In-memory record source

use async_trait::async_trait;
use dashmap::DashMap;

use super::RecordSource;
use crate::error::SourceError;
use crate::model::Record;
use crate::model::RecordId;
use crate::model::TableRecord;

/// A [`RecordSource`] holding its tables in memory.
///
/// # Example
///
/// ```
/// use quote_table::model::Record;
/// use quote_table::source::MemorySource;
///
/// let source = MemorySource::new()
///     .with_table("lodges", vec![Record::new(1).set("name", "Mara Serena")]);
/// assert_eq!(source.table_len("lodges"), Some(1));
/// ```
#[derive(Debug)]
pub struct MemorySource<R = Record> {
    tables: DashMap<String, Vec<R>>,
}

impl<R> Default for MemorySource<R> {
    fn default() -> Self {
        Self {
            tables: DashMap::new(),
        }
    }
}

impl<R> MemorySource<R> {
    /// Creates a source with no tables.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a table (builder pattern).
    pub fn with_table(self, table: impl Into<String>, rows: Vec<R>) -> Self {
        self.insert_table(table, rows);
        self
    }

    /// Adds or replaces a table.
    pub fn insert_table(&self, table: impl Into<String>, rows: Vec<R>) {
        self.tables.insert(table.into(), rows);
    }

    /// Number of rows in `table`, or `None` if the table does not exist.
    pub fn table_len(&self, table: &str) -> Option<usize> {
        self.tables.get(table).map(|rows| rows.len())
    }
}

#[async_trait]
impl<R> RecordSource for MemorySource<R>
where
    R: TableRecord + Clone + Send + Sync,
{
    type Record = R;

    async fn fetch(&self, table: &str) -> Result<Vec<R>, SourceError> {
        self.tables
            .get(table)
            .map(|rows| rows.clone())
            .ok_or_else(|| SourceError::not_found(table))
    }

    async fn delete(&self, table: &str, ids: &[RecordId]) -> Result<usize, SourceError> {
        let mut rows = self
            .tables
            .get_mut(table)
            .ok_or_else(|| SourceError::not_found(table))?;

        let before = rows.len();
        rows.retain(|row| !ids.contains(&row.id()));
        let deleted = before - rows.len();
        log::debug!("deleted {deleted} of {} requested rows from {table}", ids.len());
        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source() -> MemorySource {
        MemorySource::new().with_table(
            "quotes",
            vec![Record::new(1), Record::new(2), Record::new(3)],
        )
    }

    #[tokio::test]
    async fn test_fetch() {
        let rows = source().fetch("quotes").await.unwrap();
        assert_eq!(rows.len(), 3);

        let err = source().fetch("invoices").await.unwrap_err();
        assert!(matches!(err, SourceError::NotFound { ref table } if table == "invoices"));
    }

    #[tokio::test]
    async fn test_delete_skips_unknown_ids() {
        let source = source();
        let deleted = source
            .delete("quotes", &[RecordId::from(1), RecordId::from(3), RecordId::from(42)])
            .await
            .unwrap();

        assert_eq!(deleted, 2);
        assert_eq!(source.table_len("quotes"), Some(1));
    }
}
