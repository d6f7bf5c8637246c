use std::time::Duration;

use quote_table::cache::CacheConfig;
use quote_table::cache::CacheProvider;
use quote_table::cache::MemoryCache;
use quote_table::error::SourceError;
use quote_table::model::Record;
use quote_table::model::RecordId;
use quote_table::source::CachedSource;
use quote_table::source::MemorySource;
use quote_table::source::RecordSource;
use quote_table::table::BulkAction;
use quote_table::table::Column;
use quote_table::table::TableEngine;
use quote_table::table::TableOptions;

fn source() -> MemorySource {
    let rows = (1..=12i64)
        .map(|i| {
            Record::new(i)
                .set("guest", format!("Guest {i}"))
                .set("nights", i % 5)
        })
        .collect();
    MemorySource::new().with_table("quotes", rows)
}

fn columns() -> Vec<Column<Record>> {
    vec![
        Column::new("guest", "Guest").sortable(),
        Column::new("nights", "Nights").sortable(),
    ]
}

#[tokio::test]
async fn test_bulk_delete_through_source() {
    let source = CachedSource::new(source());
    let rows = source.fetch("quotes").await.unwrap();

    let mut pending = Vec::new();
    let mut table = TableEngine::new(
        &rows,
        columns(),
        TableOptions::new()
            .items_per_page(5)
            .bulk_action(BulkAction::new("Delete", "delete")),
    )
    .on_bulk_action(|action, ids| pending.push((action.to_string(), ids.to_vec())));

    table.set_page(2);
    table.toggle_select_all();
    assert!(table.dispatch_bulk_action("delete"));
    drop(table);

    for (action, ids) in pending {
        assert_eq!(action, "delete");
        assert_eq!(source.delete("quotes", &ids).await.unwrap(), 5);
    }

    let rows = source.fetch("quotes").await.unwrap();
    let left: Vec<RecordId> = rows.iter().map(|r| r.id().clone()).collect();
    let expected: Vec<RecordId> = [1i64, 2, 3, 4, 5, 11, 12].into_iter().map(RecordId::from).collect();
    assert_eq!(left, expected);

    let table = TableEngine::new(&rows, columns(), TableOptions::new().items_per_page(5));
    assert_eq!(table.total_pages(), 2);
}

#[tokio::test]
async fn test_unknown_table() {
    let source = source();
    let err = source.fetch("invoices").await.unwrap_err();
    assert!(matches!(err, SourceError::NotFound { .. }));
    assert_eq!(err.to_string(), "Table 'invoices' not found");
}

#[tokio::test]
async fn test_cached_rows_expire() {
    let config = CacheConfig::new().with_rows_ttl(Duration::from_millis(20));
    let source = CachedSource::with_cache(source(), MemoryCache::new(), config);

    source.fetch("quotes").await.unwrap();
    assert_eq!(source.cache().len(), 1);

    tokio::time::sleep(Duration::from_millis(40)).await;
    assert_eq!(source.cache().purge_expired().await, 1);
    assert!(source.cache().is_empty());

    assert_eq!(source.fetch("quotes").await.unwrap().len(), 12);
}
