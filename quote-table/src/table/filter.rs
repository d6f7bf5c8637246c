//! Free-text search over rows.

use crate::model::TableRecord;

/// Returns `true` if `record` matches the already lower-cased `needle`.
///
/// With `fields` set, only those fields are searched; otherwise every field
/// of the record, id included. Matching is a case-insensitive substring test
/// on each value's search text.
pub fn matches<R: TableRecord>(record: &R, needle: &str, fields: &[R::Key]) -> bool {
    let hit = |key: &R::Key| record.value(key).search_text().to_lowercase().contains(needle);

    if fields.is_empty() {
        record.keys().iter().any(hit)
    } else {
        fields.iter().any(hit)
    }
}

/// Filters `data` by `query`, preserving order.
///
/// An empty query keeps every row.
pub fn filter_rows<'a, R: TableRecord>(data: &'a [R], query: &str, fields: &[R::Key]) -> Vec<&'a R> {
    if query.is_empty() {
        return data.iter().collect();
    }

    let needle = query.to_lowercase();
    data.iter().filter(|record| matches(*record, &needle, fields)).collect()
}
