//! Row encoding for the row cache.
//!
//! The JSON row format is lossy: a `Decimal` reads back as a float and a
//! string shaped like a date reads back as a date. Cached rows are written
//! with every value tagged by its kind instead, so a cache hit returns the
//! same records the source produced.

use std::collections::HashMap;

use chrono::DateTime;
use chrono::NaiveDate;
use chrono::Utc;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

use crate::model::Record;
use crate::model::RecordId;
use crate::model::Value;

/// Rows that can be stored in a byte cache and read back unchanged.
///
/// Row types whose serde representation already round-trips can implement
/// this with `serde_json::to_vec` and `serde_json::from_slice`.
pub trait CacheRow: Sized {
    /// Encodes `rows` for storage.
    fn encode_rows(rows: &[Self]) -> Result<Vec<u8>, serde_json::Error>;

    /// Decodes rows written by [`encode_rows`](CacheRow::encode_rows).
    fn decode_rows(data: &[u8]) -> Result<Vec<Self>, serde_json::Error>;
}

#[derive(Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
enum StoredValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Decimal(Decimal),
    String(String),
    Date(NaiveDate),
    DateTime(DateTime<Utc>),
    Guid(Uuid),
    Json(serde_json::Value),
}

impl From<&Value> for StoredValue {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => StoredValue::Null,
            Value::Bool(b) => StoredValue::Bool(*b),
            Value::Int(i) => StoredValue::Int(*i),
            Value::Float(f) => StoredValue::Float(*f),
            Value::Decimal(d) => StoredValue::Decimal(*d),
            Value::String(s) => StoredValue::String(s.clone()),
            Value::Date(d) => StoredValue::Date(*d),
            Value::DateTime(dt) => StoredValue::DateTime(*dt),
            Value::Guid(g) => StoredValue::Guid(*g),
            Value::Json(j) => StoredValue::Json(j.clone()),
        }
    }
}

impl From<StoredValue> for Value {
    fn from(value: StoredValue) -> Self {
        match value {
            StoredValue::Null => Value::Null,
            StoredValue::Bool(b) => Value::Bool(b),
            StoredValue::Int(i) => Value::Int(i),
            StoredValue::Float(f) => Value::Float(f),
            StoredValue::Decimal(d) => Value::Decimal(d),
            StoredValue::String(s) => Value::String(s),
            StoredValue::Date(d) => Value::Date(d),
            StoredValue::DateTime(dt) => Value::DateTime(dt),
            StoredValue::Guid(g) => Value::Guid(g),
            StoredValue::Json(j) => Value::Json(j),
        }
    }
}

#[derive(Serialize, Deserialize)]
struct StoredRecord {
    id: StoredId,
    fields: Vec<(String, StoredValue)>,
}

#[derive(Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
enum StoredId {
    Int(i64),
    Text(String),
}

impl CacheRow for Record {
    fn encode_rows(rows: &[Self]) -> Result<Vec<u8>, serde_json::Error> {
        let stored: Vec<StoredRecord> = rows
            .iter()
            .map(|record| StoredRecord {
                id: match record.id() {
                    RecordId::Int(i) => StoredId::Int(*i),
                    RecordId::Text(s) => StoredId::Text(s.clone()),
                },
                fields: record
                    .fields()
                    .iter()
                    .map(|(key, value)| (key.clone(), StoredValue::from(value)))
                    .collect(),
            })
            .collect();
        serde_json::to_vec(&stored)
    }

    fn decode_rows(data: &[u8]) -> Result<Vec<Self>, serde_json::Error> {
        let stored: Vec<StoredRecord> = serde_json::from_slice(data)?;
        Ok(stored
            .into_iter()
            .map(|row| {
                let id = match row.id {
                    StoredId::Int(i) => RecordId::Int(i),
                    StoredId::Text(s) => RecordId::Text(s),
                };
                let fields: HashMap<String, Value> = row
                    .fields
                    .into_iter()
                    .map(|(key, value)| (key, Value::from(value)))
                    .collect();
                Record { id, fields }
            })
            .collect())
    }
}
