//! Record identifiers

use std::fmt;

use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

use super::Value;

/// The unique identifier of a table row.
///
/// Rows from the data store are keyed either by an integer primary key or
/// by a text key (usually a UUID). Integer ids order before text ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    /// Integer primary key.
    Int(i64),
    /// Text primary key.
    Text(String),
}

impl RecordId {
    /// Converts a field value into an id, if it has a usable kind.
    ///
    /// Integers, strings and UUIDs are accepted; floats only when they hold
    /// a whole number.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Int(i) => Some(RecordId::Int(*i)),
            Value::Float(f) if f.fract() == 0.0 && f.is_finite() => Some(RecordId::Int(*f as i64)),
            Value::String(s) => Some(RecordId::Text(s.clone())),
            Value::Guid(g) => Some(RecordId::Text(g.hyphenated().to_string())),
            _ => None,
        }
    }

    /// Returns the id as a field value.
    pub fn to_value(&self) -> Value {
        match self {
            RecordId::Int(i) => Value::Int(*i),
            RecordId::Text(s) => Value::String(s.clone()),
        }
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Int(i) => write!(f, "{i}"),
            RecordId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for RecordId {
    fn from(v: i64) -> Self {
        RecordId::Int(v)
    }
}

impl From<i32> for RecordId {
    fn from(v: i32) -> Self {
        RecordId::Int(v.into())
    }
}

impl From<u32> for RecordId {
    fn from(v: u32) -> Self {
        RecordId::Int(v.into())
    }
}

impl From<String> for RecordId {
    fn from(v: String) -> Self {
        RecordId::Text(v)
    }
}

impl From<&str> for RecordId {
    fn from(v: &str) -> Self {
        RecordId::Text(v.to_string())
    }
}

impl From<Uuid> for RecordId {
    fn from(v: Uuid) -> Self {
        RecordId::Text(v.hyphenated().to_string())
    }
}
