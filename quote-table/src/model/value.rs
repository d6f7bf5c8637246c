//! Value enum for dynamic field values

use std::cmp::Ordering;
use std::fmt;

use chrono::DateTime;
use chrono::NaiveDate;
use chrono::NaiveTime;
use chrono::Utc;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use uuid::Uuid;

/// A dynamic value held by one field of a [`Record`](super::Record).
///
/// # Type Mapping
///
/// | JSON row value | Rust Variant |
/// |----------------|--------------|
/// | null | `Null` |
/// | true / false | `Bool` |
/// | integer | `Int` |
/// | other number | `Float` |
/// | `"2025-03-01"` | `Date` |
/// | RFC 3339 timestamp | `DateTime` |
/// | UUID string | `Guid` |
/// | other string | `String` |
/// | array / object | `Json` |
///
/// `Decimal` is never produced from JSON; callers construct it for money
/// fields.
///
/// # Example
///
/// ```
/// use quote_table::model::Value;
///
/// let name = Value::from("Serengeti Lodge");
/// let nights = Value::from(4i64);
/// let confirmed = Value::from(true);
/// let empty = Value::Null;
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// Null/empty value.
    #[default]
    Null,
    /// Boolean value.
    Bool(bool),
    /// 64-bit integer.
    Int(i64),
    /// 64-bit floating point.
    Float(f64),
    /// Arbitrary precision decimal.
    Decimal(Decimal),
    /// String value.
    String(String),
    /// Calendar date without time.
    Date(NaiveDate),
    /// Date and time in UTC.
    DateTime(DateTime<Utc>),
    /// GUID/UUID value.
    Guid(Uuid),
    /// Arrays and nested objects, kept as raw JSON.
    Json(serde_json::Value),
}

impl Value {
    /// Returns `true` if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the type name of this value.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Decimal(_) => "decimal",
            Value::String(_) => "string",
            Value::Date(_) => "date",
            Value::DateTime(_) => "datetime",
            Value::Guid(_) => "guid",
            Value::Json(_) => "json",
        }
    }

    /// Converts a JSON value from a fetched row.
    ///
    /// Strings that parse as RFC 3339 timestamps, ISO dates or UUIDs become
    /// the matching typed variant so they sort chronologically.
    pub fn from_json(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => n.as_f64().map(Value::Float).unwrap_or(Value::Null),
            },
            serde_json::Value::String(s) => parse_string(s),
            other => Value::Json(other),
        }
    }

    /// Converts this value back into JSON.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::Int(i) => serde_json::Value::from(*i),
            Value::Float(f) => serde_json::Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            // JSON has no decimal kind; it reads back as Float.
            Value::Decimal(d) => d
                .to_f64()
                .and_then(serde_json::Number::from_f64)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Value::String(s) => serde_json::Value::String(s.clone()),
            Value::Date(d) => serde_json::Value::String(d.format("%Y-%m-%d").to_string()),
            Value::DateTime(dt) => serde_json::Value::String(dt.to_rfc3339()),
            Value::Guid(g) => serde_json::Value::String(g.hyphenated().to_string()),
            Value::Json(j) => j.clone(),
        }
    }

    /// Returns the numeric value as `f64`, if this is a number.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            Value::Decimal(d) => d.to_f64(),
            _ => None,
        }
    }

    /// Returns the value as a UTC instant, if this is a date or timestamp.
    ///
    /// A bare date is taken as midnight UTC.
    pub fn as_datetime(&self) -> Option<DateTime<Utc>> {
        match self {
            Value::Date(d) => Some(d.and_time(NaiveTime::MIN).and_utc()),
            Value::DateTime(dt) => Some(*dt),
            _ => None,
        }
    }

    /// The text a search query is matched against.
    ///
    /// `Null` has no text, so it never matches a non-empty query.
    pub fn search_text(&self) -> String {
        self.to_string()
    }

    /// Total order used when sorting table rows.
    ///
    /// Values of the same kind use their native order: numbers numerically
    /// (across `Int`, `Float` and `Decimal`), strings lexicographically,
    /// dates and timestamps chronologically. Different kinds are ranked
    /// `Null < Bool < number < String < date/time < Guid < Json`, so `Null`
    /// sorts before every defined value.
    pub fn sort_cmp(&self, other: &Value) -> Ordering {
        match self.rank().cmp(&other.rank()) {
            Ordering::Equal => {}
            unequal => return unequal,
        }

        match (self, other) {
            (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
            (Value::String(a), Value::String(b)) => a.cmp(b),
            (Value::Guid(a), Value::Guid(b)) => a.cmp(b),
            (Value::Json(a), Value::Json(b)) => a.to_string().cmp(&b.to_string()),
            (Value::Date(a), Value::Date(b)) => a.cmp(b),
            (Value::DateTime(a), Value::DateTime(b)) => a.cmp(b),
            (a, b) if a.rank() == 2 => cmp_numbers(a, b),
            (a, b) => match (a.as_datetime(), b.as_datetime()) {
                (Some(x), Some(y)) => x.cmp(&y),
                _ => Ordering::Equal,
            },
        }
    }

    fn rank(&self) -> u8 {
        match self {
            Value::Null => 0,
            Value::Bool(_) => 1,
            Value::Int(_) | Value::Float(_) | Value::Decimal(_) => 2,
            Value::String(_) => 3,
            Value::Date(_) | Value::DateTime(_) => 4,
            Value::Guid(_) => 5,
            Value::Json(_) => 6,
        }
    }
}

fn cmp_numbers(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Int(x), Value::Int(y)) => x.cmp(y),
        (Value::Decimal(x), Value::Decimal(y)) => x.cmp(y),
        (Value::Int(x), Value::Decimal(y)) => Decimal::from(*x).cmp(y),
        (Value::Decimal(x), Value::Int(y)) => x.cmp(&Decimal::from(*y)),
        _ => {
            let x = a.as_f64().unwrap_or(f64::NAN);
            let y = b.as_f64().unwrap_or(f64::NAN);
            x.total_cmp(&y)
        }
    }
}

fn parse_string(s: String) -> Value {
    if let Ok(dt) = DateTime::parse_from_rfc3339(&s) {
        return Value::DateTime(dt.with_timezone(&Utc));
    }
    if let Ok(d) = NaiveDate::parse_from_str(&s, "%Y-%m-%d") {
        return Value::Date(d);
    }
    if let Ok(g) = Uuid::parse_str(&s) {
        // Only canonical hyphenated UUIDs; bare hex strings stay text.
        if s.len() == 36 {
            return Value::Guid(g);
        }
    }
    Value::String(s)
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(i) => write!(f, "{i}"),
            Value::Float(n) => write!(f, "{n}"),
            Value::Decimal(d) => write!(f, "{d}"),
            Value::String(s) => f.write_str(s),
            Value::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            Value::DateTime(dt) => f.write_str(&dt.to_rfc3339()),
            Value::Guid(g) => write!(f, "{}", g.hyphenated()),
            Value::Json(j) => write!(f, "{j}"),
        }
    }
}

// =============================================================================
// From implementations
// =============================================================================

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v.into())
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::Int(v.into())
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<Decimal> for Value {
    fn from(v: Decimal) -> Self {
        Value::Decimal(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<NaiveDate> for Value {
    fn from(v: NaiveDate) -> Self {
        Value::Date(v)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(v: DateTime<Utc>) -> Self {
        Value::DateTime(v)
    }
}

impl From<Uuid> for Value {
    fn from(v: Uuid) -> Self {
        Value::Guid(v)
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        Value::from_json(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(inner) => inner.into(),
            None => Value::Null,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_sorts_first() {
        assert_eq!(Value::Null.sort_cmp(&Value::from("a")), Ordering::Less);
        assert_eq!(Value::from(0i64).sort_cmp(&Value::Null), Ordering::Greater);
        assert_eq!(Value::Null.sort_cmp(&Value::Null), Ordering::Equal);
    }

    #[test]
    fn test_numbers_compare_across_kinds() {
        assert_eq!(Value::from(2i64).sort_cmp(&Value::from(2.5)), Ordering::Less);
        assert_eq!(
            Value::from(Decimal::new(1050, 2)).sort_cmp(&Value::from(10i64)),
            Ordering::Greater
        );
        assert_eq!(Value::from(3i64).sort_cmp(&Value::from(3.0)), Ordering::Equal);
    }

    #[test]
    fn test_dates_compare_chronologically() {
        let date = NaiveDate::from_ymd_opt(2025, 7, 1).unwrap();
        let earlier = date.pred_opt().unwrap().and_hms_opt(23, 0, 0).unwrap().and_utc();
        assert_eq!(Value::from(date).sort_cmp(&Value::from(earlier)), Ordering::Greater);
    }

    #[test]
    fn test_from_json_detects_dates_and_guids() {
        assert_eq!(
            Value::from_json(serde_json::json!("2025-07-01")),
            Value::Date(NaiveDate::from_ymd_opt(2025, 7, 1).unwrap())
        );
        assert!(matches!(
            Value::from_json(serde_json::json!("2025-07-01T08:30:00Z")),
            Value::DateTime(_)
        ));
        assert!(matches!(
            Value::from_json(serde_json::json!("67e55044-10b1-426f-9247-bb680e5fe0c8")),
            Value::Guid(_)
        ));
        assert_eq!(Value::from_json(serde_json::json!("Mara")), Value::from("Mara"));
        assert_eq!(Value::from_json(serde_json::json!(7)), Value::Int(7));
        assert_eq!(Value::from_json(serde_json::json!(7.5)), Value::Float(7.5));
    }

    #[test]
    fn test_search_text() {
        assert_eq!(Value::Null.search_text(), "");
        assert_eq!(Value::from(true).search_text(), "true");
        assert_eq!(Value::from(1.0).search_text(), "1");
        assert_eq!(
            Value::from(NaiveDate::from_ymd_opt(2025, 1, 9).unwrap()).search_text(),
            "2025-01-09"
        );
    }
}
