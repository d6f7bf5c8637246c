//! Dynamic table record

use std::borrow::Cow;
use std::collections::HashMap;

use chrono::DateTime;
use chrono::NaiveDate;
use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;

use super::RecordId;
use super::TableRecord;
use super::Value;
use crate::error::FieldError;

/// Name of the pseudo-field that exposes a record's id to columns and search.
pub const ID_FIELD: &str = "id";

/// A dynamic row fetched from the data store.
///
/// Records hold field values as a `HashMap<String, Value>` next to a required
/// [`RecordId`]. Typed getter methods provide safe access with proper error
/// handling.
///
/// # Example
///
/// ```
/// use quote_table::model::Record;
///
/// let record = Record::new(1)
///     .set("lodge", "Serengeti Lodge")
///     .set("nights", 4i64);
///
/// assert_eq!(record.get_string("lodge").unwrap(), Some("Serengeti Lodge"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// The unique identifier of the record.
    pub(crate) id: RecordId,

    /// The field values, never containing [`ID_FIELD`].
    pub(crate) fields: HashMap<String, Value>,
}

impl Record {
    /// Creates a new empty record with the given id.
    pub fn new(id: impl Into<RecordId>) -> Self {
        Self {
            id: id.into(),
            fields: HashMap::new(),
        }
    }

    // =========================================================================
    // Metadata accessors
    // =========================================================================

    /// Returns the record ID.
    pub fn id(&self) -> &RecordId {
        &self.id
    }

    /// Sets the record ID.
    pub fn set_id(&mut self, id: impl Into<RecordId>) {
        self.id = id.into();
    }

    // =========================================================================
    // Raw field access
    // =========================================================================

    /// Returns a reference to the field value, if it exists.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Returns `true` if the record contains the given field.
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Returns a reference to all fields.
    pub fn fields(&self) -> &HashMap<String, Value> {
        &self.fields
    }

    /// Returns the number of fields, not counting the id.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the record holds no fields besides its id.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    // =========================================================================
    // Setters
    // =========================================================================

    /// Sets a field value (builder pattern).
    pub fn set(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(field, value);
        self
    }

    /// Inserts a field value.
    ///
    /// Writing [`ID_FIELD`] is ignored; use [`Record::set_id`].
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        let field = field.into();
        if field == ID_FIELD {
            log::warn!("ignoring write to the '{ID_FIELD}' field of record {}", self.id);
            return;
        }
        self.fields.insert(field, value.into());
    }

    /// Removes a field and returns its value.
    pub fn remove(&mut self, field: &str) -> Option<Value> {
        self.fields.remove(field)
    }

    // =========================================================================
    // Typed getters
    //
    // Return Err if field is missing or wrong type.
    // Return Ok(None) only if the field exists and is Value::Null.
    // =========================================================================

    /// Gets a string field value.
    pub fn get_string(&self, field: &str) -> Result<Option<&str>, FieldError> {
        match self.fields.get(field) {
            None => Err(FieldError::missing(field)),
            Some(Value::Null) => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.as_str())),
            Some(other) => Err(FieldError::type_mismatch(field, "string", other.type_name())),
        }
    }

    /// Gets a boolean field value.
    pub fn get_bool(&self, field: &str) -> Result<Option<bool>, FieldError> {
        match self.fields.get(field) {
            None => Err(FieldError::missing(field)),
            Some(Value::Null) => Ok(None),
            Some(Value::Bool(b)) => Ok(Some(*b)),
            Some(other) => Err(FieldError::type_mismatch(field, "bool", other.type_name())),
        }
    }

    /// Gets an integer field value.
    pub fn get_int(&self, field: &str) -> Result<Option<i64>, FieldError> {
        match self.fields.get(field) {
            None => Err(FieldError::missing(field)),
            Some(Value::Null) => Ok(None),
            Some(Value::Int(n)) => Ok(Some(*n)),
            Some(other) => Err(FieldError::type_mismatch(field, "int", other.type_name())),
        }
    }

    /// Gets an f64 field value.
    pub fn get_float(&self, field: &str) -> Result<Option<f64>, FieldError> {
        match self.fields.get(field) {
            None => Err(FieldError::missing(field)),
            Some(Value::Null) => Ok(None),
            Some(Value::Float(n)) => Ok(Some(*n)),
            Some(Value::Int(n)) => Ok(Some(*n as f64)), // Allow widening
            Some(other) => Err(FieldError::type_mismatch(field, "float", other.type_name())),
        }
    }

    /// Gets a Decimal field value.
    pub fn get_decimal(&self, field: &str) -> Result<Option<Decimal>, FieldError> {
        match self.fields.get(field) {
            None => Err(FieldError::missing(field)),
            Some(Value::Null) => Ok(None),
            Some(Value::Decimal(d)) => Ok(Some(*d)),
            Some(Value::Int(n)) => Ok(Some(Decimal::from(*n))),
            Some(other) => Err(FieldError::type_mismatch(field, "decimal", other.type_name())),
        }
    }

    /// Gets a date field value.
    pub fn get_date(&self, field: &str) -> Result<Option<NaiveDate>, FieldError> {
        match self.fields.get(field) {
            None => Err(FieldError::missing(field)),
            Some(Value::Null) => Ok(None),
            Some(Value::Date(d)) => Ok(Some(*d)),
            Some(other) => Err(FieldError::type_mismatch(field, "date", other.type_name())),
        }
    }

    /// Gets a DateTime field value.
    pub fn get_datetime(&self, field: &str) -> Result<Option<DateTime<Utc>>, FieldError> {
        match self.fields.get(field) {
            None => Err(FieldError::missing(field)),
            Some(Value::Null) => Ok(None),
            Some(Value::DateTime(dt)) => Ok(Some(*dt)),
            Some(other) => Err(FieldError::type_mismatch(field, "datetime", other.type_name())),
        }
    }

    /// Gets a UUID field value.
    pub fn get_guid(&self, field: &str) -> Result<Option<Uuid>, FieldError> {
        match self.fields.get(field) {
            None => Err(FieldError::missing(field)),
            Some(Value::Null) => Ok(None),
            Some(Value::Guid(g)) => Ok(Some(*g)),
            Some(other) => Err(FieldError::type_mismatch(field, "guid", other.type_name())),
        }
    }
}

impl TableRecord for Record {
    type Key = String;

    fn id(&self) -> RecordId {
        self.id.clone()
    }

    fn value(&self, key: &String) -> Cow<'_, Value> {
        if key == ID_FIELD {
            return Cow::Owned(self.id.to_value());
        }
        match self.fields.get(key) {
            Some(value) => Cow::Borrowed(value),
            None => Cow::Owned(Value::Null),
        }
    }

    fn keys(&self) -> Vec<String> {
        std::iter::once(ID_FIELD.to_string())
            .chain(self.fields.keys().cloned())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typed_getters() {
        let record = Record::new(7)
            .set("lodge", "Mara Camp")
            .set("nights", 3i64)
            .set("notes", Value::Null);

        assert_eq!(record.get_string("lodge").unwrap(), Some("Mara Camp"));
        assert_eq!(record.get_int("nights").unwrap(), Some(3));
        assert_eq!(record.get_float("nights").unwrap(), Some(3.0));
        assert_eq!(record.get_string("notes").unwrap(), None);
        assert_eq!(record.get_string("missing"), Err(FieldError::missing("missing")));
        assert_eq!(
            record.get_bool("lodge"),
            Err(FieldError::type_mismatch("lodge", "bool", "string"))
        );
    }

    #[test]
    fn test_id_is_exposed_as_field() {
        let record = Record::new("q-1").set("status", "draft");

        assert_eq!(record.value(&ID_FIELD.to_string()).into_owned(), Value::from("q-1"));
        assert_eq!(record.value(&"unknown".to_string()).into_owned(), Value::Null);
        let keys = record.keys();
        assert!(keys.contains(&"id".to_string()));
        assert!(keys.contains(&"status".to_string()));
    }

    #[test]
    fn test_insert_ignores_id_field() {
        let mut record = Record::new(1);
        record.insert("id", 99i64);
        assert_eq!(record.id(), &RecordId::Int(1));
        assert!(record.is_empty());
    }
}
