//! JSON conversion for rows coming from and going back to the data store.
//!
//! ## Read Format
//!
//! A row is a JSON object. The `id` member becomes the [`RecordId`]; every
//! other member becomes a field through [`Value::from_json`].
//!
//! ## Write Format
//!
//! A record serializes back into an object with `id` plus its fields. Null
//! fields are written as JSON `null`, so an update can clear a column.

use std::fmt;

use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;
use serde::de::MapAccess;
use serde::de::Visitor;
use serde::ser::SerializeMap;

use super::ID_FIELD;
use super::Record;
use super::RecordId;
use super::Value;
use crate::error::FieldError;

impl Record {
    /// Builds a record from a JSON row object.
    ///
    /// Fails if the row is not an object or has no usable `id` member.
    pub fn from_json(row: serde_json::Value) -> Result<Self, FieldError> {
        match row {
            serde_json::Value::Object(members) => Self::from_members(members),
            other => Err(FieldError::type_mismatch("row", "object", json_kind(&other))),
        }
    }

    /// Converts the record back into a JSON row object.
    pub fn to_json(&self) -> serde_json::Value {
        let mut members = serde_json::Map::with_capacity(self.fields.len() + 1);
        members.insert(ID_FIELD.to_string(), self.id.to_value().to_json());
        for (key, value) in &self.fields {
            members.insert(key.clone(), value.to_json());
        }
        serde_json::Value::Object(members)
    }

    fn from_members(mut members: serde_json::Map<String, serde_json::Value>) -> Result<Self, FieldError> {
        let raw_id = members.remove(ID_FIELD).ok_or_else(|| FieldError::missing(ID_FIELD))?;
        // Text ids are kept verbatim, even when they look like dates or UUIDs.
        let id = match raw_id {
            serde_json::Value::String(text) => RecordId::Text(text),
            other => {
                let id_value = Value::from_json(other);
                RecordId::from_value(&id_value)
                    .ok_or_else(|| FieldError::invalid_id(ID_FIELD, id_value.type_name()))?
            }
        };

        let mut record = Record::new(id);
        for (key, json_value) in members {
            record.fields.insert(key, Value::from_json(json_value));
        }
        Ok(record)
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "bool",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

// =============================================================================
// Value
// =============================================================================

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_json().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        serde_json::Value::deserialize(deserializer).map(Value::from_json)
    }
}

// =============================================================================
// Record
// =============================================================================

impl Serialize for Record {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.fields.len() + 1))?;
        map.serialize_entry(ID_FIELD, &self.id)?;
        for (key, value) in &self.fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Record {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(RecordVisitor)
    }
}

struct RecordVisitor;

impl<'de> Visitor<'de> for RecordVisitor {
    type Value = Record;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map representing a table row with an id")
    }

    fn visit_map<M>(self, mut map: M) -> Result<Record, M::Error>
    where
        M: MapAccess<'de>,
    {
        let mut members = serde_json::Map::new();
        while let Some(key) = map.next_key::<String>()? {
            let value: serde_json::Value = map.next_value()?;
            members.insert(key, value);
        }

        Record::from_members(members).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_deserialize_row() {
        let record: Record = serde_json::from_value(json!({
            "id": 12,
            "guest": "Amani",
            "arrival": "2025-08-14",
            "paid": false,
            "notes": null
        }))
        .unwrap();

        assert_eq!(record.id(), &RecordId::Int(12));
        assert_eq!(record.get_string("guest").unwrap(), Some("Amani"));
        assert_eq!(
            record.get_date("arrival").unwrap(),
            NaiveDate::from_ymd_opt(2025, 8, 14)
        );
        assert_eq!(record.get_bool("paid").unwrap(), Some(false));
        assert_eq!(record.get_string("notes").unwrap(), None);
        assert!(!record.contains("id"));
    }

    #[test]
    fn test_uuid_id_becomes_text() {
        let record = Record::from_json(json!({
            "id": "67e55044-10b1-426f-9247-bb680e5fe0c8",
            "name": "Ngorongoro"
        }))
        .unwrap();
        assert_eq!(
            record.id(),
            &RecordId::Text("67e55044-10b1-426f-9247-bb680e5fe0c8".to_string())
        );
    }

    #[test]
    fn test_text_ids_are_kept_verbatim() {
        let record = Record::from_json(json!({ "id": "67E55044-10B1-426F-9247-BB680E5FE0C8" })).unwrap();
        assert_eq!(record.id(), &RecordId::from("67E55044-10B1-426F-9247-BB680E5FE0C8"));

        let record = Record::from_json(json!({ "id": "2025-07-01" })).unwrap();
        assert_eq!(record.id(), &RecordId::from("2025-07-01"));
    }

    #[test]
    fn test_missing_id_is_rejected() {
        let err = Record::from_json(json!({ "name": "no id" })).unwrap_err();
        assert_eq!(err, FieldError::missing("id"));

        let err = Record::from_json(json!({ "id": true })).unwrap_err();
        assert_eq!(err, FieldError::invalid_id("id", "bool"));

        let err = Record::from_json(json!([1, 2])).unwrap_err();
        assert_eq!(err, FieldError::type_mismatch("row", "object", "array"));
    }

    #[test]
    fn test_serialize_round_trip() {
        let record = Record::new("q-7").set("total", 1250i64).set("lodge", "Tarangire");
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json, record.to_json());

        let back: Record = serde_json::from_value(json).unwrap();
        assert_eq!(back, record);
    }
}
