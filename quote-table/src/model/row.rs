//! The `TableRecord` trait

use std::borrow::Cow;
use std::fmt;

use super::RecordId;
use super::Value;

/// Trait for anything that can be shown as a row of a
/// [`TableEngine`](crate::table::TableEngine).
///
/// [`Record`](super::Record) implements it with `String` keys for untyped
/// rows. Typed row structs implement it with an enum key, so a column can
/// only name a field the struct actually has.
///
/// # Example
///
/// ```
/// use std::borrow::Cow;
/// use quote_table::model::{RecordId, TableRecord, Value};
///
/// #[derive(Debug, Clone, Copy, PartialEq)]
/// enum LodgeField { Name, Beds }
///
/// struct Lodge { id: i64, name: String, beds: i64 }
///
/// impl TableRecord for Lodge {
///     type Key = LodgeField;
///
///     fn id(&self) -> RecordId { RecordId::Int(self.id) }
///
///     fn value(&self, key: &LodgeField) -> Cow<'_, Value> {
///         match key {
///             LodgeField::Name => Cow::Owned(Value::from(self.name.as_str())),
///             LodgeField::Beds => Cow::Owned(Value::from(self.beds)),
///         }
///     }
///
///     fn keys(&self) -> Vec<LodgeField> { vec![LodgeField::Name, LodgeField::Beds] }
/// }
/// ```
pub trait TableRecord {
    /// Field key type used by columns, sorting and search.
    type Key: Clone + PartialEq + fmt::Debug;

    /// Unique identifier for this row.
    ///
    /// Used for selection and bulk actions. Uniqueness is the caller's
    /// responsibility and is not checked.
    fn id(&self) -> RecordId;

    /// Value of one field. Fields the row does not have read as `Null`.
    fn value(&self, key: &Self::Key) -> Cow<'_, Value>;

    /// Every field key of this row, searched when no search fields are set.
    fn keys(&self) -> Vec<Self::Key>;
}
