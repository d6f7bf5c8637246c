//! FieldError for Record accessors

/// Error type for field access operations on Record.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FieldError {
    /// The requested field does not exist in the record.
    #[error("Field '{field}' not found in record")]
    Missing { field: String },

    /// The field exists but has a different type than requested.
    #[error("Field '{field}' type mismatch: expected {expected}, got {actual}")]
    TypeMismatch {
        field: String,
        expected: &'static str,
        actual: &'static str,
    },

    /// The value cannot be used as a record identifier.
    #[error("Field '{field}' is not a usable record id (got {actual})")]
    InvalidId { field: String, actual: &'static str },
}

impl FieldError {
    /// Creates a new missing field error.
    pub fn missing(field: impl Into<String>) -> Self {
        Self::Missing {
            field: field.into(),
        }
    }

    /// Creates a new type mismatch error.
    pub fn type_mismatch(field: impl Into<String>, expected: &'static str, actual: &'static str) -> Self {
        Self::TypeMismatch {
            field: field.into(),
            expected,
            actual,
        }
    }

    /// Creates a new invalid id error.
    pub fn invalid_id(field: impl Into<String>, actual: &'static str) -> Self {
        Self::InvalidId {
            field: field.into(),
            actual,
        }
    }

    /// Returns the name of the field this error refers to.
    pub fn field(&self) -> &str {
        match self {
            Self::Missing { field } | Self::TypeMismatch { field, .. } | Self::InvalidId { field, .. } => field,
        }
    }
}
