//! Data access error types

use super::FieldError;

/// Errors returned by a [`RecordSource`](crate::source::RecordSource).
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// The requested table is unknown to the source.
    #[error("Table '{table}' not found")]
    NotFound { table: String },

    /// The backing store rejected or failed the request.
    #[error("Backend error: {message}")]
    Backend {
        /// Error message reported by the backend.
        message: String,
        /// Backend-specific error code, if any.
        code: Option<String>,
    },

    /// A row could not be turned into a record.
    #[error("Invalid row: {0}")]
    Row(#[from] FieldError),

    /// Rows could not be (de)serialized, e.g. for caching.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl SourceError {
    /// Creates a new not-found error.
    pub fn not_found(table: impl Into<String>) -> Self {
        Self::NotFound {
            table: table.into(),
        }
    }

    /// Creates a new backend error.
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend {
            message: message.into(),
            code: None,
        }
    }

    /// Creates a new backend error with a backend error code.
    pub fn backend_with_code(message: impl Into<String>, code: impl Into<String>) -> Self {
        Self::Backend {
            message: message.into(),
            code: Some(code.into()),
        }
    }

    /// Returns the backend error code if available.
    pub fn error_code(&self) -> Option<&str> {
        match self {
            Self::Backend { code, .. } => code.as_deref(),
            _ => None,
        }
    }
}
