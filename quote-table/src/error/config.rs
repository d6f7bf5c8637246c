//! Configuration error types

/// Errors that can occur while loading table options.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The options document is not valid JSON or has the wrong shape.
    #[error("Invalid table options: {0}")]
    Parse(#[from] serde_json::Error),

    /// A setting parsed but holds an unusable value.
    #[error("Invalid value for '{field}': {message}")]
    Invalid {
        field: &'static str,
        message: String,
    },
}

impl ConfigError {
    /// Creates a new invalid-value error.
    pub fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        Self::Invalid {
            field,
            message: message.into(),
        }
    }
}
