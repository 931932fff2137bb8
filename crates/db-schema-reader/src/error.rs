//! Error types for schema extraction.

use thiserror::Error;

/// Main error type for catalog metadata extraction.
#[derive(Error, Debug)]
pub enum SchemaError {
    /// Driver-level connectivity or query error, propagated unchanged so the
    /// caller can make adapter-lifecycle decisions (retry, reconnect).
    #[error("Catalog query error: {0}")]
    Driver(#[from] tokio_postgres::Error),

    /// Command execution failed, with context about where it occurred.
    #[error("Catalog command failed: {message}\n  Context: {context}")]
    Execution { message: String, context: String },

    /// A required field was absent or of the wrong shape in a catalog row.
    ///
    /// Fatal for the whole execution: a partial result is indistinguishable
    /// from a complete one, so none is returned.
    #[error("Malformed catalog row: field {field}: {message}")]
    MalformedRow { field: String, message: String },
}

impl SchemaError {
    /// Create an Execution error with context about where it occurred.
    pub fn execution(message: impl Into<String>, context: impl Into<String>) -> Self {
        SchemaError::Execution {
            message: message.into(),
            context: context.into(),
        }
    }

    /// Create a MalformedRow error for a named catalog field.
    pub fn malformed_row(field: impl Into<String>, message: impl Into<String>) -> Self {
        SchemaError::MalformedRow {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, SchemaError>;
