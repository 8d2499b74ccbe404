//! Custom error types for Painel CLI
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// Raised when the published sheet does not carry the expected header schema.
///
/// This is the only error the parsing core ever produces; malformed cells in
/// otherwise well-formed rows degrade to zero instead of failing the parse.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// The sheet text contained no lines at all, so there is no header row
    #[error("sheet is empty: no header row found")]
    MissingHeader,

    /// One or more required columns are absent from the header row
    #[error("required column(s) missing from sheet header: {}", .columns.join(", "))]
    MissingColumns {
        /// The missing column names, in schema order
        columns: Vec<String>,
    },
}

/// The main error type for Painel CLI operations
#[derive(Error, Debug)]
pub enum PainelError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Sheet download errors
    #[error("Fetch error: {0}")]
    Fetch(String),

    /// Sheet header does not match the required schema
    #[error("Schema error: {0}")]
    Schema(SchemaError),

    /// Validation errors for user input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },
}

impl PainelError {
    /// Create a "not found" error for month labels
    pub fn month_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Month",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a schema error
    pub fn is_schema(&self) -> bool {
        matches!(self, Self::Schema(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for PainelError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for PainelError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<SchemaError> for PainelError {
    fn from(err: SchemaError) -> Self {
        Self::Schema(err)
    }
}

/// Result type alias for Painel CLI operations
pub type PainelResult<T> = Result<T, PainelError>;
