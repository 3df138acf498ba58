//! Error types for Topolab operations.
//!
//! The analysis functions themselves never fail; errors only come from
//! editing a draft, loading catalog data and (de)serializing documents.

use thiserror::Error;

/// Result type for Topolab operations.
pub type Result<T> = std::result::Result<T, TopoError>;

/// Errors that can occur outside the pure analysis functions.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TopoError {
    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),

    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("Invalid value for {field}: {reason}")]
    Config { field: String, reason: String },

    #[error("I/O error: {0}")]
    Io(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Graph editing errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("Device not found: {0}")]
    DeviceNotFound(String),

    #[error("Connection not found: {0}")]
    ConnectionNotFound(String),

    #[error("Duplicate device id: {0}")]
    DuplicateDevice(String),
}

impl From<std::io::Error> for TopoError {
    fn from(e: std::io::Error) -> Self {
        TopoError::Io(e.to_string())
    }
}

impl From<serde_json::Error> for TopoError {
    fn from(e: serde_json::Error) -> Self {
        TopoError::Serialization(e.to_string())
    }
}

// Convenience constructors
impl TopoError {
    pub fn device_not_found(id: impl Into<String>) -> Self {
        TopoError::Graph(GraphError::DeviceNotFound(id.into()))
    }

    pub fn connection_not_found(id: impl Into<String>) -> Self {
        TopoError::Graph(GraphError::ConnectionNotFound(id.into()))
    }

    pub fn invalid_config(field: impl Into<String>, reason: impl Into<String>) -> Self {
        TopoError::Config {
            field: field.into(),
            reason: reason.into(),
        }
    }
}
