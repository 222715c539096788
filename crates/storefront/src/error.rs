//! Error types for the storefront library
//!
//! Migration, responsive resolution and the universal adapter never fail: they
//! degrade to defaults instead. The errors here cover the places where a hard
//! failure is meaningful, which is editor wiring (edit paths) and explicit
//! (de)serialization of documents.

use thiserror::Error;

/// Main error type for the storefront library
#[derive(Error, Debug)]
pub enum StorefrontError {
    /// Edit path lookups and write-backs
    #[error("Edit path error: {0}")]
    EditPath(#[from] EditPathError),

    /// Data serialization errors
    #[error("Data error: {0}")]
    Data(#[from] DataError),
}

/// Errors raised by edit path lookups and write-backs
///
/// These indicate a programming error in editor wiring, not bad user data.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EditPathError {
    #[error("Unknown universal field: {name}")]
    UnknownField { name: String },

    #[error("Invalid edit path '{path}': {reason}")]
    InvalidPath { path: String, reason: String },

    #[error("Cannot write through '{segment}' in '{path}': found {found}, expected object")]
    NotAnObject {
        path: String,
        segment: String,
        found: &'static str,
    },
}

/// Data serialization errors
#[derive(Error, Debug)]
pub enum DataError {
    #[error("JSON serialization failed: {reason}")]
    Serialization { reason: String },

    #[error("JSON deserialization failed: {reason}")]
    Deserialization { reason: String },
}

/// Shorthand result type for storefront operations
pub type Result<T> = std::result::Result<T, StorefrontError>;

impl From<serde_json::Error> for StorefrontError {
    fn from(error: serde_json::Error) -> Self {
        let reason = error.to_string();
        if error.is_syntax() || error.is_data() || error.is_eof() {
            StorefrontError::Data(DataError::Deserialization { reason })
        } else {
            StorefrontError::Data(DataError::Serialization { reason })
        }
    }
}

impl StorefrontError {
    /// Get a message suitable for showing in the editor UI
    pub fn user_message(&self) -> String {
        match self {
            StorefrontError::EditPath(EditPathError::UnknownField { name }) => {
                format!("'{}' is not an editable template field", name)
            }
            StorefrontError::EditPath(e) => format!("This setting cannot be edited: {}", e),
            StorefrontError::Data(DataError::Deserialization { .. }) => {
                "Failed to read store settings. Please check the JSON format.".to_string()
            }
            StorefrontError::Data(e) => format!("Data error: {}", e),
        }
    }
}

/// Name of a JSON value's type, for error messages
pub(crate) fn value_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
