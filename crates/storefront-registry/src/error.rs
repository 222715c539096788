//! Error types for the template registry

use thiserror::Error;

/// Registry-specific errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Template not found: {0}")]
    TemplateNotFound(String),

    #[error("Template already registered: {0}")]
    DuplicateTemplate(String),

    #[error("Invalid template id '{id}': {reason}")]
    InvalidId { id: String, reason: String },

    #[error("Invalid template metadata for '{id}': {reason}")]
    InvalidMetadata { id: String, reason: String },
}

/// Result type for registry operations
pub type Result<T> = std::result::Result<T, RegistryError>;
