//! Error handling for the API server

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use storefront::EditPathError;
use storefront_registry::RegistryError;
use thiserror::Error;

/// Result type for API operations
pub type Result<T> = std::result::Result<T, ApiError>;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Template not found: {0}")]
    TemplateNotFound(String),

    #[error("Unknown template field: {0}")]
    FieldNotFound(String),

    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<EditPathError> for ApiError {
    fn from(error: EditPathError) -> Self {
        match error {
            EditPathError::UnknownField { name } => ApiError::FieldNotFound(name),
            other => ApiError::Validation(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::TemplateNotFound(_) | ApiError::FieldNotFound(_) => {
                (StatusCode::NOT_FOUND, self.to_string())
            }
            ApiError::Validation(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            ApiError::Registry(ref e) => match e {
                RegistryError::TemplateNotFound(_) => (StatusCode::NOT_FOUND, self.to_string()),
                _ => (StatusCode::INTERNAL_SERVER_ERROR, "Registry error".to_string()),
            },
            ApiError::Config(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Configuration error".to_string(),
            ),
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
        };

        let body = Json(json!({
            "error": error_message,
            "status": status.as_u16()
        }));

        (status, body).into_response()
    }
}

// Convenience functions for common errors
impl ApiError {
    pub fn template_not_found(id: &str) -> Self {
        Self::TemplateNotFound(id.to_string())
    }

    pub fn internal(msg: &str) -> Self {
        Self::Internal(msg.to_string())
    }
}
