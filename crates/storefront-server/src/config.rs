//! Server configuration management

use crate::error::{ApiError, Result};
use axum::http::HeaderValue;
use serde::{Deserialize, Serialize};
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    pub host: String,

    /// Port to bind to
    pub port: u16,

    /// Largest accepted request body in bytes
    pub max_body_bytes: usize,

    /// CORS allowed origins
    pub cors_origins: Vec<String>,

    /// Whether to enable debug logging
    pub debug: bool,
}

impl ServerConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .map_err(|_| ApiError::Config("Invalid PORT value".to_string()))?,
            max_body_bytes: std::env::var("MAX_BODY_BYTES")
                .unwrap_or_else(|_| (1024 * 1024).to_string())
                .parse()
                .map_err(|_| ApiError::Config("Invalid MAX_BODY_BYTES value".to_string()))?,
            cors_origins: std::env::var("CORS_ORIGINS")
                .unwrap_or_else(|_| "*".to_string())
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            debug: std::env::var("DEBUG")
                .map(|s| s.to_lowercase() == "true")
                .unwrap_or(false),
        })
    }

    /// Default log filter when `RUST_LOG` is not set
    pub fn default_log_filter(&self) -> &'static str {
        if self.debug {
            "storefront_server=debug,storefront=debug,tower_http=debug"
        } else {
            "storefront_server=info,tower_http=info"
        }
    }

    /// Build the CORS layer for the configured origins
    pub fn cors_layer(&self) -> Result<CorsLayer> {
        if self.cors_origins.is_empty() || self.cors_origins.iter().any(|o| o == "*") {
            return Ok(CorsLayer::permissive());
        }

        let origins = self
            .cors_origins
            .iter()
            .map(|origin| {
                HeaderValue::from_str(origin)
                    .map_err(|_| ApiError::Config(format!("Invalid CORS origin: {}", origin)))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(tower_http::cors::Any)
            .allow_headers(tower_http::cors::Any))
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            max_body_bytes: 1024 * 1024,
            cors_origins: vec!["*".to_string()],
            debug: false,
        }
    }
}
