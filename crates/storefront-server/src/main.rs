//! Storefront template data HTTP server
//!
//! Exposes settings migration, universal template data, responsive style
//! resolution and edit path lookups to the settings API and the visual editor.

use axum::{Router, extract::DefaultBodyLimit, response::Json, routing::get};
use serde_json::{Value, json};
use std::net::SocketAddr;
use storefront_registry::TemplateRegistry;
use time::format_description::well_known::Rfc3339;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::info;

mod config;
mod error;
mod models;
mod routes;

#[cfg(test)]
mod tests;

use config::ServerConfig;
use error::{ApiError, Result};

/// Main application state
#[derive(Clone)]
pub struct AppState {
    pub registry: &'static TemplateRegistry,
    pub config: ServerConfig,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenv::dotenv().ok();

    // Load configuration
    let config = ServerConfig::from_env()?;

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG").unwrap_or_else(|_| config.default_log_filter().to_string()),
        )
        .init();

    info!(
        "Starting storefront server on {}:{}",
        config.host, config.port
    );

    let registry = TemplateRegistry::builtin();
    info!("Loaded {} templates", registry.len());

    let state = AppState {
        registry,
        config: config.clone(),
    };

    let app = create_router(state)?;

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .map_err(|_| ApiError::Config(format!("Invalid HOST value: {}", config.host)))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the main application router
fn create_router(state: AppState) -> Result<Router> {
    let cors = state.config.cors_layer()?;
    let body_limit = state.config.max_body_bytes;

    Ok(Router::new()
        // Health check
        .route("/health", get(health_check))
        // API routes
        .nest("/api", api_routes())
        // Middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors)
                .layer(DefaultBodyLimit::max(body_limit)),
        )
        .with_state(state))
}

/// API routes
fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/templates", routes::templates::router())
        .nest("/settings", routes::settings::router())
        .nest("/styles", routes::styles::router())
        .merge(routes::fields::router())
}

/// Health check endpoint
async fn health_check() -> Result<Json<Value>> {
    let timestamp = time::OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .map_err(|e| ApiError::internal(&e.to_string()))?;

    Ok(Json(json!({
        "status": "healthy",
        "service": "storefront-server",
        "version": env!("CARGO_PKG_VERSION"),
        "schemaVersion": storefront::CURRENT_SCHEMA_VERSION,
        "timestamp": timestamp
    })))
}
