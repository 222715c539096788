//! Template catalog and per-template data routes

use crate::{
    AppState,
    error::{ApiError, Result},
    models::{BreakpointQuery, TemplateDataResponse},
};
use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::{get, post},
};
use serde_json::Value;
use storefront::{StoreSettings, UniversalTemplateData};
use storefront_registry::TemplateMetadata;
use tracing::{debug, info};

/// Create template routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_templates))
        .route("/{id}", get(get_template))
        .route("/{id}/data", post(template_data))
}

async fn list_templates(State(state): State<AppState>) -> Json<&'static [TemplateMetadata]> {
    Json(state.registry.list())
}

async fn get_template(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<&'static TemplateMetadata>> {
    state
        .registry
        .get(&id)
        .map(Json)
        .ok_or_else(|| ApiError::template_not_found(&id))
}

/// Migrate a raw settings document and normalize it for a template
async fn template_data(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<BreakpointQuery>,
    Json(raw): Json<Value>,
) -> Result<Json<TemplateDataResponse>> {
    let template = state.registry.require(&id)?;

    let (settings, migration) = StoreSettings::load(template.id, &raw);
    if migration.migrated {
        info!(
            template = template.id,
            from = migration.from_version,
            to = migration.to_version,
            "migrated settings document"
        );
    }

    let data = UniversalTemplateData::from_settings(&settings);
    let resolved = query.breakpoint.map(|bp| data.resolve(bp));
    debug!(template = template.id, breakpoint = ?query.breakpoint, "normalized template data");

    Ok(Json(TemplateDataResponse {
        template,
        migration,
        data,
        breakpoint: query.breakpoint,
        resolved,
    }))
}
