//! Settings document routes

use crate::{
    AppState,
    error::Result,
    models::{EditRequest, EditResponse},
};
use axum::{Json, Router, routing::post};
use serde_json::Value;
use storefront::{Migration, apply_edit, field_for_edit_path, migrate};
use tracing::debug;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/migrate", post(migrate_settings))
        .route("/edit", post(edit_settings))
}

async fn migrate_settings(Json(raw): Json<Value>) -> Json<Migration> {
    let migration = migrate(&raw);
    debug!(
        from = migration.from_version,
        to = migration.to_version,
        migrated = migration.migrated,
        "migrate request"
    );
    Json(migration)
}

/// Apply one editor change to a settings document
async fn edit_settings(Json(request): Json<EditRequest>) -> Result<Json<EditResponse>> {
    let migration = migrate(&request.document);
    let updated = apply_edit(&migration.doc, &request.path, request.value)?;
    let field = field_for_edit_path(&request.path).map(|f| f.name);
    debug!(path = %request.path, field = ?field, "applied settings edit");

    Ok(Json(EditResponse {
        document: updated.to_value(),
        field,
        migrated: migration.migrated,
    }))
}
