//! Universal field table and edit path lookups for the editor

use crate::{
    AppState,
    error::{ApiError, Result},
    models::{BreakpointQuery, EditPathResponse},
};
use axum::{
    Json, Router,
    extract::{Path, Query},
    routing::get,
};
use storefront::{FieldSpec, UNIVERSAL_FIELDS, edit_attribute, edit_path_for, field_spec};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/fields", get(list_fields))
        .route("/edit-paths/{field}", get(get_edit_path))
}

async fn list_fields() -> Json<&'static [FieldSpec]> {
    Json(UNIVERSAL_FIELDS)
}

async fn get_edit_path(
    Path(field): Path<String>,
    Query(query): Query<BreakpointQuery>,
) -> Result<Json<EditPathResponse>> {
    let spec = field_spec(&field).ok_or_else(|| ApiError::FieldNotFound(field.clone()))?;
    let edit_path = edit_path_for(spec.name, query.breakpoint)?;
    let attribute = edit_attribute(spec.name, query.breakpoint)?;

    Ok(Json(EditPathResponse {
        field: spec.name,
        edit_path,
        attribute,
    }))
}
