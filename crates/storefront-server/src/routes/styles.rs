use crate::{AppState, models::RequiredBreakpointQuery};
use axum::{Json, Router, extract::Query, routing::post};
use serde_json::{Map, Value};
use storefront::resolve_responsive_style;

pub fn router() -> Router<AppState> {
    Router::new().route("/resolve", post(resolve_style))
}

async fn resolve_style(
    Query(query): Query<RequiredBreakpointQuery>,
    Json(style): Json<Map<String, Value>>,
) -> Json<Map<String, Value>> {
    Json(resolve_responsive_style(&style, query.breakpoint))
}
