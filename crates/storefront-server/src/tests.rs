use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode},
};
use serde_json::{Value, json};
use storefront::UNIVERSAL_FIELDS;
use storefront_registry::TemplateRegistry;
use tower::ServiceExt;

use crate::{AppState, config::ServerConfig, create_router};

fn app() -> Router {
    let state = AppState {
        registry: TemplateRegistry::builtin(),
        config: ServerConfig::default(),
    };
    create_router(state).unwrap()
}

async fn send(method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

#[tokio::test]
async fn test_health_check() {
    let (status, body) = send(Method::GET, "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["schemaVersion"], json!(storefront::CURRENT_SCHEMA_VERSION));
}

#[tokio::test]
async fn test_list_and_get_templates() {
    let (status, body) = send(Method::GET, "/api/templates", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.as_array().unwrap().len() >= 12);

    let (status, body) = send(Method::GET, "/api/templates/minimal", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["settingsComponent"], "templates/minimal/Settings");

    let (status, body) = send(Method::GET, "/api/templates/vaporwave", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["status"], 404);
}

#[tokio::test]
async fn test_template_data_migrates_and_resolves() {
    let raw = json!({
        "version": 1,
        "layout": {
            "hero": {"imageHeight": 220, "imageHeightMd": 420, "heading": "Hello"}
        }
    });

    let (status, body) = send(
        Method::POST,
        "/api/templates/classic/data?breakpoint=tablet",
        Some(raw),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["template"]["id"], "classic");
    assert_eq!(body["migration"]["migrated"], true);
    assert_eq!(body["migration"]["fromVersion"], 1);
    assert_eq!(body["data"]["heroTitle"], "Hello");
    assert_eq!(body["data"]["heroImageHeight"], json!({"mobile": 220.0, "desktop": 420.0}));
    assert_eq!(body["breakpoint"], "tablet");
    assert_eq!(body["resolved"]["heroImageHeight"], json!(420.0));
}

#[tokio::test]
async fn test_template_data_without_breakpoint() {
    let (status, body) = send(Method::POST, "/api/templates/modern/data", Some(json!({}))).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.get("resolved").is_none());
    assert_eq!(body["data"]["storeName"], "My Store");
}

#[tokio::test]
async fn test_template_data_unknown_template() {
    let (status, _) = send(Method::POST, "/api/templates/vaporwave/data", Some(json!({}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_migrate_keeps_existing_responsive_value() {
    let raw = json!({
        "version": 1,
        "layout": {"hero": {"imageHeight": {"mobile": 200, "desktop": 400}, "imageHeightMd": 999}}
    });

    let (status, body) = send(Method::POST, "/api/settings/migrate", Some(raw)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["doc"]["layout"]["hero"],
        json!({"imageHeight": {"mobile": 200, "desktop": 400}})
    );
    assert_eq!(body["toVersion"], json!(storefront::CURRENT_SCHEMA_VERSION));
}

#[tokio::test]
async fn test_resolve_style() {
    let style = json!({
        "fontSize": {"mobile": 12, "desktop": 20},
        "lineHeight": {"mobile": 1.2, "desktop": 1.4},
        "color": "#111111"
    });

    let (status, body) = send(
        Method::POST,
        "/api/styles/resolve?breakpoint=mobile",
        Some(style.clone()),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"fontSize": 12, "lineHeight": 1.2, "color": "#111111"}));

    let (status, _) = send(Method::POST, "/api/styles/resolve", Some(style.clone())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(Method::POST, "/api/styles/resolve?breakpoint=wide", Some(style)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_fields_and_edit_paths() {
    let (status, body) = send(Method::GET, "/api/fields", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), UNIVERSAL_FIELDS.len());

    let (status, body) = send(
        Method::GET,
        "/api/edit-paths/heroImageHeight?breakpoint=mobile",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["editPath"], "hero.imageHeight.mobile");
    assert_eq!(body["attribute"], r#"data-edit-path="hero.imageHeight.mobile""#);

    let (status, body) = send(Method::GET, "/api/edit-paths/heroBanana", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Unknown template field: heroBanana");
}

#[tokio::test]
async fn test_edit_settings() {
    let request = json!({
        "document": {"version": 3, "layout": {"hero": {"imageHeight": 300}}},
        "path": "hero.imageHeight.mobile",
        "value": 180
    });

    let (status, body) = send(Method::POST, "/api/settings/edit", Some(request)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["field"], "heroImageHeight");
    assert_eq!(body["migrated"], false);
    assert_eq!(
        body["document"]["layout"]["hero"]["imageHeight"],
        json!({"mobile": 180, "desktop": 300})
    );
}

#[tokio::test]
async fn test_edit_settings_rejects_bad_path() {
    let request = json!({
        "document": {"version": 3, "layout": {}},
        "path": "hero..title",
        "value": "x"
    });

    let (status, body) = send(Method::POST, "/api/settings/edit", Some(request)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], 400);
}
