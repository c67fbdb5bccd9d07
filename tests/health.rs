//! Integration tests for the health, readiness and version endpoints, the OpenAPI document and general HTTP behaviour.

mod common;

use axum::http::StatusCode;
use common::{app_on, body_json, get, spawn_app};
use hero_api::Database;

#[tokio::test]
async fn health_returns_ok() {
    let app = spawn_app().await;
    let response = get(&app, "/health").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json, serde_json::json!({"status": "ok"}));
}

#[tokio::test]
async fn ready_checks_the_database() {
    let app = spawn_app().await;
    let response = get(&app, "/ready").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["database"], "ok");
}

#[tokio::test]
async fn ready_reports_unavailable_database() {
    let app = spawn_app().await;
    app.db.close().await;
    let response = get(&app, "/ready").await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let json = body_json(response).await;
    assert_eq!(json["status"], "unavailable");
    assert_eq!(json["database"], "unavailable");
}

#[tokio::test]
async fn ready_requires_the_hero_table() {
    let app = app_on(Database::in_memory().await.unwrap());
    let response = get(&app, "/ready").await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body_json(response).await["database"], "schema_missing");
}

#[tokio::test]
async fn storage_fault_is_a_500() {
    let app = spawn_app().await;
    app.db.close().await;
    let response = get(&app, "/heroes/1").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_json(response).await["detail"], "Internal Server Error");
}

#[tokio::test]
async fn version_reports_crate_metadata() {
    let app = spawn_app().await;
    let json = body_json(get(&app, "/version").await).await;
    assert_eq!(json["name"], "hero-api");
    assert!(json["version"].is_string());
}

#[tokio::test]
async fn openapi_document_is_served() {
    let app = spawn_app().await;
    let response = get(&app, "/openapi.json").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["openapi"].as_str().unwrap().starts_with("3."));
    assert!(json["paths"]["/heroes/{hero_id}"]["get"].is_object());
}

#[tokio::test]
async fn unknown_route_returns_404() {
    let app = spawn_app().await;
    let response = get(&app, "/this-route-does-not-exist").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["detail"], "Not Found");
}
