#![allow(dead_code)]

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

use hero_api::{build_router, AppState, Database, PasswordHasher, ServerConfig};

/// Router under test plus a handle on its private database, for asserting on stored rows.
pub struct TestApp {
    pub router: Router,
    pub db: Database,
}

/// Fresh in-memory database and the same router production builds.
pub async fn spawn_app() -> TestApp {
    let db = test_database().await;
    let router = build_router(AppState::new(db.clone()), ServerConfig::default().max_body_bytes);
    TestApp { router, db }
}

/// Same as [`spawn_app`] with a substituted password hasher.
pub async fn spawn_app_with_hasher(hasher: Arc<dyn PasswordHasher>) -> TestApp {
    let db = test_database().await;
    let router = build_router(
        AppState::with_hasher(db.clone(), hasher),
        ServerConfig::default().max_body_bytes,
    );
    TestApp { router, db }
}

/// Router over a caller-supplied database, e.g. a file-backed one.
pub fn app_on(db: Database) -> TestApp {
    let router = build_router(AppState::new(db.clone()), ServerConfig::default().max_body_bytes);
    TestApp { router, db }
}

async fn test_database() -> Database {
    let db = Database::in_memory().await.expect("in-memory database");
    db.ensure_schema().await.expect("hero table");
    db
}

pub async fn send(app: &TestApp, method: Method, uri: &str, body: Option<Value>) -> Response {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.router.clone().oneshot(request).await.unwrap()
}

pub async fn get(app: &TestApp, uri: &str) -> Response {
    send(app, Method::GET, uri, None).await
}

pub async fn post_json(app: &TestApp, uri: &str, body: Value) -> Response {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn patch_json(app: &TestApp, uri: &str, body: Value) -> Response {
    send(app, Method::PATCH, uri, Some(body)).await
}

pub async fn delete(app: &TestApp, uri: &str) -> Response {
    send(app, Method::DELETE, uri, None).await
}

pub async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).expect("response body should be JSON")
}

pub fn deadpond() -> Value {
    json!({
        "name": "Deadpond",
        "secret_name": "Dive Wilson",
        "password": "123",
    })
}

pub fn rusty_man() -> Value {
    json!({
        "name": "Rusty-Man",
        "secret_name": "Tomy Sharp",
        "age": 48,
        "password": "123",
    })
}

/// POST a hero and return the response body; panics unless the create succeeded.
pub async fn create(app: &TestApp, body: Value) -> Value {
    let response = post_json(app, "/heroes/", body).await;
    assert_eq!(response.status(), 200, "create should succeed");
    body_json(response).await
}
