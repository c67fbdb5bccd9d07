//! Health, readiness and version endpoints, the OpenAPI document and the JSON 404 fallback.

use crate::error::ErrorBody;
use crate::openapi::ApiDoc;
use crate::state::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use utoipa::OpenApi;

/// Database state as reported by `/ready`.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
enum StoreStatus {
    Ok,
    SchemaMissing,
    Unavailable,
}

#[derive(Serialize)]
struct StatusBody {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    database: Option<StoreStatus>,
}

impl StatusBody {
    fn live() -> Self {
        StatusBody { status: "ok", database: None }
    }
}

impl IntoResponse for StatusBody {
    fn into_response(self) -> Response {
        let code = match self.database {
            None | Some(StoreStatus::Ok) => StatusCode::OK,
            Some(_) => StatusCode::SERVICE_UNAVAILABLE,
        };
        (code, Json(self)).into_response()
    }
}

#[derive(Serialize)]
struct BuildInfo {
    name: &'static str,
    version: &'static str,
}

async fn health() -> StatusBody {
    StatusBody::live()
}

/// Ready once the database answers and the hero table is in place.
async fn ready(State(state): State<AppState>) -> StatusBody {
    let database = match state.db.has_schema().await {
        Ok(true) => StoreStatus::Ok,
        Ok(false) => {
            tracing::warn!("hero table missing");
            StoreStatus::SchemaMissing
        }
        Err(e) => {
            tracing::warn!(error = %e, "database unreachable");
            StoreStatus::Unavailable
        }
    };
    StatusBody {
        status: if database == StoreStatus::Ok { "ok" } else { "unavailable" },
        database: Some(database),
    }
}

async fn version() -> Json<BuildInfo> {
    Json(BuildInfo {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
    })
}

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Fallback for unmatched routes, in the same body shape as other errors.
pub async fn not_found() -> (StatusCode, Json<ErrorBody<&'static str>>) {
    (StatusCode::NOT_FOUND, Json(ErrorBody { detail: "Not Found" }))
}

pub fn common_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/ready", get(ready))
        .route("/version", get(version))
        .route("/openapi.json", get(openapi))
        .with_state(state)
}
