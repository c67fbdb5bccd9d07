//! Router assembly shared by the server binary and the integration tests.

mod common;
mod hero;

pub use common::{common_routes, not_found};
pub use hero::hero_routes;

use crate::state::AppState;
use axum::extract::DefaultBodyLimit;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

/// Full application: common + hero routes, request tracing, body size limit.
///
/// The limit is enforced by the body extractors, so an oversized request surfaces as
/// [`crate::AppError::PayloadTooLarge`] whether or not it carries `Content-Length`.
pub fn build_router(state: AppState, max_body_bytes: usize) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(hero_routes(state))
        .fallback(not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(DefaultBodyLimit::max(max_body_bytes)),
        )
}
