//! Hero CRUD routes. `/heroes` and `/heroes/` both resolve to the collection handlers.

use crate::handlers::hero::{create_hero, delete_hero, list_heroes, read_hero, update_hero};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn hero_routes(state: AppState) -> Router {
    Router::new()
        .route("/heroes/", get(list_heroes).post(create_hero))
        .route("/heroes", get(list_heroes).post(create_hero))
        .route(
            "/heroes/:hero_id",
            get(read_hero).patch(update_hero).delete(delete_hero),
        )
        .with_state(state)
}
