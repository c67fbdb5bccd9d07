//! OpenAPI document for the hero routes, served at `GET /openapi.json`.

use crate::model::{HeroCreate, HeroPublic, HeroUpdate};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Hero API",
        description = "Create, list, read, update and delete heroes."
    ),
    paths(
        crate::handlers::hero::create_hero,
        crate::handlers::hero::list_heroes,
        crate::handlers::hero::read_hero,
        crate::handlers::hero::update_hero,
        crate::handlers::hero::delete_hero,
    ),
    components(schemas(HeroCreate, HeroPublic, HeroUpdate)),
    tags((name = "heroes", description = "Hero records"))
)]
pub struct ApiDoc;
