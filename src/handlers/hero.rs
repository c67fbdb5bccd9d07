//! Hero CRUD handlers: create, list, read, update, delete.

use crate::error::AppError;
use crate::extractors::Pagination;
use crate::model::{HeroCreate, HeroPublic, HeroUpdate};
use crate::service::{parse_int, FieldRule, HeroService, RequestValidator};
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};

const HERO_NOT_FOUND: &str = "Hero not found";

fn parse_id(id_str: &str) -> Result<i64, AppError> {
    parse_int(&["path", "hero_id"], id_str).map_err(|e| AppError::Validation(vec![e]))
}

/// Validate the raw body against `rules`, then decode the cleaned fields into the view type.
fn decode_body<T: DeserializeOwned>(
    body: Result<Json<Value>, JsonRejection>,
    rules: &[FieldRule],
) -> Result<T, AppError> {
    let Json(body) = body.map_err(|rejection| {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            AppError::PayloadTooLarge
        } else {
            AppError::invalid(&["body"], rejection.body_text(), "json_invalid")
        }
    })?;
    let fields = RequestValidator::validate(&body, rules)?;
    // The rules and the view type disagree if this fails; the client input was already accepted.
    serde_json::from_value(Value::Object(fields))
        .map_err(|e| AppError::Internal(format!("decoding validated body: {e}")))
}

#[utoipa::path(
    post,
    path = "/heroes/",
    tag = "heroes",
    request_body = HeroCreate,
    responses(
        (status = 200, description = "Created hero", body = HeroPublic),
        (status = 422, description = "Validation error")
    )
)]
pub async fn create_hero(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<HeroPublic>, AppError> {
    let input: HeroCreate = decode_body(body, &HeroCreate::fields())?;
    let hero = HeroService::create(&state.db, state.hasher.as_ref(), input).await?;
    Ok(Json(hero.into()))
}

#[utoipa::path(
    get,
    path = "/heroes/",
    tag = "heroes",
    params(Pagination),
    responses(
        (status = 200, description = "Heroes in id order", body = [HeroPublic]),
        (status = 422, description = "Invalid offset or limit")
    )
)]
pub async fn list_heroes(
    State(state): State<AppState>,
    page: Pagination,
) -> Result<Json<Vec<HeroPublic>>, AppError> {
    let heroes = HeroService::list(&state.db, page.offset, page.limit).await?;
    Ok(Json(heroes.into_iter().map(HeroPublic::from).collect()))
}

#[utoipa::path(
    get,
    path = "/heroes/{hero_id}",
    tag = "heroes",
    params(("hero_id" = i64, Path, description = "Hero id")),
    responses(
        (status = 200, description = "Hero", body = HeroPublic),
        (status = 404, description = "Hero not found")
    )
)]
pub async fn read_hero(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<Json<HeroPublic>, AppError> {
    let id = parse_id(&id_str)?;
    let hero = HeroService::read(&state.db, id)
        .await?
        .ok_or(AppError::NotFound(HERO_NOT_FOUND))?;
    Ok(Json(hero.into()))
}

#[utoipa::path(
    patch,
    path = "/heroes/{hero_id}",
    tag = "heroes",
    params(("hero_id" = i64, Path, description = "Hero id")),
    request_body = HeroUpdate,
    responses(
        (status = 200, description = "Updated hero", body = HeroPublic),
        (status = 404, description = "Hero not found"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn update_hero(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<HeroPublic>, AppError> {
    let id = parse_id(&id_str)?;
    let input: HeroUpdate = decode_body(body, &HeroUpdate::fields())?;
    let hero = HeroService::update(&state.db, state.hasher.as_ref(), id, input)
        .await?
        .ok_or(AppError::NotFound(HERO_NOT_FOUND))?;
    Ok(Json(hero.into()))
}

#[utoipa::path(
    delete,
    path = "/heroes/{hero_id}",
    tag = "heroes",
    params(("hero_id" = i64, Path, description = "Hero id")),
    responses(
        (status = 200, description = "Hero deleted"),
        (status = 404, description = "Hero not found")
    )
)]
pub async fn delete_hero(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<Json<Value>, AppError> {
    let id = parse_id(&id_str)?;
    if !HeroService::delete(&state.db, id).await? {
        return Err(AppError::NotFound(HERO_NOT_FOUND));
    }
    Ok(Json(json!({ "ok": true })))
}
