//! HTTP routes.

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use superhero_shared::{ApiResult, HeroDto, HeroRequest, SuperPowerDto, SuperPowerRequest};

use super::error::ApiError;
use super::extract::{ApiJson, ApiPath};
use crate::app::App;

/// Create all HTTP routes.
pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/heroes", get(list_heroes).post(create_hero))
        .route(
            "/api/heroes/{id}",
            get(get_hero).put(update_hero).delete(delete_hero),
        )
        .route(
            "/api/superpowers",
            get(list_super_powers).post(create_super_power),
        )
        .route(
            "/api/superpowers/{id}",
            get(get_super_power)
                .put(update_super_power)
                .delete(delete_super_power),
        )
}

async fn health() -> &'static str {
    "OK"
}

fn created<T: serde::Serialize>(location: String, data: T) -> impl IntoResponse {
    (
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(ApiResult::success(data)),
    )
}

// =============================================================================
// Heroes
// =============================================================================

async fn list_heroes(
    State(app): State<Arc<App>>,
) -> Result<Json<ApiResult<Vec<HeroDto>>>, ApiError> {
    let heroes = app.use_cases.management.hero.list().await?;
    if heroes.is_empty() {
        return Err(ApiError::NotFound("No heroes registered".to_string()));
    }
    Ok(Json(ApiResult::success(heroes)))
}

async fn get_hero(
    State(app): State<Arc<App>>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<ApiResult<HeroDto>>, ApiError> {
    let hero = app
        .use_cases
        .management
        .hero
        .get(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Hero not found".to_string()))?;
    Ok(Json(ApiResult::success(hero)))
}

async fn create_hero(
    State(app): State<Arc<App>>,
    ApiJson(request): ApiJson<HeroRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let hero = app.use_cases.management.hero.create(request).await?;
    Ok(created(format!("/api/heroes/{}", hero.id), hero))
}

async fn update_hero(
    State(app): State<Arc<App>>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(request): ApiJson<HeroRequest>,
) -> Result<Json<ApiResult<HeroDto>>, ApiError> {
    let hero = app.use_cases.management.hero.update(id, request).await?;
    Ok(Json(ApiResult::success(hero)))
}

async fn delete_hero(
    State(app): State<Arc<App>>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<ApiResult<HeroDto>>, ApiError> {
    let hero = app.use_cases.management.hero.delete(id).await?;
    Ok(Json(ApiResult::success(hero)))
}

// =============================================================================
// Superpowers
// =============================================================================

async fn list_super_powers(
    State(app): State<Arc<App>>,
) -> Result<Json<ApiResult<Vec<SuperPowerDto>>>, ApiError> {
    let super_powers = app.use_cases.management.super_power.list().await?;
    if super_powers.is_empty() {
        return Err(ApiError::NotFound("No superpowers registered".to_string()));
    }
    Ok(Json(ApiResult::success(super_powers)))
}

async fn get_super_power(
    State(app): State<Arc<App>>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<ApiResult<SuperPowerDto>>, ApiError> {
    let super_power = app
        .use_cases
        .management
        .super_power
        .get(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("SuperPower not found".to_string()))?;
    Ok(Json(ApiResult::success(super_power)))
}

async fn create_super_power(
    State(app): State<Arc<App>>,
    ApiJson(request): ApiJson<SuperPowerRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let super_power = app.use_cases.management.super_power.create(request).await?;
    Ok(created(format!("/api/superpowers/{}", super_power.id), super_power))
}

async fn update_super_power(
    State(app): State<Arc<App>>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(request): ApiJson<SuperPowerRequest>,
) -> Result<Json<ApiResult<SuperPowerDto>>, ApiError> {
    let super_power = app
        .use_cases
        .management
        .super_power
        .update(id, request)
        .await?;
    Ok(Json(ApiResult::success(super_power)))
}

async fn delete_super_power(
    State(app): State<Arc<App>>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<ApiResult<SuperPowerDto>>, ApiError> {
    let super_power = app.use_cases.management.super_power.delete(id).await?;
    Ok(Json(ApiResult::success(super_power)))
}
