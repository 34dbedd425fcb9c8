//! Zone handlers (reference data; admin CRUD).

use axum::Json;
use axum::extract::{Path, Query, State};
use validator::Validate;

use cartgate_core::error::AppError;
use cartgate_entity::zone::Zone;

use crate::dto::request::{ZoneListQuery, ZoneRequest};
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::AuthAdmin;
use crate::state::AppState;

/// GET /api/zones
pub async fn list_zones(
    State(state): State<AppState>,
    Query(query): Query<ZoneListQuery>,
) -> Result<Json<ApiResponse<Vec<Zone>>>, ApiError> {
    let zones = state.zone_repo.list(query.country_id).await?;
    Ok(Json(ApiResponse::ok(zones)))
}

/// GET /api/zones/{id}
pub async fn get_zone(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<Zone>>, ApiError> {
    let zone = state
        .zone_repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found("Zone not found"))?;
    Ok(Json(ApiResponse::ok(zone)))
}

/// POST /api/zones (admin)
pub async fn create_zone(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Json(req): Json<ZoneRequest>,
) -> Result<Json<ApiResponse<Zone>>, ApiError> {
    req.validate()?;
    let zone = state
        .zone_repo
        .create(req.country_id, &req.name, &req.code, req.status)
        .await?;
    Ok(Json(ApiResponse::ok(zone)))
}

/// PUT /api/zones/{id} (admin)
pub async fn update_zone(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Path(id): Path<i32>,
    Json(req): Json<ZoneRequest>,
) -> Result<Json<ApiResponse<Zone>>, ApiError> {
    req.validate()?;
    let zone = state
        .zone_repo
        .update(id, req.country_id, &req.name, &req.code, req.status)
        .await?
        .ok_or_else(|| AppError::not_found("Zone not found"))?;
    Ok(Json(ApiResponse::ok(zone)))
}

/// DELETE /api/zones/{id} (admin)
pub async fn delete_zone(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    if !state.zone_repo.delete(id).await? {
        return Err(AppError::not_found("Zone not found").into());
    }
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Zone deleted".to_string(),
    })))
}
