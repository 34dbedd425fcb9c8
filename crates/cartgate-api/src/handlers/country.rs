//! Country handlers (reference data; admin CRUD).

use axum::Json;
use axum::extract::{Path, State};
use validator::Validate;

use cartgate_core::error::AppError;
use cartgate_entity::country::Country;

use crate::dto::request::CountryRequest;
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::AuthAdmin;
use crate::state::AppState;

/// GET /api/countries
pub async fn list_countries(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Country>>>, ApiError> {
    let countries = state.country_repo.list(true).await?;
    Ok(Json(ApiResponse::ok(countries)))
}

/// GET /api/countries/{id}
pub async fn get_country(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<Country>>, ApiError> {
    let country = state
        .country_repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found("Country not found"))?;
    Ok(Json(ApiResponse::ok(country)))
}

/// POST /api/countries (admin)
pub async fn create_country(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Json(req): Json<CountryRequest>,
) -> Result<Json<ApiResponse<Country>>, ApiError> {
    req.validate()?;
    let country = state
        .country_repo
        .create(
            &req.name,
            &req.iso_code_2,
            &req.iso_code_3,
            req.postcode_required,
            req.status,
        )
        .await?;
    Ok(Json(ApiResponse::ok(country)))
}

/// PUT /api/countries/{id} (admin)
pub async fn update_country(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Path(id): Path<i32>,
    Json(req): Json<CountryRequest>,
) -> Result<Json<ApiResponse<Country>>, ApiError> {
    req.validate()?;
    let country = state
        .country_repo
        .update(
            id,
            &req.name,
            &req.iso_code_2,
            &req.iso_code_3,
            req.postcode_required,
            req.status,
        )
        .await?
        .ok_or_else(|| AppError::not_found("Country not found"))?;
    Ok(Json(ApiResponse::ok(country)))
}

/// DELETE /api/countries/{id} (admin)
pub async fn delete_country(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    if !state.country_repo.delete(id).await? {
        return Err(AppError::not_found("Country not found").into());
    }
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Country deleted".to_string(),
    })))
}
