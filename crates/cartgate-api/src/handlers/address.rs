//! Address handlers: customer-owned CRUD plus admin access.

use axum::Json;
use axum::extract::{Path, State};
use validator::Validate;

use cartgate_core::error::AppError;
use cartgate_entity::address::{Address, CreateAddress};

use crate::dto::request::AddressRequest;
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::{AuthAdmin, AuthCustomer};
use crate::state::AppState;

fn to_create(req: AddressRequest) -> CreateAddress {
    CreateAddress {
        firstname: req.firstname,
        lastname: req.lastname,
        company: req.company,
        address_1: req.address_1,
        address_2: req.address_2,
        city: req.city,
        postcode: req.postcode,
        country_id: req.country_id,
        zone_id: req.zone_id,
    }
}

/// GET /api/addresses/my-addresses
pub async fn my_addresses(
    State(state): State<AppState>,
    AuthCustomer(customer): AuthCustomer,
) -> Result<Json<ApiResponse<Vec<Address>>>, ApiError> {
    let addresses = state
        .address_repo
        .list_by_customer(customer.customer_id)
        .await?;
    Ok(Json(ApiResponse::ok(addresses)))
}

/// GET /api/addresses/{id}
pub async fn get_address(
    State(state): State<AppState>,
    AuthCustomer(customer): AuthCustomer,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<Address>>, ApiError> {
    let address = state
        .address_repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found("Address not found"))?;
    if address.customer_id != customer.customer_id {
        return Err(AppError::forbidden("Address belongs to another customer").into());
    }
    Ok(Json(ApiResponse::ok(address)))
}

/// POST /api/addresses
pub async fn create_address(
    State(state): State<AppState>,
    AuthCustomer(customer): AuthCustomer,
    Json(req): Json<AddressRequest>,
) -> Result<Json<ApiResponse<Address>>, ApiError> {
    req.validate()?;
    let address = state
        .address_repo
        .create(customer.customer_id, &to_create(req))
        .await?;
    Ok(Json(ApiResponse::ok(address)))
}

/// PUT /api/addresses/{id}
pub async fn update_address(
    State(state): State<AppState>,
    AuthCustomer(customer): AuthCustomer,
    Path(id): Path<i32>,
    Json(req): Json<AddressRequest>,
) -> Result<Json<ApiResponse<Address>>, ApiError> {
    req.validate()?;

    let existing = state
        .address_repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found("Address not found"))?;
    if existing.customer_id != customer.customer_id {
        return Err(AppError::forbidden("Address belongs to another customer").into());
    }

    let address = state
        .address_repo
        .update(id, &to_create(req))
        .await?
        .ok_or_else(|| AppError::not_found("Address not found"))?;
    Ok(Json(ApiResponse::ok(address)))
}

/// DELETE /api/addresses/{id}
pub async fn delete_address(
    State(state): State<AppState>,
    AuthCustomer(customer): AuthCustomer,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    let existing = state
        .address_repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found("Address not found"))?;
    if existing.customer_id != customer.customer_id {
        return Err(AppError::forbidden("Address belongs to another customer").into());
    }

    state.address_repo.delete(id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Address deleted".to_string(),
    })))
}

/// GET /api/addresses/admin/customer/{id} (admin)
pub async fn admin_customer_addresses(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Path(customer_id): Path<i32>,
) -> Result<Json<ApiResponse<Vec<Address>>>, ApiError> {
    let addresses = state.address_repo.list_by_customer(customer_id).await?;
    Ok(Json(ApiResponse::ok(addresses)))
}
