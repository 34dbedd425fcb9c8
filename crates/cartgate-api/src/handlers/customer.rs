//! Customer handlers: admin management plus customer self-service.

use axum::Json;
use axum::extract::{Path, Query, State};
use validator::Validate;

use cartgate_core::error::AppError;
use cartgate_core::types::pagination::{PageRequest, PageResponse};

use crate::dto::request::UpdateProfileRequest;
use crate::dto::response::{ApiResponse, CustomerResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::{AuthAdmin, AuthCustomer};
use crate::state::AppState;

/// GET /api/customers (admin)
pub async fn list_customers(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Query(page): Query<PageRequest>,
) -> Result<Json<ApiResponse<PageResponse<CustomerResponse>>>, ApiError> {
    let customers = state.customer_repo.list(&page).await?;
    Ok(Json(ApiResponse::ok(customers.map(CustomerResponse::from))))
}

/// GET /api/customers/me
pub async fn me(AuthCustomer(customer): AuthCustomer) -> Json<ApiResponse<CustomerResponse>> {
    Json(ApiResponse::ok(customer.into()))
}

/// PUT /api/customers/me
pub async fn update_me(
    State(state): State<AppState>,
    AuthCustomer(customer): AuthCustomer,
    Json(req): Json<UpdateProfileRequest>,
) -> Result<Json<ApiResponse<CustomerResponse>>, ApiError> {
    req.validate()?;

    let updated = state
        .customer_repo
        .update_profile(
            customer.customer_id,
            &req.firstname,
            &req.lastname,
            &req.email,
            &req.telephone,
            req.newsletter,
        )
        .await?
        .ok_or_else(|| AppError::not_found("Customer not found"))?;

    Ok(Json(ApiResponse::ok(updated.into())))
}

/// GET /api/customers/{id} (admin)
pub async fn get_customer(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<CustomerResponse>>, ApiError> {
    let customer = state
        .customer_repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found("Customer not found"))?;
    Ok(Json(ApiResponse::ok(customer.into())))
}

/// DELETE /api/customers/{id} (admin)
pub async fn delete_customer(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    if !state.customer_repo.delete(id).await? {
        return Err(AppError::not_found("Customer not found").into());
    }
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Customer deleted".to_string(),
    })))
}
