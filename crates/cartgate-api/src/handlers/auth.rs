//! Auth handlers — customer and admin login, current-principal lookups.

use axum::Json;
use axum::extract::State;
use validator::Validate;

use crate::dto::request::{AdminLoginRequest, CustomerLoginRequest};
use crate::dto::response::{AdminUserResponse, ApiResponse, CustomerResponse, LoginResponse};
use crate::error::ApiError;
use crate::extractors::{AuthAdmin, AuthCustomer};
use crate::state::AppState;

/// POST /api/auth/customer/login
pub async fn login_customer(
    State(state): State<AppState>,
    Json(req): Json<CustomerLoginRequest>,
) -> Result<Json<ApiResponse<LoginResponse>>, ApiError> {
    req.validate()?;

    let (issued, _customer) = state
        .auth_service
        .login_customer(&req.email, &req.password)
        .await?;

    Ok(Json(ApiResponse::ok(LoginResponse {
        access_token: issued.token,
        token_type: "bearer".to_string(),
        expires_at: issued.expires_at,
    })))
}

/// POST /api/auth/admin/login
pub async fn login_admin(
    State(state): State<AppState>,
    Json(req): Json<AdminLoginRequest>,
) -> Result<Json<ApiResponse<LoginResponse>>, ApiError> {
    req.validate()?;

    let (issued, _admin) = state
        .auth_service
        .login_admin(&req.username, &req.password)
        .await?;

    Ok(Json(ApiResponse::ok(LoginResponse {
        access_token: issued.token,
        token_type: "bearer".to_string(),
        expires_at: issued.expires_at,
    })))
}

/// GET /api/auth/customer/me
pub async fn customer_me(
    AuthCustomer(customer): AuthCustomer,
) -> Json<ApiResponse<CustomerResponse>> {
    Json(ApiResponse::ok(customer.into()))
}

/// GET /api/auth/admin/me
pub async fn admin_me(AuthAdmin(admin): AuthAdmin) -> Json<ApiResponse<AdminUserResponse>> {
    Json(ApiResponse::ok(admin.into()))
}
