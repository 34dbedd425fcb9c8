//! Auth extractors — pull the bearer token from the Authorization header
//! and resolve it to a live principal of the required type.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use cartgate_auth::service::RequiredPrincipal;
use cartgate_core::error::AppError;
use cartgate_entity::customer::Customer;
use cartgate_entity::principal::Principal;
use cartgate_entity::user::AdminUser;

use crate::error::ApiError;
use crate::state::AppState;

/// Extracted authenticated customer.
#[derive(Debug, Clone)]
pub struct AuthCustomer(pub Customer);

/// Extracted authenticated admin.
#[derive(Debug, Clone)]
pub struct AuthAdmin(pub AdminUser);

/// Required principal of either type.
#[derive(Debug, Clone)]
pub struct AuthPrincipal(pub Principal);

/// Optional principal of either type.
///
/// `None` when no Authorization header is present; a header that is
/// present but invalid still rejects the request.
#[derive(Debug, Clone)]
pub struct MaybePrincipal(pub Option<Principal>);

fn bearer_token(parts: &Parts) -> Result<&str, AppError> {
    let auth_header = parts
        .headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| AppError::unauthenticated("Missing Authorization header"))?;

    auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::unauthenticated("Invalid Authorization header format"))
}

impl FromRequestParts<AppState> for AuthCustomer {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts)?;
        let principal = state
            .auth_service
            .resolve(token, RequiredPrincipal::Customer)
            .await?;
        match principal {
            Principal::Customer(customer) => Ok(Self(customer)),
            Principal::Admin(_) => {
                Err(AppError::unauthenticated("Could not validate credentials").into())
            }
        }
    }
}

impl FromRequestParts<AppState> for AuthAdmin {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts)?;
        let principal = state
            .auth_service
            .resolve(token, RequiredPrincipal::Admin)
            .await?;
        match principal {
            Principal::Admin(admin) => Ok(Self(admin)),
            Principal::Customer(_) => {
                Err(AppError::unauthenticated("Could not validate credentials").into())
            }
        }
    }
}

impl FromRequestParts<AppState> for AuthPrincipal {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts)?;
        let principal = state
            .auth_service
            .resolve(token, RequiredPrincipal::Any)
            .await?;
        Ok(Self(principal))
    }
}

impl FromRequestParts<AppState> for MaybePrincipal {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if parts.headers.get("authorization").is_none() {
            return Ok(Self(None));
        }
        let token = bearer_token(parts)?;
        let principal = state
            .auth_service
            .resolve(token, RequiredPrincipal::Any)
            .await?;
        Ok(Self(Some(principal)))
    }
}
