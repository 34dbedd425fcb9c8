//! Order handlers.

use axum::Json;
use axum::extract::{Path, Query, State};

use cartgate_core::error::AppError;
use cartgate_core::types::pagination::{PageRequest, PageResponse};
use cartgate_entity::order::Order;
use cartgate_entity::principal::Principal;

use crate::dto::request::UpdateOrderStatusRequest;
use crate::dto::response::{ApiResponse, OrderDetailResponse};
use crate::error::ApiError;
use crate::extractors::{AuthAdmin, AuthCustomer, AuthPrincipal};
use crate::state::AppState;

/// GET /api/orders (admin)
pub async fn list_orders(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Query(page): Query<PageRequest>,
) -> Result<Json<ApiResponse<PageResponse<Order>>>, ApiError> {
    let orders = state.order_repo.list(&page).await?;
    Ok(Json(ApiResponse::ok(orders)))
}

/// GET /api/orders/my-orders
pub async fn my_orders(
    State(state): State<AppState>,
    AuthCustomer(customer): AuthCustomer,
    Query(page): Query<PageRequest>,
) -> Result<Json<ApiResponse<PageResponse<Order>>>, ApiError> {
    let orders = state
        .order_repo
        .list_by_customer(customer.customer_id, &page)
        .await?;
    Ok(Json(ApiResponse::ok(orders)))
}

/// GET /api/orders/{id}
///
/// Admins see any order; customers only their own.
pub async fn get_order(
    State(state): State<AppState>,
    AuthPrincipal(principal): AuthPrincipal,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<OrderDetailResponse>>, ApiError> {
    let order = state
        .order_repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found("Order not found"))?;

    if let Principal::Customer(customer) = &principal {
        if order.customer_id != customer.customer_id {
            return Err(AppError::forbidden("Order belongs to another customer").into());
        }
    }

    let products = state.order_repo.find_products(id).await?;
    Ok(Json(ApiResponse::ok(OrderDetailResponse {
        order,
        products,
    })))
}

/// PUT /api/orders/{id}/status (admin)
pub async fn update_order_status(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Path(id): Path<i32>,
    Json(req): Json<UpdateOrderStatusRequest>,
) -> Result<Json<ApiResponse<OrderDetailResponse>>, ApiError> {
    let order = state
        .order_repo
        .update_status(id, req.order_status_id)
        .await?
        .ok_or_else(|| AppError::not_found("Order not found"))?;

    let products = state.order_repo.find_products(id).await?;
    Ok(Json(ApiResponse::ok(OrderDetailResponse {
        order,
        products,
    })))
}
