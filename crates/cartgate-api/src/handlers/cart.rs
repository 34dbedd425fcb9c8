//! Cart handlers.
//!
//! Guests get a cart keyed by their session cookie; authenticated
//! customers get one keyed by their account. An admin token is treated
//! like a guest here — admins do not shop.

use axum::Extension;
use axum::Json;
use axum::extract::{Path, State};
use validator::Validate;

use cartgate_core::error::AppError;
use cartgate_database::repositories::cart::CartOwner;
use cartgate_entity::cart::{CartItem, CartLine};
use cartgate_entity::principal::Principal;

use crate::dto::request::{AddToCartRequest, UpdateCartItemRequest};
use crate::dto::response::{ApiResponse, CartLineResponse, CartSummaryResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::MaybePrincipal;
use crate::middleware::SessionId;
use crate::state::AppState;

fn cart_owner(principal: &MaybePrincipal, session: &SessionId) -> CartOwner {
    match &principal.0 {
        Some(Principal::Customer(customer)) => CartOwner::Customer(customer.customer_id),
        _ => CartOwner::Guest(session.0.clone()),
    }
}

fn owns_item(owner: &CartOwner, item: &CartItem) -> bool {
    match owner {
        CartOwner::Customer(id) => item.customer_id == *id,
        CartOwner::Guest(session_id) => item.customer_id == 0 && item.session_id == *session_id,
    }
}

fn summarize(lines: Vec<CartLine>) -> CartSummaryResponse {
    let items: Vec<CartLineResponse> = lines
        .into_iter()
        .map(|line| {
            let option = serde_json::from_str(&line.option_json)
                .unwrap_or(serde_json::Value::Object(Default::default()));
            CartLineResponse {
                cart_id: line.cart_id,
                product_id: line.product_id,
                name: line.name,
                image: line.image,
                quantity: line.quantity,
                price: line.price,
                total: line.price * line.quantity as f64,
                option,
                date_added: line.date_added,
            }
        })
        .collect();
    let total_price = items.iter().map(|i| i.total).sum();
    CartSummaryResponse {
        total_items: items.len(),
        items,
        total_price,
    }
}

/// GET /api/cart
pub async fn get_cart(
    State(state): State<AppState>,
    principal: MaybePrincipal,
    Extension(session): Extension<SessionId>,
) -> Result<Json<ApiResponse<CartSummaryResponse>>, ApiError> {
    let owner = cart_owner(&principal, &session);
    let lines = state.cart_repo.list_lines(&owner).await?;
    Ok(Json(ApiResponse::ok(summarize(lines))))
}

/// POST /api/cart/items
pub async fn add_item(
    State(state): State<AppState>,
    principal: MaybePrincipal,
    Extension(session): Extension<SessionId>,
    Json(req): Json<AddToCartRequest>,
) -> Result<Json<ApiResponse<CartSummaryResponse>>, ApiError> {
    req.validate()?;

    state
        .product_repo
        .find_by_id(req.product_id)
        .await?
        .ok_or_else(|| AppError::not_found("Product not found"))?;

    let owner = cart_owner(&principal, &session);
    let option_json = req.option.to_string();
    state
        .cart_repo
        .add_item(&owner, &session.0, req.product_id, req.quantity, &option_json)
        .await?;

    let lines = state.cart_repo.list_lines(&owner).await?;
    Ok(Json(ApiResponse::ok(summarize(lines))))
}

/// PUT /api/cart/items/{id}
pub async fn update_item(
    State(state): State<AppState>,
    principal: MaybePrincipal,
    Extension(session): Extension<SessionId>,
    Path(cart_id): Path<i32>,
    Json(req): Json<UpdateCartItemRequest>,
) -> Result<Json<ApiResponse<CartSummaryResponse>>, ApiError> {
    req.validate()?;

    let owner = cart_owner(&principal, &session);
    let item = state
        .cart_repo
        .find_item(cart_id)
        .await?
        .ok_or_else(|| AppError::not_found("Cart item not found"))?;
    if !owns_item(&owner, &item) {
        return Err(AppError::forbidden("Cart item belongs to another cart").into());
    }

    state.cart_repo.update_quantity(cart_id, req.quantity).await?;
    let lines = state.cart_repo.list_lines(&owner).await?;
    Ok(Json(ApiResponse::ok(summarize(lines))))
}

/// DELETE /api/cart/items/{id}
pub async fn remove_item(
    State(state): State<AppState>,
    principal: MaybePrincipal,
    Extension(session): Extension<SessionId>,
    Path(cart_id): Path<i32>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    let owner = cart_owner(&principal, &session);
    let item = state
        .cart_repo
        .find_item(cart_id)
        .await?
        .ok_or_else(|| AppError::not_found("Cart item not found"))?;
    if !owns_item(&owner, &item) {
        return Err(AppError::forbidden("Cart item belongs to another cart").into());
    }

    state.cart_repo.delete_item(cart_id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Item removed".to_string(),
    })))
}

/// DELETE /api/cart
pub async fn clear_cart(
    State(state): State<AppState>,
    principal: MaybePrincipal,
    Extension(session): Extension<SessionId>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    let owner = cart_owner(&principal, &session);
    let removed = state.cart_repo.clear(&owner).await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: format!("Removed {removed} items"),
    })))
}
