//! Product handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use validator::Validate;

use cartgate_core::error::AppError;
use cartgate_core::types::pagination::{PageRequest, PageResponse};
use cartgate_database::repositories::product::ProductFilter;
use cartgate_entity::product::{CreateProduct, ProductSummary, UpdateProduct};

use crate::dto::request::{CreateProductRequest, ProductListQuery, UpdateProductRequest};
use crate::dto::response::{ApiResponse, MessageResponse, ProductDetailResponse};
use crate::error::ApiError;
use crate::extractors::AuthAdmin;
use crate::state::AppState;

/// GET /api/products
pub async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<ProductListQuery>,
) -> Result<Json<ApiResponse<PageResponse<ProductSummary>>>, ApiError> {
    let page = PageRequest::new(query.page.unwrap_or(1), query.page_size.unwrap_or(25));
    let filter = ProductFilter {
        search: query.search,
        category_id: query.category_id,
        min_price: query.min_price,
        max_price: query.max_price,
        status: query.status,
    };
    let products = state.product_repo.list(&filter, &page).await?;
    Ok(Json(ApiResponse::ok(products)))
}

/// GET /api/products/{id}
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<ProductDetailResponse>>, ApiError> {
    let product = state
        .product_repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found("Product not found"))?;
    let description = state.product_repo.find_description(id).await?;
    Ok(Json(ApiResponse::ok(ProductDetailResponse::from_parts(
        product,
        description,
    ))))
}

/// POST /api/products (admin)
pub async fn create_product(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Json(req): Json<CreateProductRequest>,
) -> Result<Json<ApiResponse<ProductDetailResponse>>, ApiError> {
    req.validate()?;

    let id = state
        .product_repo
        .create(&CreateProduct {
            model: req.model,
            sku: req.sku,
            quantity: req.quantity,
            stock_status_id: req.stock_status_id,
            image: req.image,
            manufacturer_id: req.manufacturer_id,
            shipping: req.shipping,
            price: req.price,
            status: req.status,
            name: req.name,
            description: req.description,
            meta_title: req.meta_title,
        })
        .await?;

    let product = state
        .product_repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::database("Product vanished after insert"))?;
    let description = state.product_repo.find_description(id).await?;
    Ok(Json(ApiResponse::ok(ProductDetailResponse::from_parts(
        product,
        description,
    ))))
}

/// PUT /api/products/{id} (admin)
pub async fn update_product(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Path(id): Path<i32>,
    Json(req): Json<UpdateProductRequest>,
) -> Result<Json<ApiResponse<ProductDetailResponse>>, ApiError> {
    let product = state
        .product_repo
        .update(
            id,
            &UpdateProduct {
                model: req.model,
                sku: req.sku,
                quantity: req.quantity,
                stock_status_id: req.stock_status_id,
                image: req.image,
                manufacturer_id: req.manufacturer_id,
                shipping: req.shipping,
                price: req.price,
                status: req.status,
                name: req.name,
                description: req.description,
                meta_title: req.meta_title,
            },
        )
        .await?
        .ok_or_else(|| AppError::not_found("Product not found"))?;

    let description = state.product_repo.find_description(id).await?;
    Ok(Json(ApiResponse::ok(ProductDetailResponse::from_parts(
        product,
        description,
    ))))
}

/// DELETE /api/products/{id} (admin)
pub async fn delete_product(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    if !state.product_repo.delete(id).await? {
        return Err(AppError::not_found("Product not found").into());
    }
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Product deleted".to_string(),
    })))
}
