//! Category handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use validator::Validate;

use cartgate_core::error::AppError;
use cartgate_core::types::pagination::{PageRequest, PageResponse};
use cartgate_entity::category::{CategorySummary, CreateCategory, UpdateCategory};

use crate::dto::request::{CategoryListQuery, CreateCategoryRequest, UpdateCategoryRequest};
use crate::dto::response::{ApiResponse, CategoryDetailResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::AuthAdmin;
use crate::state::AppState;

/// GET /api/categories
pub async fn list_categories(
    State(state): State<AppState>,
    Query(query): Query<CategoryListQuery>,
) -> Result<Json<ApiResponse<PageResponse<CategorySummary>>>, ApiError> {
    let page = PageRequest::new(query.page.unwrap_or(1), query.page_size.unwrap_or(25));
    let categories = state.category_repo.list(query.parent_id, &page).await?;
    Ok(Json(ApiResponse::ok(categories)))
}

/// GET /api/categories/{id}
pub async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<CategoryDetailResponse>>, ApiError> {
    let category = state
        .category_repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found("Category not found"))?;
    let description = state.category_repo.find_description(id).await?;
    Ok(Json(ApiResponse::ok(CategoryDetailResponse::from_parts(
        category,
        description,
    ))))
}

/// POST /api/categories (admin)
pub async fn create_category(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Json(req): Json<CreateCategoryRequest>,
) -> Result<Json<ApiResponse<CategoryDetailResponse>>, ApiError> {
    req.validate()?;

    let id = state
        .category_repo
        .create(&CreateCategory {
            parent_id: req.parent_id,
            image: req.image,
            sort_order: req.sort_order,
            status: req.status,
            name: req.name,
            description: req.description,
        })
        .await?;

    let category = state
        .category_repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::database("Category vanished after insert"))?;
    let description = state.category_repo.find_description(id).await?;
    Ok(Json(ApiResponse::ok(CategoryDetailResponse::from_parts(
        category,
        description,
    ))))
}

/// PUT /api/categories/{id} (admin)
pub async fn update_category(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Path(id): Path<i32>,
    Json(req): Json<UpdateCategoryRequest>,
) -> Result<Json<ApiResponse<CategoryDetailResponse>>, ApiError> {
    let category = state
        .category_repo
        .update(
            id,
            &UpdateCategory {
                parent_id: req.parent_id,
                image: req.image,
                sort_order: req.sort_order,
                status: req.status,
                name: req.name,
                description: req.description,
            },
        )
        .await?
        .ok_or_else(|| AppError::not_found("Category not found"))?;

    let description = state.category_repo.find_description(id).await?;
    Ok(Json(ApiResponse::ok(CategoryDetailResponse::from_parts(
        category,
        description,
    ))))
}

/// DELETE /api/categories/{id} (admin)
pub async fn delete_category(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    if !state.category_repo.delete(id).await? {
        return Err(AppError::not_found("Category not found").into());
    }
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Category deleted".to_string(),
    })))
}
