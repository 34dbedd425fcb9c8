//! Analytics handlers — admin-only read models over the tracking tables.

use axum::Json;
use axum::extract::{Query, State};
use chrono::{Duration, Utc};

use crate::dto::request::AnalyticsWindowQuery;
use crate::dto::response::{
    ApiResponse, OnlineUsersResponse, OnlineVisitorResponse, PopularPagesResponse,
    VisitorStatsResponse,
};
use crate::error::ApiError;
use crate::extractors::AuthAdmin;
use crate::state::AppState;

/// GET /api/analytics/online-users (admin)
pub async fn online_users(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Query(query): Query<AnalyticsWindowQuery>,
) -> Result<Json<ApiResponse<OnlineUsersResponse>>, ApiError> {
    let since = (Utc::now() - Duration::minutes(query.minutes)).naive_utc();
    let sessions = state.tracking_repo.online_sessions(since).await?;
    let visitors: Vec<OnlineVisitorResponse> = sessions
        .into_iter()
        .map(OnlineVisitorResponse::from)
        .collect();
    Ok(Json(ApiResponse::ok(OnlineUsersResponse {
        count: visitors.len(),
        visitors,
    })))
}

/// GET /api/analytics/stats/visitor-count (admin)
pub async fn visitor_count(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Query(query): Query<AnalyticsWindowQuery>,
) -> Result<Json<ApiResponse<VisitorStatsResponse>>, ApiError> {
    let since = (Utc::now() - Duration::days(query.days)).naive_utc();
    let sessions = state.tracking_repo.count_sessions_since(since).await?;
    let activity_records = state.tracking_repo.count_activity_since(since).await?;
    Ok(Json(ApiResponse::ok(VisitorStatsResponse {
        window_days: query.days,
        sessions,
        activity_records,
    })))
}

/// GET /api/analytics/stats/popular-pages (admin)
pub async fn popular_pages(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Query(query): Query<AnalyticsWindowQuery>,
) -> Result<Json<ApiResponse<PopularPagesResponse>>, ApiError> {
    let since = (Utc::now() - Duration::days(query.days)).naive_utc();
    let pages = state.tracking_repo.popular_pages(since, query.limit).await?;
    Ok(Json(ApiResponse::ok(PopularPagesResponse {
        window_days: query.days,
        pages,
    })))
}
