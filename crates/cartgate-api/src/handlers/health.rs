//! Health and root handlers.

use axum::Json;
use axum::extract::State;

use crate::dto::response::{HealthResponse, WelcomeResponse};
use crate::state::AppState;

/// GET /
pub async fn welcome() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: "Welcome to the Cartgate storefront API".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// GET /api/health
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let database = cartgate_database::connection::health_check(&state.db_pool)
        .await
        .unwrap_or(false);
    Json(HealthResponse {
        status: if database { "ok" } else { "degraded" }.to_string(),
        database,
    })
}
