//! Database migration runner.
//!
//! Only the gateway-owned tracking tables are migrated. The OpenCart
//! schema is owned by the storefront and must never be altered here.

use sqlx::MySqlPool;
use tracing::info;

use cartgate_core::error::{AppError, ErrorKind};

/// Run all pending migrations for the gateway-owned tables.
pub async fn run_migrations(pool: &MySqlPool) -> Result<(), AppError> {
    info!("Running database migrations...");

    sqlx::migrate!("../../migrations")
        .run(pool)
        .await
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                format!("Failed to run migrations: {e}"),
                e,
            )
        })?;

    info!("Database migrations completed successfully");
    Ok(())
}
