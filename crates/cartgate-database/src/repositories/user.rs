//! Admin user repository implementation.

use sqlx::MySqlPool;

use cartgate_core::error::{AppError, ErrorKind};
use cartgate_core::result::AppResult;
use cartgate_entity::user::AdminUser;

const USER_COLUMNS: &str =
    "user_id, user_group_id, username, firstname, lastname, email, password, salt, status, \
     date_added";

/// Repository for back-office admin accounts. Read-only: admin accounts
/// are managed through the OpenCart admin panel, not this gateway.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: MySqlPool,
}

impl UserRepository {
    /// Create a new admin user repository.
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Find an admin by ID.
    pub async fn find_by_id(&self, id: i32) -> AppResult<Option<AdminUser>> {
        sqlx::query_as::<_, AdminUser>(&format!(
            "SELECT {USER_COLUMNS} FROM oc_user WHERE user_id = ?"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find admin user", e))
    }

    /// Find an admin by login username.
    pub async fn find_by_username(&self, username: &str) -> AppResult<Option<AdminUser>> {
        sqlx::query_as::<_, AdminUser>(&format!(
            "SELECT {USER_COLUMNS} FROM oc_user WHERE username = ?"
        ))
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to find admin by username", e)
        })
    }
}
