//! Admin user entity (`oc_user`).

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A back-office admin account.
///
/// Shares the legacy credential scheme with [`crate::customer::Customer`]
/// but lives in a separate table with a separate authorization scope.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AdminUser {
    /// Primary key.
    pub user_id: i32,
    /// Permission group.
    pub user_group_id: i32,
    /// Login username.
    pub username: String,
    /// First name.
    pub firstname: String,
    /// Last name.
    pub lastname: String,
    /// Contact email.
    pub email: String,
    /// Legacy password digest (40 hex chars).
    #[serde(skip_serializing)]
    pub password: String,
    /// Salt the digest was computed with (9 chars).
    #[serde(skip_serializing)]
    pub salt: String,
    /// Whether the account is enabled.
    pub status: bool,
    /// Creation timestamp.
    pub date_added: NaiveDateTime,
}
