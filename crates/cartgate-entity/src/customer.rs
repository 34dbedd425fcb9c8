//! Customer entity (`oc_customer`).

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A storefront customer account.
///
/// `password` holds the legacy OpenCart triple-SHA1 digest and `salt` the
/// 9-character salt it was computed with. Both stay server-side; response
/// DTOs never include them.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Customer {
    /// Primary key.
    pub customer_id: i32,
    /// Customer group (pricing tier) the account belongs to.
    pub customer_group_id: i32,
    /// Store the account was registered on (0 = default).
    pub store_id: i32,
    /// First name.
    pub firstname: String,
    /// Last name.
    pub lastname: String,
    /// Login email, unique per store.
    pub email: String,
    /// Contact phone number.
    pub telephone: String,
    /// Legacy password digest (40 hex chars).
    #[serde(skip_serializing)]
    pub password: String,
    /// Salt the digest was computed with (9 chars).
    #[serde(skip_serializing)]
    pub salt: String,
    /// Newsletter opt-in flag.
    pub newsletter: bool,
    /// Whether the account is enabled.
    pub status: bool,
    /// IP the account was registered from.
    pub ip: String,
    /// Registration timestamp.
    pub date_added: NaiveDateTime,
}

impl Customer {
    /// Full display name.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.firstname, self.lastname)
    }
}
