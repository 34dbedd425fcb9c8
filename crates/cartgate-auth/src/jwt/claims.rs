//! JWT claims structure used in access tokens.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use cartgate_entity::principal::PrincipalType;

/// JWT claims payload embedded in every access token.
///
/// The wire field names (`sub`, `type`) match what the gateway has always
/// issued, so tokens minted before a deploy keep validating after it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Subject — the numeric principal ID (`oc_customer` or `oc_user`).
    pub sub: i32,
    /// Principal type the token was issued for.
    #[serde(rename = "type")]
    pub principal_type: PrincipalType,
    /// Display name, if supplied at issuance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Email, if supplied at issuance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Username, if supplied at issuance (admins).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}

/// Caller-supplied display claims carried alongside the subject.
#[derive(Debug, Clone, Default)]
pub struct DisplayClaims {
    /// Display name.
    pub name: Option<String>,
    /// Email.
    pub email: Option<String>,
    /// Username.
    pub username: Option<String>,
}

impl TokenClaims {
    /// Returns the expiration as a `DateTime<Utc>`.
    pub fn expires_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.exp, 0).unwrap_or_else(Utc::now)
    }

    /// Checks whether this token has expired.
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}
