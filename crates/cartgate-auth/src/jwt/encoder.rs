//! JWT token creation with configurable signing and TTL.

use chrono::{DateTime, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};

use cartgate_core::config::auth::AuthConfig;
use cartgate_core::error::AppError;
use cartgate_entity::principal::PrincipalType;

use super::claims::{DisplayClaims, TokenClaims};

/// Creates signed access tokens.
#[derive(Clone)]
pub struct TokenIssuer {
    /// HMAC secret key for signing.
    encoding_key: EncodingKey,
    /// Token TTL in hours.
    ttl_hours: i64,
}

impl std::fmt::Debug for TokenIssuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenIssuer")
            .field("ttl_hours", &self.ttl_hours)
            .finish()
    }
}

/// Result of a successful token issuance.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    /// The signed compact JWT.
    pub token: String,
    /// Absolute expiry of the token.
    pub expires_at: DateTime<Utc>,
}

impl TokenIssuer {
    /// Creates a new issuer from auth configuration.
    ///
    /// The configuration is validated at startup, so the secret is known
    /// to be a real, persistent value here.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            ttl_hours: config.token_ttl_hours as i64,
        }
    }

    /// Issue a token binding a principal ID and type, with display claims.
    pub fn issue(
        &self,
        principal_id: i32,
        principal_type: PrincipalType,
        display: DisplayClaims,
    ) -> Result<IssuedToken, AppError> {
        let now = Utc::now();
        let expires_at = now + chrono::Duration::hours(self.ttl_hours);

        let claims = TokenClaims {
            sub: principal_id,
            principal_type,
            name: display.name,
            email: display.email,
            username: display.username,
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        let token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode access token: {e}")))?;

        Ok(IssuedToken { token, expires_at })
    }
}
