//! Authentication configuration.

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Placeholder value shipped in `config/default.toml`; rejected at startup.
const PLACEHOLDER_SECRET: &str = "CHANGE_ME_IN_PRODUCTION";

/// Authentication and token configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for JWT signing (HMAC-SHA256).
    ///
    /// Must be explicitly configured. There is no random fallback: a key
    /// generated at startup would invalidate every outstanding token on
    /// each restart.
    #[serde(default)]
    pub jwt_secret: String,
    /// Access token TTL in hours.
    #[serde(default = "default_token_ttl")]
    pub token_ttl_hours: u64,
}

impl AuthConfig {
    /// Reject missing or placeholder signing keys at startup.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.jwt_secret.is_empty() || self.jwt_secret == PLACEHOLDER_SECRET {
            return Err(AppError::configuration(
                "auth.jwt_secret must be set to a persistent secret (CARTGATE_AUTH__JWT_SECRET)",
            ));
        }
        Ok(())
    }
}

fn default_token_ttl() -> u64 {
    24
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_secret_rejected() {
        let config = AuthConfig {
            jwt_secret: String::new(),
            token_ttl_hours: 24,
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_placeholder_secret_rejected() {
        let config = AuthConfig {
            jwt_secret: PLACEHOLDER_SECRET.to_string(),
            token_ttl_hours: 24,
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_configured_secret_accepted() {
        let config = AuthConfig {
            jwt_secret: "a-long-persistent-secret".to_string(),
            token_ttl_hours: 24,
        };
        assert!(config.validate().is_ok());
    }
}
