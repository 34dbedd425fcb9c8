//! JWT token validation.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use cartgate_core::config::auth::AuthConfig;
use cartgate_core::error::AppError;

use super::claims::TokenClaims;

/// Validates access token strings.
#[derive(Clone)]
pub struct TokenVerifier {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
}

impl std::fmt::Debug for TokenVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenVerifier")
            .field("validation", &self.validation)
            .finish()
    }
}

impl TokenVerifier {
    /// Creates a new verifier from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 5; // 5 seconds leeway for clock skew

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }

    /// Decodes and validates a token string.
    ///
    /// Every failure mode — bad signature, expiry, malformed token — maps
    /// to `Unauthenticated`; the response body never says which it was.
    pub fn decode(&self, token: &str) -> Result<TokenClaims, AppError> {
        let token_data =
            decode::<TokenClaims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                        AppError::unauthenticated("Token has expired")
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                        AppError::unauthenticated("Invalid token signature")
                    }
                    _ => AppError::unauthenticated("Could not validate credentials"),
                }
            })?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jwt::claims::{DisplayClaims, TokenClaims};
    use crate::jwt::encoder::TokenIssuer;
    use cartgate_entity::principal::PrincipalType;
    use chrono::Utc;
    use jsonwebtoken::{EncodingKey, Header, encode};

    fn test_config() -> AuthConfig {
        AuthConfig {
            jwt_secret: "unit-test-signing-secret".to_string(),
            token_ttl_hours: 24,
        }
    }

    #[test]
    fn test_issue_then_decode() {
        let config = test_config();
        let issuer = TokenIssuer::new(&config);
        let verifier = TokenVerifier::new(&config);

        let issued = issuer
            .issue(
                42,
                PrincipalType::Customer,
                DisplayClaims {
                    name: Some("Jane Doe".to_string()),
                    email: Some("jane@example.com".to_string()),
                    username: None,
                },
            )
            .unwrap();

        let claims = verifier.decode(&issued.token).unwrap();
        assert_eq!(claims.sub, 42);
        assert_eq!(claims.principal_type, PrincipalType::Customer);
        assert_eq!(claims.name.as_deref(), Some("Jane Doe"));
        assert_eq!(claims.expires_at(), issued.expires_at);
    }

    #[test]
    fn test_expired_token_rejected_despite_valid_signature() {
        let config = test_config();
        let verifier = TokenVerifier::new(&config);

        // Hand-roll a token signed with the right key but already expired.
        let now = Utc::now().timestamp();
        let claims = TokenClaims {
            sub: 42,
            principal_type: PrincipalType::Customer,
            name: None,
            email: None,
            username: None,
            iat: now - 7200,
            exp: now - 3600,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(config.jwt_secret.as_bytes()),
        )
        .unwrap();

        let err = verifier.decode(&token).unwrap_err();
        assert_eq!(err.kind, cartgate_core::error::ErrorKind::Unauthenticated);
    }

    #[test]
    fn test_wrong_key_rejected() {
        let issuer = TokenIssuer::new(&test_config());
        let other = AuthConfig {
            jwt_secret: "a-different-secret".to_string(),
            token_ttl_hours: 24,
        };
        let verifier = TokenVerifier::new(&other);

        let issued = issuer
            .issue(1, PrincipalType::Admin, DisplayClaims::default())
            .unwrap();
        let err = verifier.decode(&issued.token).unwrap_err();
        assert_eq!(err.kind, cartgate_core::error::ErrorKind::Unauthenticated);
    }

    #[test]
    fn test_garbage_token_rejected() {
        let verifier = TokenVerifier::new(&test_config());
        assert!(verifier.decode("not.a.jwt").is_err());
    }
}
