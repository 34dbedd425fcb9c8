//! The auth service: credentials in, tokens out; tokens in, principals out.

use std::sync::Arc;

use cartgate_core::error::AppError;
use cartgate_core::result::AppResult;
use cartgate_entity::customer::Customer;
use cartgate_entity::principal::{Principal, PrincipalType};
use cartgate_entity::user::AdminUser;

use crate::jwt::claims::{DisplayClaims, TokenClaims};
use crate::jwt::encoder::{IssuedToken, TokenIssuer};
use crate::jwt::decoder::TokenVerifier;
use crate::password::PasswordScheme;
use crate::store::PrincipalStore;

/// Message for every credential failure. One string for every cause:
/// the response must not reveal whether the account exists.
const BAD_CREDENTIALS: &str = "Could not validate credentials";

/// Which principal type an endpoint accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredPrincipal {
    /// Only customers.
    Customer,
    /// Only admins.
    Admin,
    /// Either known type.
    Any,
}

/// Verifies credentials, issues tokens, and resolves tokens to principals.
#[derive(Debug, Clone)]
pub struct AuthService {
    store: Arc<dyn PrincipalStore>,
    scheme: Arc<dyn PasswordScheme>,
    issuer: TokenIssuer,
    verifier: TokenVerifier,
}

impl AuthService {
    /// Create a new auth service.
    pub fn new(
        store: Arc<dyn PrincipalStore>,
        scheme: Arc<dyn PasswordScheme>,
        issuer: TokenIssuer,
        verifier: TokenVerifier,
    ) -> Self {
        Self {
            store,
            scheme,
            issuer,
            verifier,
        }
    }

    /// Authenticate a customer by email and password.
    pub async fn login_customer(
        &self,
        email: &str,
        password: &str,
    ) -> AppResult<(IssuedToken, Customer)> {
        let customer = self
            .store
            .find_customer_by_email(email)
            .await?
            .ok_or_else(|| AppError::unauthenticated(BAD_CREDENTIALS))?;

        if !self
            .scheme
            .verify(password, &customer.password, &customer.salt)
        {
            return Err(AppError::unauthenticated(BAD_CREDENTIALS));
        }

        let issued = self.issuer.issue(
            customer.customer_id,
            PrincipalType::Customer,
            DisplayClaims {
                name: Some(customer.display_name()),
                email: Some(customer.email.clone()),
                username: None,
            },
        )?;
        Ok((issued, customer))
    }

    /// Authenticate an admin by username and password.
    pub async fn login_admin(
        &self,
        username: &str,
        password: &str,
    ) -> AppResult<(IssuedToken, AdminUser)> {
        let admin = self
            .store
            .find_admin_by_username(username)
            .await?
            .ok_or_else(|| AppError::unauthenticated(BAD_CREDENTIALS))?;

        if !self.scheme.verify(password, &admin.password, &admin.salt) {
            return Err(AppError::unauthenticated(BAD_CREDENTIALS));
        }

        let issued = self.issuer.issue(
            admin.user_id,
            PrincipalType::Admin,
            DisplayClaims {
                name: None,
                email: Some(admin.email.clone()),
                username: Some(admin.username.clone()),
            },
        )?;
        Ok((issued, admin))
    }

    /// Decode a token without loading the principal.
    ///
    /// Used on the tracking path, where only the claims are needed and a
    /// storage round-trip per request would be waste.
    pub fn decode(&self, token: &str) -> AppResult<TokenClaims> {
        self.verifier.decode(token)
    }

    /// Resolve a token to a live principal of the required type.
    ///
    /// A token for a principal that no longer exists fails exactly like a
    /// bad token.
    pub async fn resolve(&self, token: &str, required: RequiredPrincipal) -> AppResult<Principal> {
        let claims = self.verifier.decode(token)?;

        let type_ok = match (required, claims.principal_type) {
            (RequiredPrincipal::Customer, PrincipalType::Customer) => true,
            (RequiredPrincipal::Admin, PrincipalType::Admin) => true,
            (RequiredPrincipal::Any, PrincipalType::Customer | PrincipalType::Admin) => true,
            _ => false,
        };
        if !type_ok {
            return Err(AppError::unauthenticated(BAD_CREDENTIALS));
        }

        match claims.principal_type {
            PrincipalType::Customer => self
                .store
                .find_customer(claims.sub)
                .await?
                .map(Principal::Customer)
                .ok_or_else(|| AppError::unauthenticated(BAD_CREDENTIALS)),
            PrincipalType::Admin => self
                .store
                .find_admin(claims.sub)
                .await?
                .map(Principal::Admin)
                .ok_or_else(|| AppError::unauthenticated(BAD_CREDENTIALS)),
            PrincipalType::Guest => Err(AppError::unauthenticated(BAD_CREDENTIALS)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use cartgate_core::config::auth::AuthConfig;
    use cartgate_core::error::ErrorKind;
    use chrono::Utc;

    use crate::password::LegacySha1Scheme;

    /// In-memory principal store with one customer and one admin.
    #[derive(Debug, Default)]
    struct MemoryStore {
        customer: Option<Customer>,
        admin: Option<AdminUser>,
    }

    #[async_trait]
    impl PrincipalStore for MemoryStore {
        async fn find_customer(&self, id: i32) -> AppResult<Option<Customer>> {
            Ok(self
                .customer
                .clone()
                .filter(|c| c.customer_id == id))
        }

        async fn find_customer_by_email(&self, email: &str) -> AppResult<Option<Customer>> {
            Ok(self.customer.clone().filter(|c| c.email == email))
        }

        async fn find_admin(&self, id: i32) -> AppResult<Option<AdminUser>> {
            Ok(self.admin.clone().filter(|a| a.user_id == id))
        }

        async fn find_admin_by_username(&self, username: &str) -> AppResult<Option<AdminUser>> {
            Ok(self.admin.clone().filter(|a| a.username == username))
        }
    }

    fn test_customer(scheme: &LegacySha1Scheme) -> Customer {
        let salt = "Zb6yt8Qp1".to_string();
        Customer {
            customer_id: 42,
            customer_group_id: 1,
            store_id: 0,
            firstname: "Jane".to_string(),
            lastname: "Doe".to_string(),
            email: "jane@example.com".to_string(),
            telephone: "555-0100".to_string(),
            password: scheme.hash("secret123", &salt),
            salt,
            newsletter: false,
            status: true,
            ip: "127.0.0.1".to_string(),
            date_added: Utc::now().naive_utc(),
        }
    }

    fn test_admin(scheme: &LegacySha1Scheme) -> AdminUser {
        let salt = "123456789".to_string();
        AdminUser {
            user_id: 7,
            user_group_id: 1,
            username: "admin".to_string(),
            firstname: "Site".to_string(),
            lastname: "Owner".to_string(),
            email: "admin@example.com".to_string(),
            password: scheme.hash("password", &salt),
            salt,
            status: true,
            date_added: Utc::now().naive_utc(),
        }
    }

    fn build_service(store: MemoryStore) -> AuthService {
        let config = AuthConfig {
            jwt_secret: "unit-test-signing-secret".to_string(),
            token_ttl_hours: 24,
        };
        AuthService::new(
            Arc::new(store),
            Arc::new(LegacySha1Scheme::new()),
            TokenIssuer::new(&config),
            TokenVerifier::new(&config),
        )
    }

    #[tokio::test]
    async fn test_login_and_resolve_customer() {
        let scheme = LegacySha1Scheme::new();
        let service = build_service(MemoryStore {
            customer: Some(test_customer(&scheme)),
            admin: None,
        });

        let (issued, customer) = service
            .login_customer("jane@example.com", "secret123")
            .await
            .unwrap();
        assert_eq!(customer.customer_id, 42);

        let principal = service
            .resolve(&issued.token, RequiredPrincipal::Customer)
            .await
            .unwrap();
        assert_eq!(principal.id(), 42);
        assert_eq!(principal.principal_type(), PrincipalType::Customer);
    }

    #[tokio::test]
    async fn test_customer_token_rejected_for_admin_endpoint() {
        let scheme = LegacySha1Scheme::new();
        let service = build_service(MemoryStore {
            customer: Some(test_customer(&scheme)),
            admin: None,
        });

        let (issued, _) = service
            .login_customer("jane@example.com", "secret123")
            .await
            .unwrap();
        let err = service
            .resolve(&issued.token, RequiredPrincipal::Admin)
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Unauthenticated);
    }

    #[tokio::test]
    async fn test_any_accepts_both_types() {
        let scheme = LegacySha1Scheme::new();
        let service = build_service(MemoryStore {
            customer: Some(test_customer(&scheme)),
            admin: Some(test_admin(&scheme)),
        });

        let (customer_token, _) = service
            .login_customer("jane@example.com", "secret123")
            .await
            .unwrap();
        let (admin_token, _) = service.login_admin("admin", "password").await.unwrap();

        assert!(
            service
                .resolve(&customer_token.token, RequiredPrincipal::Any)
                .await
                .is_ok()
        );
        assert!(
            service
                .resolve(&admin_token.token, RequiredPrincipal::Any)
                .await
                .is_ok()
        );
    }

    #[tokio::test]
    async fn test_wrong_password_and_unknown_email_look_identical() {
        let scheme = LegacySha1Scheme::new();
        let service = build_service(MemoryStore {
            customer: Some(test_customer(&scheme)),
            admin: None,
        });

        let wrong_password = service
            .login_customer("jane@example.com", "nope")
            .await
            .unwrap_err();
        let unknown_email = service
            .login_customer("nobody@example.com", "secret123")
            .await
            .unwrap_err();

        assert_eq!(wrong_password.kind, ErrorKind::Unauthenticated);
        assert_eq!(unknown_email.kind, ErrorKind::Unauthenticated);
        assert_eq!(wrong_password.message, unknown_email.message);
    }

    #[tokio::test]
    async fn test_deleted_principal_is_unauthenticated_not_not_found() {
        let scheme = LegacySha1Scheme::new();
        let service = build_service(MemoryStore {
            customer: Some(test_customer(&scheme)),
            admin: None,
        });
        let (issued, _) = service
            .login_customer("jane@example.com", "secret123")
            .await
            .unwrap();

        // Same secret, empty store: the principal is gone.
        let service = build_service(MemoryStore::default());
        let err = service
            .resolve(&issued.token, RequiredPrincipal::Customer)
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Unauthenticated);
    }
}
