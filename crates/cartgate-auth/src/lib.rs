//! # cartgate-auth
//!
//! Credential verification and bearer token authentication.
//!
//! Password verification reproduces the legacy OpenCart scheme exactly so
//! that credentials stored by the storefront keep working. Tokens are
//! stateless HS256 JWTs; validity is a pure function of signature, expiry,
//! and claims — nothing is stored server-side and nothing can be revoked
//! before expiry.

pub mod jwt;
pub mod password;
pub mod service;
pub mod store;

pub use jwt::{TokenClaims, TokenIssuer, TokenVerifier};
pub use password::{LegacySha1Scheme, PasswordScheme};
pub use service::{AuthService, RequiredPrincipal};
pub use store::PrincipalStore;
