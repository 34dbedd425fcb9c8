//! Request extractors.

pub mod auth;

pub use auth::{AuthAdmin, AuthCustomer, AuthPrincipal, MaybePrincipal};
