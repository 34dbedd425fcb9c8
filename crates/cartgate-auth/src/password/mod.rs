//! Password hashing behind a scheme seam.
//!
//! The trait exists so a stronger algorithm can be swapped in for newly
//! created credentials without touching any call site; every credential
//! currently in the database uses [`LegacySha1Scheme`].

pub mod legacy;

pub use legacy::LegacySha1Scheme;

use rand::Rng;
use rand::distr::Alphanumeric;

/// Salt width used by the storefront schema (`oc_customer.salt` is char(9)).
const SALT_LENGTH: usize = 9;

/// A salted password hashing scheme.
pub trait PasswordScheme: Send + Sync + std::fmt::Debug {
    /// Compute the stored digest for a plaintext password and salt.
    fn hash(&self, password: &str, salt: &str) -> String;

    /// Check a plaintext password against a stored digest and salt.
    fn verify(&self, password: &str, stored_hash: &str, salt: &str) -> bool;
}

/// Generate a new 9-character alphanumeric salt.
pub fn generate_salt() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(SALT_LENGTH)
        .map(char::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_salt_shape() {
        let salt = generate_salt();
        assert_eq!(salt.len(), SALT_LENGTH);
        assert!(salt.chars().all(|c| c.is_ascii_alphanumeric()));
    }
}
