//! The OpenCart password digest, reproduced byte-for-byte.

use sha1::{Digest, Sha1};

use super::PasswordScheme;

/// The legacy storefront scheme: `sha1(salt . sha1(salt . sha1(password)))`,
/// lowercase hex at every stage.
///
/// Weak by modern standards, but every credential row in `oc_customer` and
/// `oc_user` was written this way; changing it would lock out every
/// existing account. New-credential migration belongs behind the
/// [`PasswordScheme`] seam, not here.
#[derive(Debug, Clone, Copy, Default)]
pub struct LegacySha1Scheme;

impl LegacySha1Scheme {
    /// Create a new scheme instance.
    pub fn new() -> Self {
        Self
    }
}

impl PasswordScheme for LegacySha1Scheme {
    fn hash(&self, password: &str, salt: &str) -> String {
        let inner = sha1_hex(password);
        let middle = sha1_hex(&format!("{salt}{inner}"));
        sha1_hex(&format!("{salt}{middle}"))
    }

    fn verify(&self, password: &str, stored_hash: &str, salt: &str) -> bool {
        self.hash(password, salt) == stored_hash
    }
}

/// Lowercase hex SHA-1 of a string.
fn sha1_hex(input: &str) -> String {
    let mut hasher = Sha1::new();
    hasher.update(input.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_storefront_digest() {
        // Digest produced by the PHP storefront for these credentials.
        let scheme = LegacySha1Scheme::new();
        assert_eq!(
            scheme.hash("secret123", "Zb6yt8Qp1"),
            "c096f05789b25d032e3797cad2d1eea76e5be7d6"
        );
        assert_eq!(
            scheme.hash("password", "123456789"),
            "80c4de25714854511d1c78b92b0bb656bef133aa"
        );
    }

    #[test]
    fn test_verify_roundtrip() {
        let scheme = LegacySha1Scheme::new();
        let salt = super::super::generate_salt();
        let hash = scheme.hash("correct horse battery staple", &salt);
        assert!(scheme.verify("correct horse battery staple", &hash, &salt));
    }

    #[test]
    fn test_single_character_mutations_rejected() {
        let scheme = LegacySha1Scheme::new();
        let hash = scheme.hash("secret123", "Zb6yt8Qp1");

        // Wrong password
        assert!(!scheme.verify("secret124", &hash, "Zb6yt8Qp1"));
        // Wrong salt
        assert!(!scheme.verify("secret123", &hash, "Zb6yt8Qp2"));
        // Mutated stored hash
        let mut bad_hash = hash.clone();
        bad_hash.replace_range(0..1, if hash.starts_with('a') { "b" } else { "a" });
        assert!(!scheme.verify("secret123", &bad_hash, "Zb6yt8Qp1"));
    }

    #[test]
    fn test_salt_changes_digest() {
        let scheme = LegacySha1Scheme::new();
        assert_ne!(
            scheme.hash("secret123", "aaaaaaaaa"),
            scheme.hash("secret123", "bbbbbbbbb")
        );
    }
}
