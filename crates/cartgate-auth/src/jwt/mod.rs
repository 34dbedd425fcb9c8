//! JWT token encoding, decoding, and claims.

pub mod claims;
pub mod decoder;
pub mod encoder;

pub use claims::{DisplayClaims, TokenClaims};
pub use decoder::TokenVerifier;
pub use encoder::{IssuedToken, TokenIssuer};
