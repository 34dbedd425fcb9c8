//! Geolocation provider trait.

use std::net::IpAddr;

use async_trait::async_trait;

use cartgate_core::result::AppResult;
use cartgate_entity::tracking::GeoLocation;

/// Resolves a client address to geographic fields.
///
/// Injected into the tracker at construction so tests can substitute a
/// fake and assert on hit/miss behavior without touching the network.
#[async_trait]
pub trait GeoProvider: Send + Sync + std::fmt::Debug {
    /// Look up an address. An unresolvable address is not an error: the
    /// provider may return an empty [`GeoLocation`].
    async fn lookup(&self, ip: &str) -> AppResult<GeoLocation>;
}

/// Whether an address should never be sent to the lookup service:
/// loopback, RFC 1918 private ranges, link-local, and anything that does
/// not parse as an IP address at all.
pub fn is_private_address(ip: &str) -> bool {
    match ip.parse::<IpAddr>() {
        Ok(IpAddr::V4(v4)) => {
            v4.is_loopback() || v4.is_private() || v4.is_link_local() || v4.is_unspecified()
        }
        Ok(IpAddr::V6(v6)) => v6.is_loopback() || v6.is_unspecified() || is_unique_local_v6(&v6),
        Err(_) => true,
    }
}

// fc00::/7
fn is_unique_local_v6(v6: &std::net::Ipv6Addr) -> bool {
    (v6.segments()[0] & 0xfe00) == 0xfc00
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_private_addresses_detected() {
        assert!(is_private_address("127.0.0.1"));
        assert!(is_private_address("10.1.2.3"));
        assert!(is_private_address("192.168.0.10"));
        assert!(is_private_address("::1"));
        assert!(is_private_address("fd00::1"));
        assert!(is_private_address("localhost"));
    }

    #[test]
    fn test_public_addresses_pass() {
        assert!(!is_private_address("93.184.216.34"));
        assert!(!is_private_address("2606:2800:220:1::1"));
    }
}
