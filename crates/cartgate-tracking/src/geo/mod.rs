//! IP geolocation: provider trait, HTTP client, and caching wrapper.

pub mod cache;
pub mod ipinfo;
pub mod provider;

pub use cache::CachedGeoProvider;
pub use ipinfo::IpinfoClient;
pub use provider::{GeoProvider, is_private_address};
