//! Visitor tracking configuration.

use serde::{Deserialize, Serialize};

/// Request tracking and geolocation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackingConfig {
    /// Path prefixes that are never recorded (static assets, API docs).
    #[serde(default = "default_excluded_prefixes")]
    pub excluded_prefixes: Vec<String>,
    /// Name of the session cookie.
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
    /// Session cookie lifetime in days.
    #[serde(default = "default_cookie_max_age_days")]
    pub cookie_max_age_days: u64,
    /// Whether to resolve client addresses to a location.
    #[serde(default = "default_true")]
    pub geo_enabled: bool,
    /// Base URL of the IP geolocation service.
    #[serde(default = "default_geo_endpoint")]
    pub geo_endpoint: String,
    /// Timeout for a single geolocation lookup, in seconds.
    #[serde(default = "default_geo_timeout")]
    pub geo_timeout_seconds: u64,
}

impl Default for TrackingConfig {
    fn default() -> Self {
        Self {
            excluded_prefixes: default_excluded_prefixes(),
            cookie_name: default_cookie_name(),
            cookie_max_age_days: default_cookie_max_age_days(),
            geo_enabled: true,
            geo_endpoint: default_geo_endpoint(),
            geo_timeout_seconds: default_geo_timeout(),
        }
    }
}

fn default_excluded_prefixes() -> Vec<String> {
    ["/static/", "/api-docs", "/openapi.json"]
        .iter()
        .map(|p| p.to_string())
        .collect()
}

fn default_cookie_name() -> String {
    "session_id".to_string()
}

fn default_cookie_max_age_days() -> u64 {
    30
}

fn default_geo_endpoint() -> String {
    "https://ipinfo.io".to_string()
}

fn default_geo_timeout() -> u64 {
    2
}

fn default_true() -> bool {
    true
}
