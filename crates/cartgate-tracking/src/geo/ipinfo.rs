//! HTTP geolocation client (ipinfo.io wire format).

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use cartgate_core::config::tracking::TrackingConfig;
use cartgate_core::error::AppError;
use cartgate_core::result::AppResult;
use cartgate_entity::tracking::GeoLocation;

use super::provider::GeoProvider;

/// Client for the `https://ipinfo.io/{ip}/json` lookup endpoint.
///
/// The request timeout is fixed and short: an unbounded hang on a
/// third-party call would stall the owning request's tracking step.
#[derive(Debug, Clone)]
pub struct IpinfoClient {
    client: reqwest::Client,
    endpoint: String,
}

/// Subset of the lookup response the tracker cares about.
#[derive(Debug, Deserialize)]
struct IpinfoResponse {
    country: Option<String>,
    region: Option<String>,
    city: Option<String>,
}

impl IpinfoClient {
    /// Create a client from tracking configuration.
    pub fn new(config: &TrackingConfig) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.geo_timeout_seconds))
            .build()
            .map_err(|e| {
                AppError::external_service(format!("Failed to build geolocation client: {e}"))
            })?;
        Ok(Self {
            client,
            endpoint: config.geo_endpoint.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl GeoProvider for IpinfoClient {
    async fn lookup(&self, ip: &str) -> AppResult<GeoLocation> {
        let url = format!("{}/{ip}/json", self.endpoint);
        let response = self.client.get(&url).send().await.map_err(|e| {
            AppError::external_service(format!("Geolocation lookup failed: {e}"))
        })?;

        if !response.status().is_success() {
            return Err(AppError::external_service(format!(
                "Geolocation lookup returned {}",
                response.status()
            )));
        }

        let body: IpinfoResponse = response.json().await.map_err(|e| {
            AppError::external_service(format!("Geolocation response unreadable: {e}"))
        })?;

        Ok(GeoLocation {
            country: body.country,
            region: body.region,
            city: body.city,
        })
    }
}
