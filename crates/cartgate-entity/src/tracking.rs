//! Visitor tracking entities (`api_session`, `api_user_activity`).
//!
//! These are the only tables the gateway owns. Sessions are upserted,
//! one row per session identifier; activity records are append-only and
//! never touched again after insertion.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use std::str::FromStr;

use crate::principal::PrincipalType;

/// Device class derived from the User-Agent header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum DeviceType {
    /// Default when nothing else matches (including unparseable agents).
    Desktop,
    /// Phones and other small-screen mobile agents.
    Mobile,
    /// Tablets (iPad, Android tablets, e-readers).
    Tablet,
}

impl DeviceType {
    /// Return the device type as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Desktop => "desktop",
            Self::Mobile => "mobile",
            Self::Tablet => "tablet",
        }
    }
}

impl fmt::Display for DeviceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// What kind of interaction a tracked request represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    /// Any request not matched by a more specific rule.
    Pageview,
    /// Catalog search.
    Search,
    /// A single product detail fetch.
    ProductView,
    /// Cart item added (POST to a cart path).
    AddToCart,
    /// Cart item removed (DELETE to a cart path).
    RemoveFromCart,
    /// Cart item changed (PUT to a cart path).
    UpdateCart,
}

impl EventType {
    /// Return the event type as a snake_case string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pageview => "pageview",
            Self::Search => "search",
            Self::ProductView => "product_view",
            Self::AddToCart => "add_to_cart",
            Self::RemoveFromCart => "remove_from_cart",
            Self::UpdateCart => "update_cart",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for EventType {
    type Err = cartgate_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pageview" => Ok(Self::Pageview),
            "search" => Ok(Self::Search),
            "product_view" => Ok(Self::ProductView),
            "add_to_cart" => Ok(Self::AddToCart),
            "remove_from_cart" => Ok(Self::RemoveFromCart),
            "update_cart" => Ok(Self::UpdateCart),
            _ => Err(cartgate_core::AppError::validation(format!(
                "Invalid event type: '{s}'"
            ))),
        }
    }
}

/// Resolved geographic fields for a client address.
///
/// All fields optional: a failed or skipped lookup leaves them unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeoLocation {
    /// Country code or name.
    pub country: Option<String>,
    /// Region / state.
    pub region: Option<String>,
    /// City.
    pub city: Option<String>,
}

/// One visiting browser/client (`api_session`, keyed by session id).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct VisitorSession {
    /// Opaque session identifier, immutable once created.
    pub session_id: String,
    /// Principal the session belongs to, attached once authenticated.
    pub customer_id: Option<i32>,
    /// Principal type at last sighting.
    pub user_type: PrincipalType,
    /// Client network address.
    pub ip_address: String,
    /// Raw User-Agent string.
    pub user_agent: Option<String>,
    /// First time this session was seen.
    pub first_visit: NaiveDateTime,
    /// Most recent request timestamp.
    pub last_activity: NaiveDateTime,
    /// Number of tracked requests for this session.
    pub visit_count: i32,
    /// Resolved country, if any.
    pub country: Option<String>,
    /// Resolved region, if any.
    pub region: Option<String>,
    /// Resolved city, if any.
    pub city: Option<String>,
    /// Classified device type.
    pub device_type: Option<DeviceType>,
    /// Parsed browser label.
    pub browser: Option<String>,
    /// Parsed operating system label.
    pub os: Option<String>,
    /// Campaign attribution: utm_source.
    pub utm_source: Option<String>,
    /// Campaign attribution: utm_medium.
    pub utm_medium: Option<String>,
    /// Campaign attribution: utm_campaign.
    pub utm_campaign: Option<String>,
    /// Hostname of the referring site on first contact.
    pub referring_site: Option<String>,
}

/// Fields captured when a session is first created.
#[derive(Debug, Clone)]
pub struct NewVisitorSession {
    /// Opaque session identifier.
    pub session_id: String,
    /// Principal id, if the first tracked request was authenticated.
    pub customer_id: Option<i32>,
    /// Principal type.
    pub user_type: PrincipalType,
    /// Client network address.
    pub ip_address: String,
    /// Raw User-Agent string.
    pub user_agent: Option<String>,
    /// Resolved location, if any.
    pub location: GeoLocation,
    /// Classified device type.
    pub device_type: DeviceType,
    /// Parsed browser label.
    pub browser: Option<String>,
    /// Parsed operating system label.
    pub os: Option<String>,
    /// Campaign attribution: utm_source.
    pub utm_source: Option<String>,
    /// Campaign attribution: utm_medium.
    pub utm_medium: Option<String>,
    /// Campaign attribution: utm_campaign.
    pub utm_campaign: Option<String>,
    /// Hostname of the referring site.
    pub referring_site: Option<String>,
}

/// One tracked request (`api_user_activity`, append-only).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ActivityRecord {
    /// Auto-increment primary key.
    pub activity_id: i64,
    /// Owning session identifier.
    pub session_id: String,
    /// Principal id, if authenticated.
    pub customer_id: Option<i32>,
    /// Principal type.
    pub user_type: PrincipalType,
    /// Client network address.
    pub ip_address: String,
    /// Raw User-Agent string.
    pub user_agent: Option<String>,
    /// Full request URL.
    pub url: String,
    /// Referer header, if present.
    pub referer: Option<String>,
    /// Derived page label (last path segment, `"Home"` for the root).
    pub page_title: Option<String>,
    /// Query parameters serialized as JSON.
    pub query_params: Option<String>,
    /// Processing latency in milliseconds.
    pub time_spent: Option<i32>,
    /// Classified event type.
    pub event_type: EventType,
    /// Optional event payload (JSON).
    pub event_data: Option<String>,
    /// Resolved country, if any.
    pub country: Option<String>,
    /// Resolved region, if any.
    pub region: Option<String>,
    /// Resolved city, if any.
    pub city: Option<String>,
    /// Insertion timestamp.
    pub date_added: NaiveDateTime,
}

/// Fields for a new activity record.
#[derive(Debug, Clone)]
pub struct NewActivityRecord {
    /// Owning session identifier.
    pub session_id: String,
    /// Principal id, if authenticated.
    pub customer_id: Option<i32>,
    /// Principal type.
    pub user_type: PrincipalType,
    /// Client network address.
    pub ip_address: String,
    /// Raw User-Agent string.
    pub user_agent: Option<String>,
    /// Full request URL.
    pub url: String,
    /// Referer header, if present.
    pub referer: Option<String>,
    /// Derived page label.
    pub page_title: Option<String>,
    /// Query parameters serialized as JSON.
    pub query_params: Option<String>,
    /// Processing latency in milliseconds.
    pub time_spent: Option<i32>,
    /// Classified event type.
    pub event_type: EventType,
    /// Optional event payload (JSON).
    pub event_data: Option<String>,
    /// Resolved location, if any.
    pub location: GeoLocation,
}

/// Aggregated view counts per page, for the analytics endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PageStats {
    /// Page label the views were grouped by.
    pub page_title: Option<String>,
    /// Full URL of one representative request.
    pub url: String,
    /// Number of tracked views.
    pub views: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_type_roundtrip() {
        for e in [
            EventType::Pageview,
            EventType::Search,
            EventType::ProductView,
            EventType::AddToCart,
            EventType::RemoveFromCart,
            EventType::UpdateCart,
        ] {
            assert_eq!(e.as_str().parse::<EventType>().unwrap(), e);
        }
    }

    #[test]
    fn test_geo_location_default_is_unset() {
        let geo = GeoLocation::default();
        assert!(geo.country.is_none() && geo.region.is_none() && geo.city.is_none());
    }
}
