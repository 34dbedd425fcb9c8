//! The request tracker: observe, classify, and durably log every inbound
//! request without ever altering its outcome.

use std::sync::Arc;
use std::time::Duration;

use uuid::Uuid;

use cartgate_core::config::tracking::TrackingConfig;
use cartgate_core::result::AppResult;
use cartgate_entity::principal::PrincipalType;
use cartgate_entity::tracking::{GeoLocation, NewActivityRecord, NewVisitorSession};

use crate::classifier;
use crate::device;
use crate::geo::{GeoProvider, is_private_address};
use crate::store::TrackingStore;

/// Snapshot of one request, extracted by the HTTP layer before calling in.
///
/// The principal is NOT part of the capture: it arrives as an explicit
/// argument to [`RequestTracker::track`], resolved upstream from the
/// bearer token, never read from ambient request state.
#[derive(Debug, Clone)]
pub struct RequestCapture {
    /// HTTP method name.
    pub method: String,
    /// Request path.
    pub path: String,
    /// Full request URL.
    pub url: String,
    /// Client network address.
    pub ip_address: String,
    /// User-Agent header, if present.
    pub user_agent: Option<String>,
    /// Referer header, if present.
    pub referer: Option<String>,
    /// Session identifier from the cookie, or freshly generated.
    pub session_id: String,
}

impl RequestCapture {
    /// Decoded query pairs of the request URL.
    fn query_pairs(&self) -> Vec<(String, String)> {
        reqwest::Url::parse(&self.url)
            .map(|url| {
                url.query_pairs()
                    .map(|(k, v)| (k.into_owned(), v.into_owned()))
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Generate a fresh random session identifier.
pub fn new_session_id() -> String {
    Uuid::new_v4().to_string()
}

/// Observes every inbound request and logs one session upsert plus one
/// activity record, best-effort.
#[derive(Debug, Clone)]
pub struct RequestTracker {
    store: Arc<dyn TrackingStore>,
    geo: Arc<dyn GeoProvider>,
    config: TrackingConfig,
}

impl RequestTracker {
    /// Create a tracker over the given store and geolocation provider.
    pub fn new(
        store: Arc<dyn TrackingStore>,
        geo: Arc<dyn GeoProvider>,
        config: TrackingConfig,
    ) -> Self {
        Self { store, geo, config }
    }

    /// Whether a path is excluded from tracking entirely.
    pub fn is_excluded(&self, path: &str) -> bool {
        self.config
            .excluded_prefixes
            .iter()
            .any(|prefix| path.starts_with(prefix.as_str()))
    }

    /// Track one completed request.
    ///
    /// Never returns an error and never panics on bad input: any failure
    /// in enrichment or persistence is logged and swallowed, because
    /// tracking must not block or fail the response path.
    pub async fn track(
        &self,
        capture: RequestCapture,
        principal: Option<(i32, PrincipalType)>,
        elapsed: Duration,
    ) {
        if self.is_excluded(&capture.path) {
            return;
        }
        if let Err(e) = self.record(capture, principal, elapsed).await {
            tracing::warn!(error = %e, "Request tracking failed; response unaffected");
        }
    }

    async fn record(
        &self,
        capture: RequestCapture,
        principal: Option<(i32, PrincipalType)>,
        elapsed: Duration,
    ) -> AppResult<()> {
        let event_type = classifier::classify_event(&capture.method, &capture.path);
        let page_title = classifier::page_title(&capture.path);

        let query = capture.query_pairs();
        let utm = classifier::extract_utm(&query);
        let query_params = if query.is_empty() {
            None
        } else {
            let map: serde_json::Map<String, serde_json::Value> = query
                .iter()
                .map(|(k, v)| (k.clone(), serde_json::Value::String(v.clone())))
                .collect();
            Some(serde_json::Value::Object(map).to_string())
        };

        let referring_site = capture
            .referer
            .as_deref()
            .and_then(classifier::referer_host);

        let user_agent = capture.user_agent.as_deref().unwrap_or_default();
        let device_type = device::classify_device(user_agent);
        let browser = device::parse_browser(user_agent);
        let os = device::parse_os(user_agent);

        let location = self.resolve_location(&capture.ip_address).await;

        let (customer_id, user_type) = match principal {
            Some((id, ptype)) => (Some(id), ptype),
            None => (None, PrincipalType::Guest),
        };

        let touched = self
            .store
            .touch_session(&capture.session_id, principal)
            .await?;
        if !touched {
            self.store
                .create_session(&NewVisitorSession {
                    session_id: capture.session_id.clone(),
                    customer_id,
                    user_type,
                    ip_address: capture.ip_address.clone(),
                    user_agent: capture.user_agent.clone(),
                    location: location.clone(),
                    device_type,
                    browser,
                    os,
                    utm_source: utm.source,
                    utm_medium: utm.medium,
                    utm_campaign: utm.campaign,
                    referring_site,
                })
                .await?;
        }

        self.store
            .record_activity(&NewActivityRecord {
                session_id: capture.session_id,
                customer_id,
                user_type,
                ip_address: capture.ip_address,
                user_agent: capture.user_agent,
                url: capture.url,
                referer: capture.referer,
                page_title: Some(page_title),
                query_params,
                time_spent: Some(elapsed.as_millis().min(i32::MAX as u128) as i32),
                event_type,
                event_data: None,
                location,
            })
            .await
    }

    /// Resolve the client address, degrading to empty fields on any
    /// failure or for private/loopback addresses.
    async fn resolve_location(&self, ip: &str) -> GeoLocation {
        if !self.config.geo_enabled || is_private_address(ip) {
            return GeoLocation::default();
        }
        match self.geo.lookup(ip).await {
            Ok(location) => location,
            Err(e) => {
                tracing::debug!(ip, error = %e, "Geolocation unavailable");
                GeoLocation::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;

    use cartgate_core::error::AppError;
    use cartgate_entity::tracking::EventType;

    #[derive(Debug, Clone)]
    struct SessionRow {
        customer_id: Option<i32>,
        user_type: PrincipalType,
        visit_count: i32,
        country: Option<String>,
    }

    /// In-memory store mirroring the repository's upsert semantics.
    #[derive(Debug, Default)]
    struct MemoryStore {
        sessions: Mutex<HashMap<String, SessionRow>>,
        activities: Mutex<Vec<NewActivityRecord>>,
    }

    #[async_trait]
    impl TrackingStore for MemoryStore {
        async fn touch_session(
            &self,
            session_id: &str,
            principal: Option<(i32, PrincipalType)>,
        ) -> AppResult<bool> {
            let mut sessions = self.sessions.lock().unwrap();
            match sessions.get_mut(session_id) {
                Some(row) => {
                    row.visit_count += 1;
                    if row.customer_id.is_none() {
                        if let Some((id, ptype)) = principal {
                            row.customer_id = Some(id);
                            row.user_type = ptype;
                        }
                    }
                    Ok(true)
                }
                None => Ok(false),
            }
        }

        async fn create_session(&self, session: &NewVisitorSession) -> AppResult<()> {
            self.sessions.lock().unwrap().insert(
                session.session_id.clone(),
                SessionRow {
                    customer_id: session.customer_id,
                    user_type: session.user_type,
                    visit_count: 1,
                    country: session.location.country.clone(),
                },
            );
            Ok(())
        }

        async fn record_activity(&self, activity: &NewActivityRecord) -> AppResult<()> {
            self.activities.lock().unwrap().push(activity.clone());
            Ok(())
        }
    }

    #[derive(Debug)]
    struct FixedGeo(GeoLocation);

    #[async_trait]
    impl GeoProvider for FixedGeo {
        async fn lookup(&self, _ip: &str) -> AppResult<GeoLocation> {
            Ok(self.0.clone())
        }
    }

    #[derive(Debug)]
    struct FailingGeo;

    #[async_trait]
    impl GeoProvider for FailingGeo {
        async fn lookup(&self, _ip: &str) -> AppResult<GeoLocation> {
            Err(AppError::external_service("lookup unreachable"))
        }
    }

    fn capture(method: &str, path: &str, session_id: &str) -> RequestCapture {
        RequestCapture {
            method: method.to_string(),
            path: path.to_string(),
            url: format!("http://shop.example.com{path}"),
            ip_address: "93.184.216.34".to_string(),
            user_agent: Some("Mozilla/5.0 (Windows NT 10.0; Win64; x64) Chrome/120.0".to_string()),
            referer: Some("https://www.example.com/".to_string()),
            session_id: session_id.to_string(),
        }
    }

    fn tracker(store: Arc<MemoryStore>, geo: Arc<dyn GeoProvider>) -> RequestTracker {
        RequestTracker::new(store, geo, TrackingConfig::default())
    }

    #[tokio::test]
    async fn test_first_request_creates_session_and_activity() {
        let store = Arc::new(MemoryStore::default());
        let geo = Arc::new(FixedGeo(GeoLocation {
            country: Some("US".to_string()),
            region: None,
            city: None,
        }));
        let tracker = tracker(store.clone(), geo);

        tracker
            .track(
                capture("GET", "/products/88", "s-1"),
                None,
                Duration::from_millis(12),
            )
            .await;

        let sessions = store.sessions.lock().unwrap();
        let activities = store.activities.lock().unwrap();
        assert_eq!(sessions.len(), 1);
        assert_eq!(sessions["s-1"].visit_count, 1);
        assert_eq!(sessions["s-1"].country.as_deref(), Some("US"));
        assert_eq!(activities.len(), 1);
        assert_eq!(activities[0].event_type, EventType::ProductView);
        assert_eq!(activities[0].time_spent, Some(12));
    }

    #[tokio::test]
    async fn test_repeat_request_increments_single_row() {
        let store = Arc::new(MemoryStore::default());
        let tracker = tracker(store.clone(), Arc::new(FailingGeo));

        for _ in 0..3 {
            tracker
                .track(capture("GET", "/", "s-1"), None, Duration::from_millis(1))
                .await;
        }

        let sessions = store.sessions.lock().unwrap();
        assert_eq!(sessions.len(), 1);
        assert_eq!(sessions["s-1"].visit_count, 3);
        assert_eq!(store.activities.lock().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_excluded_path_writes_nothing() {
        let store = Arc::new(MemoryStore::default());
        let tracker = tracker(store.clone(), Arc::new(FailingGeo));

        tracker
            .track(
                capture("GET", "/static/style.css", "s-1"),
                None,
                Duration::from_millis(1),
            )
            .await;

        assert!(store.sessions.lock().unwrap().is_empty());
        assert!(store.activities.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_geo_failure_leaves_fields_unset() {
        let store = Arc::new(MemoryStore::default());
        let tracker = tracker(store.clone(), Arc::new(FailingGeo));

        tracker
            .track(capture("GET", "/", "s-1"), None, Duration::from_millis(1))
            .await;

        let sessions = store.sessions.lock().unwrap();
        assert_eq!(sessions["s-1"].country, None);
        let activities = store.activities.lock().unwrap();
        assert_eq!(activities[0].location, GeoLocation::default());
    }

    #[tokio::test]
    async fn test_principal_attached_once_never_overwritten() {
        let store = Arc::new(MemoryStore::default());
        let tracker = tracker(store.clone(), Arc::new(FailingGeo));

        tracker
            .track(capture("GET", "/", "s-1"), None, Duration::from_millis(1))
            .await;
        tracker
            .track(
                capture("GET", "/", "s-1"),
                Some((42, PrincipalType::Customer)),
                Duration::from_millis(1),
            )
            .await;
        tracker
            .track(
                capture("GET", "/", "s-1"),
                Some((99, PrincipalType::Admin)),
                Duration::from_millis(1),
            )
            .await;

        let sessions = store.sessions.lock().unwrap();
        assert_eq!(sessions["s-1"].customer_id, Some(42));
        assert_eq!(sessions["s-1"].user_type, PrincipalType::Customer);
    }

    #[tokio::test]
    async fn test_search_classification_with_query() {
        let store = Arc::new(MemoryStore::default());
        let tracker = tracker(store.clone(), Arc::new(FailingGeo));

        let mut cap = capture("GET", "/search", "s-1");
        cap.url = "http://shop.example.com/search?q=shoes&utm_source=ads".to_string();
        tracker.track(cap, None, Duration::from_millis(1)).await;

        let activities = store.activities.lock().unwrap();
        assert_eq!(activities[0].event_type, EventType::Search);
        let params = activities[0].query_params.as_deref().unwrap();
        assert!(params.contains("shoes"));
    }
}
