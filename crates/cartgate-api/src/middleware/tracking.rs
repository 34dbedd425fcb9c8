//! Visitor tracking middleware.
//!
//! Wraps every request: assigns or restores the session cookie, snapshots
//! the request, runs the downstream handler, then hands the snapshot to
//! the tracker. The response is returned unchanged apart from the cookie.

use std::time::Instant;

use axum::body::Body;
use axum::extract::State;
use axum::http::{Request, header};
use axum::middleware::Next;
use axum::response::Response;
use axum_extra::extract::cookie::{Cookie, CookieJar};

use cartgate_entity::principal::PrincipalType;
use cartgate_tracking::tracker::{self, RequestCapture};

use crate::state::AppState;

/// Session identifier for the current request, injected into request
/// extensions so handlers (guest carts) can reach it.
#[derive(Debug, Clone)]
pub struct SessionId(pub String);

/// Track every inbound request and manage the session cookie.
pub async fn track_requests(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let started = Instant::now();
    let cookie_name = state.config.tracking.cookie_name.clone();

    let jar = CookieJar::from_headers(request.headers());
    let (session_id, is_new_session) = match jar.get(&cookie_name) {
        Some(cookie) => (cookie.value().to_string(), false),
        None => (tracker::new_session_id(), true),
    };
    request
        .extensions_mut()
        .insert(SessionId(session_id.clone()));

    // Principal hint from the bearer claims only. The token is fully
    // resolved (with a storage read) by the auth extractors where an
    // endpoint actually requires it; tracking needs just id and type.
    let principal = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .and_then(|token| state.auth_service.decode(token).ok())
        .and_then(|claims| match claims.principal_type {
            PrincipalType::Guest => None,
            ptype => Some((claims.sub, ptype)),
        });

    let capture = capture_request(&request, session_id.clone());

    let mut response = next.run(request).await;

    state
        .tracker
        .track(capture, principal, started.elapsed())
        .await;

    if is_new_session {
        let max_age = time::Duration::days(state.config.tracking.cookie_max_age_days as i64);
        let cookie = Cookie::build((cookie_name, session_id))
            .path("/")
            .http_only(true)
            .max_age(max_age)
            .build();
        if let Ok(value) = cookie.to_string().parse() {
            response.headers_mut().append(header::SET_COOKIE, value);
        }
    }

    response
}

/// Snapshot the parts of the request the tracker needs.
fn capture_request(request: &Request<Body>, session_id: String) -> RequestCapture {
    let headers = request.headers();

    let host = headers
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("localhost");
    let url = format!("http://{host}{}", request.uri());

    let ip_address = headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(|v| v.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string());

    let header_string = |name: header::HeaderName| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(String::from)
    };

    RequestCapture {
        method: request.method().to_string(),
        path: request.uri().path().to_string(),
        url,
        ip_address,
        user_agent: header_string(header::USER_AGENT),
        referer: header_string(header::REFERER),
        session_id,
    }
}
