//! Visitor session and activity log repository.
//!
//! Sessions are upserted (one row per session id, never deleted here);
//! activity records are append-only.

use chrono::{NaiveDateTime, Utc};
use sqlx::MySqlPool;

use cartgate_core::error::{AppError, ErrorKind};
use cartgate_core::result::AppResult;
use cartgate_entity::principal::PrincipalType;
use cartgate_entity::tracking::{NewActivityRecord, NewVisitorSession, PageStats, VisitorSession};

const SESSION_COLUMNS: &str = "session_id, customer_id, user_type, ip_address, user_agent, \
     first_visit, last_activity, visit_count, country, region, city, device_type, browser, os, \
     utm_source, utm_medium, utm_campaign, referring_site";

/// Repository for the gateway-owned tracking tables.
#[derive(Debug, Clone)]
pub struct TrackingRepository {
    pool: MySqlPool,
}

impl TrackingRepository {
    /// Create a new tracking repository.
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Find a session by its identifier.
    pub async fn find_session(&self, session_id: &str) -> AppResult<Option<VisitorSession>> {
        sqlx::query_as::<_, VisitorSession>(&format!(
            "SELECT {SESSION_COLUMNS} FROM api_session WHERE session_id = ?"
        ))
        .bind(session_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find session", e))
    }

    /// Insert a brand-new session row with `visit_count = 1`.
    pub async fn create_session(&self, session: &NewVisitorSession) -> AppResult<()> {
        let now = Utc::now().naive_utc();
        sqlx::query(
            "INSERT INTO api_session (session_id, customer_id, user_type, ip_address, \
             user_agent, first_visit, last_activity, visit_count, country, region, city, \
             device_type, browser, os, utm_source, utm_medium, utm_campaign, referring_site) \
             VALUES (?, ?, ?, ?, ?, ?, ?, 1, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&session.session_id)
        .bind(session.customer_id)
        .bind(session.user_type)
        .bind(&session.ip_address)
        .bind(&session.user_agent)
        .bind(now)
        .bind(now)
        .bind(&session.location.country)
        .bind(&session.location.region)
        .bind(&session.location.city)
        .bind(session.device_type)
        .bind(&session.browser)
        .bind(&session.os)
        .bind(&session.utm_source)
        .bind(&session.utm_medium)
        .bind(&session.utm_campaign)
        .bind(&session.referring_site)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create session", e))?;
        Ok(())
    }

    /// Bump `last_activity` and the visit counter for an existing session,
    /// attaching the principal if the session was previously anonymous.
    ///
    /// Returns `false` when no row carries the identifier (caller should
    /// then insert a new session). The `user_type` assignment must stay
    /// ahead of the `customer_id` one: MySQL applies SET clauses left to
    /// right and the attach condition reads the pre-update column.
    pub async fn touch_session(
        &self,
        session_id: &str,
        principal: Option<(i32, PrincipalType)>,
    ) -> AppResult<bool> {
        let (principal_id, principal_type) = match principal {
            Some((id, ptype)) => (Some(id), Some(ptype)),
            None => (None, None),
        };

        let result = sqlx::query(
            "UPDATE api_session SET \
             user_type = IF(customer_id IS NULL AND ? IS NOT NULL, ?, user_type), \
             customer_id = COALESCE(customer_id, ?), \
             last_activity = ?, \
             visit_count = visit_count + 1 \
             WHERE session_id = ?",
        )
        .bind(principal_id)
        .bind(principal_type.map(|t| t.as_str()))
        .bind(principal_id)
        .bind(Utc::now().naive_utc())
        .bind(session_id)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to touch session", e))?;

        Ok(result.rows_affected() > 0)
    }

    /// Append one activity record.
    pub async fn record_activity(&self, activity: &NewActivityRecord) -> AppResult<()> {
        sqlx::query(
            "INSERT INTO api_user_activity (session_id, customer_id, user_type, ip_address, \
             user_agent, url, referer, page_title, query_params, time_spent, event_type, \
             event_data, country, region, city, date_added) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&activity.session_id)
        .bind(activity.customer_id)
        .bind(activity.user_type)
        .bind(&activity.ip_address)
        .bind(&activity.user_agent)
        .bind(&activity.url)
        .bind(&activity.referer)
        .bind(&activity.page_title)
        .bind(&activity.query_params)
        .bind(activity.time_spent)
        .bind(activity.event_type)
        .bind(&activity.event_data)
        .bind(&activity.location.country)
        .bind(&activity.location.region)
        .bind(&activity.location.city)
        .bind(Utc::now().naive_utc())
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to record activity", e))?;
        Ok(())
    }

    /// Sessions active since the given instant, most recent first.
    pub async fn online_sessions(&self, since: NaiveDateTime) -> AppResult<Vec<VisitorSession>> {
        sqlx::query_as::<_, VisitorSession>(&format!(
            "SELECT {SESSION_COLUMNS} FROM api_session WHERE last_activity >= ? \
             ORDER BY last_activity DESC"
        ))
        .bind(since)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list online sessions", e))
    }

    /// Count distinct sessions seen since the given instant.
    pub async fn count_sessions_since(&self, since: NaiveDateTime) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM api_session WHERE last_activity >= ?")
            .bind(since)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count sessions", e))
    }

    /// Count activity records since the given instant.
    pub async fn count_activity_since(&self, since: NaiveDateTime) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM api_user_activity WHERE date_added >= ?")
            .bind(since)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count activity", e))
    }

    /// Most viewed pages since the given instant.
    pub async fn popular_pages(
        &self,
        since: NaiveDateTime,
        limit: u32,
    ) -> AppResult<Vec<PageStats>> {
        sqlx::query_as::<_, PageStats>(
            "SELECT page_title, MIN(url) AS url, COUNT(*) AS views FROM api_user_activity \
             WHERE date_added >= ? AND event_type = 'pageview' \
             GROUP BY page_title ORDER BY views DESC LIMIT ?",
        )
        .bind(since)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to rank popular pages", e))
    }
}
