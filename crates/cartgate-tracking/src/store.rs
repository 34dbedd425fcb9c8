//! Persistence seam for the tracker.

use async_trait::async_trait;

use cartgate_core::result::AppResult;
use cartgate_database::repositories::tracking::TrackingRepository;
use cartgate_entity::principal::PrincipalType;
use cartgate_entity::tracking::{NewActivityRecord, NewVisitorSession};

/// Write access to the session and activity tables.
///
/// The tracker only ever upserts sessions and appends activity; reads
/// (the analytics endpoints) go straight to the repository.
#[async_trait]
pub trait TrackingStore: Send + Sync + std::fmt::Debug {
    /// Bump an existing session, attaching the principal if the session
    /// was anonymous. Returns `false` when no such session exists.
    async fn touch_session(
        &self,
        session_id: &str,
        principal: Option<(i32, PrincipalType)>,
    ) -> AppResult<bool>;

    /// Insert a brand-new session row.
    async fn create_session(&self, session: &NewVisitorSession) -> AppResult<()>;

    /// Append one activity record.
    async fn record_activity(&self, activity: &NewActivityRecord) -> AppResult<()>;
}

/// Database-backed tracking store over the sqlx repository.
#[derive(Debug, Clone)]
pub struct DbTrackingStore {
    repo: TrackingRepository,
}

impl DbTrackingStore {
    /// Create a store over the given repository.
    pub fn new(repo: TrackingRepository) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl TrackingStore for DbTrackingStore {
    async fn touch_session(
        &self,
        session_id: &str,
        principal: Option<(i32, PrincipalType)>,
    ) -> AppResult<bool> {
        self.repo.touch_session(session_id, principal).await
    }

    async fn create_session(&self, session: &NewVisitorSession) -> AppResult<()> {
        self.repo.create_session(session).await
    }

    async fn record_activity(&self, activity: &NewActivityRecord) -> AppResult<()> {
        self.repo.record_activity(activity).await
    }
}
