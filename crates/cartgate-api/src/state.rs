//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use sqlx::MySqlPool;

use cartgate_auth::service::AuthService;
use cartgate_core::config::AppConfig;
use cartgate_tracking::tracker::RequestTracker;

use cartgate_database::repositories::address::AddressRepository;
use cartgate_database::repositories::cart::CartRepository;
use cartgate_database::repositories::category::CategoryRepository;
use cartgate_database::repositories::country::CountryRepository;
use cartgate_database::repositories::customer::CustomerRepository;
use cartgate_database::repositories::order::OrderRepository;
use cartgate_database::repositories::product::ProductRepository;
use cartgate_database::repositories::tracking::TrackingRepository;
use cartgate_database::repositories::zone::ZoneRepository;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped or internally pooled for cheap cloning.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// MySQL connection pool
    pub db_pool: MySqlPool,

    // ── Services ─────────────────────────────────────────────
    /// Credential verification and token auth
    pub auth_service: Arc<AuthService>,
    /// Per-request visitor tracker
    pub tracker: Arc<RequestTracker>,

    // ── Repositories ─────────────────────────────────────────
    /// Customer repository
    pub customer_repo: Arc<CustomerRepository>,
    /// Product repository
    pub product_repo: Arc<ProductRepository>,
    /// Category repository
    pub category_repo: Arc<CategoryRepository>,
    /// Cart repository
    pub cart_repo: Arc<CartRepository>,
    /// Order repository
    pub order_repo: Arc<OrderRepository>,
    /// Address repository
    pub address_repo: Arc<AddressRepository>,
    /// Country repository
    pub country_repo: Arc<CountryRepository>,
    /// Zone repository
    pub zone_repo: Arc<ZoneRepository>,
    /// Tracking repository (analytics reads)
    pub tracking_repo: Arc<TrackingRepository>,
}
