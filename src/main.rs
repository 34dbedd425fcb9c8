//! Cartgate Server — REST gateway over an OpenCart storefront database.
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use cartgate_core::config::AppConfig;
use cartgate_core::error::AppError;

#[tokio::main]
async fn main() {
    let env = std::env::var("CARTGATE_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt().json().with_env_filter(filter).with_target(true).init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Cartgate v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Database connection + migrations ─────────────────
    let db_pool = cartgate_database::connection::create_pool(&config.database).await?;
    cartgate_database::migration::run_migrations(&db_pool).await?;

    // ── Step 2: Initialize repositories ──────────────────────────
    let customer_repo = Arc::new(
        cartgate_database::repositories::customer::CustomerRepository::new(db_pool.clone()),
    );
    let user_repo =
        cartgate_database::repositories::user::UserRepository::new(db_pool.clone());
    let product_repo = Arc::new(
        cartgate_database::repositories::product::ProductRepository::new(db_pool.clone()),
    );
    let category_repo = Arc::new(
        cartgate_database::repositories::category::CategoryRepository::new(db_pool.clone()),
    );
    let cart_repo = Arc::new(cartgate_database::repositories::cart::CartRepository::new(
        db_pool.clone(),
    ));
    let order_repo = Arc::new(cartgate_database::repositories::order::OrderRepository::new(
        db_pool.clone(),
    ));
    let address_repo = Arc::new(
        cartgate_database::repositories::address::AddressRepository::new(db_pool.clone()),
    );
    let country_repo = Arc::new(
        cartgate_database::repositories::country::CountryRepository::new(db_pool.clone()),
    );
    let zone_repo = Arc::new(cartgate_database::repositories::zone::ZoneRepository::new(
        db_pool.clone(),
    ));
    let tracking_repo = Arc::new(
        cartgate_database::repositories::tracking::TrackingRepository::new(db_pool.clone()),
    );

    // ── Step 3: Initialize auth system ───────────────────────────
    let principal_store = Arc::new(cartgate_auth::store::DbPrincipalStore::new(
        (*customer_repo).clone(),
        user_repo,
    ));
    let auth_service = Arc::new(cartgate_auth::service::AuthService::new(
        principal_store,
        Arc::new(cartgate_auth::password::LegacySha1Scheme::new()),
        cartgate_auth::jwt::encoder::TokenIssuer::new(&config.auth),
        cartgate_auth::jwt::decoder::TokenVerifier::new(&config.auth),
    ));

    // ── Step 4: Initialize the request tracker ───────────────────
    let geo_client = cartgate_tracking::geo::IpinfoClient::new(&config.tracking)?;
    let geo = Arc::new(cartgate_tracking::geo::CachedGeoProvider::new(Arc::new(
        geo_client,
    )));
    let tracking_store = Arc::new(cartgate_tracking::store::DbTrackingStore::new(
        (*tracking_repo).clone(),
    ));
    let tracker = Arc::new(cartgate_tracking::tracker::RequestTracker::new(
        tracking_store,
        geo,
        config.tracking.clone(),
    ));

    // ── Step 5: Build and start the HTTP server ──────────────────
    let app_state = cartgate_api::state::AppState {
        config: Arc::new(config.clone()),
        db_pool: db_pool.clone(),
        auth_service,
        tracker,
        customer_repo,
        product_repo,
        category_repo,
        cart_repo,
        order_repo,
        address_repo,
        country_repo,
        zone_repo,
        tracking_repo,
    };

    let app = cartgate_api::router::build_router(app_state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("Cartgate server listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    db_pool.close().await;
    tracing::info!("Cartgate server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
