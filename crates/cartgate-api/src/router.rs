//! Route definitions for the Cartgate HTTP API.
//!
//! All resource routes are mounted under `/api`. The tracking middleware
//! wraps everything, including the excluded paths — exclusion is decided
//! inside the tracker so cookie issuance still happens there.

use axum::{
    Router,
    middleware as axum_middleware,
    routing::{delete, get, post, put},
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(product_routes())
        .merge(category_routes())
        .merge(customer_routes())
        .merge(order_routes())
        .merge(cart_routes())
        .merge(address_routes())
        .merge(country_routes())
        .merge(zone_routes())
        .merge(analytics_routes())
        .route("/health", get(handlers::health::health));

    let cors = middleware::cors::build_cors_layer(&state.config.server.cors);

    Router::new()
        .route("/", get(handlers::health::welcome))
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::tracking::track_requests,
        ))
        .with_state(state)
}

/// Auth endpoints: per-type login and current-principal lookups
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/customer/login", post(handlers::auth::login_customer))
        .route("/auth/admin/login", post(handlers::auth::login_admin))
        .route("/auth/customer/me", get(handlers::auth::customer_me))
        .route("/auth/admin/me", get(handlers::auth::admin_me))
}

/// Product catalog
fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(handlers::product::list_products))
        .route("/products", post(handlers::product::create_product))
        .route("/products/{id}", get(handlers::product::get_product))
        .route("/products/{id}", put(handlers::product::update_product))
        .route("/products/{id}", delete(handlers::product::delete_product))
}

/// Category catalog
fn category_routes() -> Router<AppState> {
    Router::new()
        .route("/categories", get(handlers::category::list_categories))
        .route("/categories", post(handlers::category::create_category))
        .route("/categories/{id}", get(handlers::category::get_category))
        .route("/categories/{id}", put(handlers::category::update_category))
        .route(
            "/categories/{id}",
            delete(handlers::category::delete_category),
        )
}

/// Customer accounts
fn customer_routes() -> Router<AppState> {
    Router::new()
        .route("/customers", get(handlers::customer::list_customers))
        .route("/customers/me", get(handlers::customer::me))
        .route("/customers/me", put(handlers::customer::update_me))
        .route("/customers/{id}", get(handlers::customer::get_customer))
        .route(
            "/customers/{id}",
            delete(handlers::customer::delete_customer),
        )
}

/// Orders
fn order_routes() -> Router<AppState> {
    Router::new()
        .route("/orders", get(handlers::order::list_orders))
        .route("/orders/my-orders", get(handlers::order::my_orders))
        .route("/orders/{id}", get(handlers::order::get_order))
        .route(
            "/orders/{id}/status",
            put(handlers::order::update_order_status),
        )
}

/// Cart
fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/cart", get(handlers::cart::get_cart))
        .route("/cart", delete(handlers::cart::clear_cart))
        .route("/cart/items", post(handlers::cart::add_item))
        .route("/cart/items/{id}", put(handlers::cart::update_item))
        .route("/cart/items/{id}", delete(handlers::cart::remove_item))
}

/// Customer addresses
fn address_routes() -> Router<AppState> {
    Router::new()
        .route("/addresses/my-addresses", get(handlers::address::my_addresses))
        .route("/addresses", post(handlers::address::create_address))
        .route("/addresses/{id}", get(handlers::address::get_address))
        .route("/addresses/{id}", put(handlers::address::update_address))
        .route("/addresses/{id}", delete(handlers::address::delete_address))
        .route(
            "/addresses/admin/customer/{id}",
            get(handlers::address::admin_customer_addresses),
        )
}

/// Countries (reference data)
fn country_routes() -> Router<AppState> {
    Router::new()
        .route("/countries", get(handlers::country::list_countries))
        .route("/countries", post(handlers::country::create_country))
        .route("/countries/{id}", get(handlers::country::get_country))
        .route("/countries/{id}", put(handlers::country::update_country))
        .route("/countries/{id}", delete(handlers::country::delete_country))
}

/// Zones (reference data)
fn zone_routes() -> Router<AppState> {
    Router::new()
        .route("/zones", get(handlers::zone::list_zones))
        .route("/zones", post(handlers::zone::create_zone))
        .route("/zones/{id}", get(handlers::zone::get_zone))
        .route("/zones/{id}", put(handlers::zone::update_zone))
        .route("/zones/{id}", delete(handlers::zone::delete_zone))
}

/// Admin analytics over the tracking tables
fn analytics_routes() -> Router<AppState> {
    Router::new()
        .route("/analytics/online-users", get(handlers::analytics::online_users))
        .route(
            "/analytics/stats/visitor-count",
            get(handlers::analytics::visitor_count),
        )
        .route(
            "/analytics/stats/popular-pages",
            get(handlers::analytics::popular_pages),
        )
}
