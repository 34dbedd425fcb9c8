//! Cart entity (`oc_cart`).

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One cart line.
///
/// Guest carts are keyed by `session_id` (the tracking cookie value);
/// once a customer authenticates, lines carry their `customer_id` and the
/// session key no longer matters.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CartItem {
    pub cart_id: i32,
    pub api_id: i32,
    /// Owning customer (0 for guests).
    pub customer_id: i32,
    /// Owning session for guest carts.
    pub session_id: String,
    pub product_id: i32,
    pub recurring_id: i32,
    /// Selected options, JSON-encoded.
    #[sqlx(rename = "option")]
    #[serde(rename = "option")]
    pub option_json: String,
    pub quantity: i32,
    pub date_added: NaiveDateTime,
}

/// Cart line joined with product data for display.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CartLine {
    pub cart_id: i32,
    pub product_id: i32,
    pub name: String,
    pub image: Option<String>,
    pub quantity: i32,
    pub price: f64,
    #[sqlx(rename = "option")]
    pub option_json: String,
    pub date_added: NaiveDateTime,
}
