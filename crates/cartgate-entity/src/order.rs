//! Order entities (`oc_order`, `oc_order_product`).

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An order header row (subset of the sprawling `oc_order` table).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Order {
    pub order_id: i32,
    pub customer_id: i32,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub telephone: String,
    pub total: f64,
    pub order_status_id: i32,
    pub date_added: NaiveDateTime,
    pub date_modified: NaiveDateTime,
}

/// A line item on an order.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct OrderProduct {
    pub order_product_id: i32,
    pub order_id: i32,
    pub product_id: i32,
    pub name: String,
    pub model: String,
    pub quantity: i32,
    pub price: f64,
    pub total: f64,
}
