//! Product entities (`oc_product`, `oc_product_description`).

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A catalog product row.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Product {
    pub product_id: i32,
    pub model: String,
    pub sku: String,
    pub quantity: i32,
    pub stock_status_id: i32,
    pub image: Option<String>,
    pub manufacturer_id: i32,
    pub shipping: bool,
    pub price: f64,
    pub status: bool,
    /// View counter maintained by the storefront.
    pub viewed: i32,
    pub date_added: NaiveDateTime,
    pub date_modified: NaiveDateTime,
}

/// Localized product text for one language.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ProductDescription {
    pub product_id: i32,
    pub language_id: i32,
    pub name: String,
    pub description: String,
    pub meta_title: String,
}

/// List-view projection: product joined with its default-language name.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ProductSummary {
    pub product_id: i32,
    pub model: String,
    pub name: String,
    pub price: f64,
    pub quantity: i32,
    pub status: bool,
    pub image: Option<String>,
}

/// Fields for creating a product together with its default-language text.
#[derive(Debug, Clone)]
pub struct CreateProduct {
    pub model: String,
    pub sku: String,
    pub quantity: i32,
    pub stock_status_id: i32,
    pub image: Option<String>,
    pub manufacturer_id: i32,
    pub shipping: bool,
    pub price: f64,
    pub status: bool,
    pub name: String,
    pub description: String,
    pub meta_title: String,
}

/// Partial update of a product; `None` leaves the column untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateProduct {
    pub model: Option<String>,
    pub sku: Option<String>,
    pub quantity: Option<i32>,
    pub stock_status_id: Option<i32>,
    pub image: Option<String>,
    pub manufacturer_id: Option<i32>,
    pub shipping: Option<bool>,
    pub price: Option<f64>,
    pub status: Option<bool>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub meta_title: Option<String>,
}
