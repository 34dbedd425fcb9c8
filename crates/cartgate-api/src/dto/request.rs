//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Customer login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CustomerLoginRequest {
    /// Login email.
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Admin login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AdminLoginRequest {
    /// Username.
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Product creation request (admin).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateProductRequest {
    #[validate(length(min = 1, max = 64))]
    pub model: String,
    #[serde(default)]
    pub sku: String,
    #[serde(default)]
    pub quantity: i32,
    #[serde(default)]
    pub stock_status_id: i32,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub manufacturer_id: i32,
    #[serde(default = "default_true")]
    pub shipping: bool,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub status: bool,
    /// Default-language product name.
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub meta_title: String,
}

/// Product update request (admin); omitted fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateProductRequest {
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

/// Category creation request (admin).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateCategoryRequest {
    #[serde(default)]
    pub parent_id: i32,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub sort_order: i32,
    #[serde(default = "default_true")]
    pub status: bool,
    /// Default-language category name.
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// Category update request (admin); omitted fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateCategoryRequest {
    pub parent_id: Option<i32>,
    pub image: Option<String>,
    pub sort_order: Option<i32>,
    pub status: Option<bool>,
    pub name: Option<String>,
    pub description: Option<String>,
}

/// Customer self-service profile update.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(min = 1, max = 32))]
    pub firstname: String,
    #[validate(length(min = 1, max = 32))]
    pub lastname: String,
    #[validate(email)]
    pub email: String,
    #[serde(default)]
    pub telephone: String,
    #[serde(default)]
    pub newsletter: bool,
}

/// Add an item to the cart.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AddToCartRequest {
    pub product_id: i32,
    #[serde(default = "default_quantity")]
    #[validate(range(min = 1, message = "Quantity must be positive"))]
    pub quantity: i32,
    /// Selected product options.
    #[serde(default)]
    pub option: serde_json::Value,
}

/// Change the quantity of a cart line.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateCartItemRequest {
    #[validate(range(min = 1, message = "Quantity must be positive"))]
    pub quantity: i32,
}

/// Create or replace an address.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AddressRequest {
    #[validate(length(min = 1, max = 32))]
    pub firstname: String,
    #[validate(length(min = 1, max = 32))]
    pub lastname: String,
    #[serde(default)]
    pub company: String,
    #[validate(length(min = 1, max = 128))]
    pub address_1: String,
    #[serde(default)]
    pub address_2: String,
    #[validate(length(min = 1, max = 128))]
    pub city: String,
    #[serde(default)]
    pub postcode: String,
    pub country_id: i32,
    #[serde(default)]
    pub zone_id: i32,
}

/// Create or replace a country (admin).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CountryRequest {
    #[validate(length(min = 1, max = 128))]
    pub name: String,
    #[validate(length(equal = 2))]
    pub iso_code_2: String,
    #[validate(length(equal = 3))]
    pub iso_code_3: String,
    #[serde(default)]
    pub postcode_required: bool,
    #[serde(default = "default_true")]
    pub status: bool,
}

/// Create or replace a zone (admin).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ZoneRequest {
    pub country_id: i32,
    #[validate(length(min = 1, max = 128))]
    pub name: String,
    #[serde(default)]
    pub code: String,
    #[serde(default = "default_true")]
    pub status: bool,
}

/// Change an order's status (admin).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateOrderStatusRequest {
    pub order_status_id: i32,
}

/// Query parameters for product listing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductListQuery {
    #[serde(default)]
    pub page: Option<u64>,
    #[serde(default)]
    pub page_size: Option<u64>,
    pub search: Option<String>,
    pub category_id: Option<i32>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub status: Option<bool>,
}

/// Query parameters for category listing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CategoryListQuery {
    #[serde(default)]
    pub page: Option<u64>,
    #[serde(default)]
    pub page_size: Option<u64>,
    pub parent_id: Option<i32>,
}

/// Query parameters for zone listing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ZoneListQuery {
    pub country_id: Option<i32>,
}

/// Query parameters for the analytics windows.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyticsWindowQuery {
    /// Online window in minutes.
    #[serde(default = "default_online_minutes")]
    pub minutes: i64,
    /// Stats window in days.
    #[serde(default = "default_stats_days")]
    pub days: i64,
    /// Maximum number of ranked pages.
    #[serde(default = "default_page_limit")]
    pub limit: u32,
}

fn default_true() -> bool {
    true
}

fn default_quantity() -> i32 {
    1
}

fn default_online_minutes() -> i64 {
    5
}

fn default_stats_days() -> i64 {
    7
}

fn default_page_limit() -> u32 {
    10
}
