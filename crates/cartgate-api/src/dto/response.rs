//! Response DTOs.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use cartgate_entity::customer::Customer;
use cartgate_entity::order::{Order, OrderProduct};
use cartgate_entity::product::{Product, ProductDescription};
use cartgate_entity::tracking::{PageStats, VisitorSession};
use cartgate_entity::user::AdminUser;

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message.
    pub message: String,
}

/// Login response: the bearer token and its expiry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Signed access token.
    pub access_token: String,
    /// Always `"bearer"`.
    pub token_type: String,
    /// Absolute token expiry.
    pub expires_at: DateTime<Utc>,
}

/// Customer summary for responses. Never includes credential fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerResponse {
    pub id: i32,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub telephone: String,
    pub newsletter: bool,
    pub status: bool,
    pub date_added: NaiveDateTime,
}

impl From<Customer> for CustomerResponse {
    fn from(c: Customer) -> Self {
        Self {
            id: c.customer_id,
            firstname: c.firstname,
            lastname: c.lastname,
            email: c.email,
            telephone: c.telephone,
            newsletter: c.newsletter,
            status: c.status,
            date_added: c.date_added,
        }
    }
}

/// Admin summary for responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminUserResponse {
    pub id: i32,
    pub username: String,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub status: bool,
}

impl From<AdminUser> for AdminUserResponse {
    fn from(a: AdminUser) -> Self {
        Self {
            id: a.user_id,
            username: a.username,
            firstname: a.firstname,
            lastname: a.lastname,
            email: a.email,
            status: a.status,
        }
    }
}

/// Full product detail: base row plus default-language text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductDetailResponse {
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
    pub viewed: i32,
    pub date_added: NaiveDateTime,
    pub date_modified: NaiveDateTime,
    pub name: Option<String>,
    pub description: Option<String>,
    pub meta_title: Option<String>,
}

impl ProductDetailResponse {
    /// Combine a product row with its (possibly missing) description.
    pub fn from_parts(product: Product, description: Option<ProductDescription>) -> Self {
        let (name, desc, meta_title) = match description {
            Some(d) => (Some(d.name), Some(d.description), Some(d.meta_title)),
            None => (None, None, None),
        };
        Self {
            product_id: product.product_id,
            model: product.model,
            sku: product.sku,
            quantity: product.quantity,
            stock_status_id: product.stock_status_id,
            image: product.image,
            manufacturer_id: product.manufacturer_id,
            shipping: product.shipping,
            price: product.price,
            status: product.status,
            viewed: product.viewed,
            date_added: product.date_added,
            date_modified: product.date_modified,
            name,
            description: desc,
            meta_title,
        }
    }
}

/// Full category detail: base row plus default-language text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryDetailResponse {
    pub category_id: i32,
    pub parent_id: i32,
    pub image: Option<String>,
    pub sort_order: i32,
    pub status: bool,
    pub date_added: NaiveDateTime,
    pub date_modified: NaiveDateTime,
    pub name: Option<String>,
    pub description: Option<String>,
}

impl CategoryDetailResponse {
    /// Combine a category row with its (possibly missing) description.
    pub fn from_parts(
        category: cartgate_entity::category::Category,
        description: Option<cartgate_entity::category::CategoryDescription>,
    ) -> Self {
        let (name, desc) = match description {
            Some(d) => (Some(d.name), Some(d.description)),
            None => (None, None),
        };
        Self {
            category_id: category.category_id,
            parent_id: category.parent_id,
            image: category.image,
            sort_order: category.sort_order,
            status: category.status,
            date_added: category.date_added,
            date_modified: category.date_modified,
            name,
            description: desc,
        }
    }
}

/// One line of a cart, priced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartLineResponse {
    pub cart_id: i32,
    pub product_id: i32,
    pub name: String,
    pub image: Option<String>,
    pub quantity: i32,
    pub price: f64,
    pub total: f64,
    pub option: serde_json::Value,
    pub date_added: NaiveDateTime,
}

/// Whole-cart summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartSummaryResponse {
    pub items: Vec<CartLineResponse>,
    pub total_items: usize,
    pub total_price: f64,
}

/// Order detail: header plus line items.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderDetailResponse {
    pub order: Order,
    pub products: Vec<OrderProduct>,
}

/// One online visitor row for the analytics endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OnlineVisitorResponse {
    pub session_id: String,
    pub customer_id: Option<i32>,
    pub user_type: String,
    pub ip_address: String,
    pub country: Option<String>,
    pub city: Option<String>,
    pub device_type: Option<String>,
    pub last_activity: NaiveDateTime,
}

impl From<VisitorSession> for OnlineVisitorResponse {
    fn from(s: VisitorSession) -> Self {
        Self {
            session_id: s.session_id,
            customer_id: s.customer_id,
            user_type: s.user_type.to_string(),
            ip_address: s.ip_address,
            country: s.country,
            city: s.city,
            device_type: s.device_type.map(|d| d.to_string()),
            last_activity: s.last_activity,
        }
    }
}

/// Currently-online visitors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OnlineUsersResponse {
    pub count: usize,
    pub visitors: Vec<OnlineVisitorResponse>,
}

/// Visitor counts over a window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisitorStatsResponse {
    pub window_days: i64,
    pub sessions: i64,
    pub activity_records: i64,
}

/// Ranked pages over a window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PopularPagesResponse {
    pub window_days: i64,
    pub pages: Vec<PageStats>,
}

/// Health probe result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub database: bool,
}

/// Root welcome body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WelcomeResponse {
    pub message: String,
    pub version: String,
}
