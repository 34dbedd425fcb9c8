//! Cart repository implementation.
//!
//! Lines belong either to an authenticated customer (`customer_id > 0`)
//! or to a guest session keyed by the tracking cookie value, mirroring
//! how the storefront itself stores `oc_cart` rows.

use chrono::Utc;
use sqlx::MySqlPool;

use cartgate_core::error::{AppError, ErrorKind};
use cartgate_core::result::AppResult;
use cartgate_entity::cart::{CartItem, CartLine};

const DEFAULT_LANGUAGE_ID: i32 = 1;

/// Who a cart belongs to.
#[derive(Debug, Clone)]
pub enum CartOwner {
    /// An authenticated customer.
    Customer(i32),
    /// An anonymous visitor, keyed by session id.
    Guest(String),
}

impl CartOwner {
    fn condition(&self) -> &'static str {
        match self {
            Self::Customer(_) => "customer_id = ?",
            Self::Guest(_) => "customer_id = 0 AND session_id = ?",
        }
    }
}

/// Repository for cart lines.
#[derive(Debug, Clone)]
pub struct CartRepository {
    pool: MySqlPool,
}

impl CartRepository {
    /// Create a new cart repository.
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn bind_owner<'q, O>(
        query: sqlx::query::QueryAs<'q, sqlx::MySql, O, sqlx::mysql::MySqlArguments>,
        owner: &'q CartOwner,
    ) -> sqlx::query::QueryAs<'q, sqlx::MySql, O, sqlx::mysql::MySqlArguments> {
        match owner {
            CartOwner::Customer(id) => query.bind(*id),
            CartOwner::Guest(session_id) => query.bind(session_id.as_str()),
        }
    }

    /// List the owner's cart lines joined with product data.
    pub async fn list_lines(&self, owner: &CartOwner) -> AppResult<Vec<CartLine>> {
        let sql = format!(
            "SELECT c.cart_id, c.product_id, pd.name, p.image, c.quantity, p.price, \
             c.`option`, c.date_added \
             FROM oc_cart c \
             JOIN oc_product p ON c.product_id = p.product_id \
             JOIN oc_product_description pd ON p.product_id = pd.product_id \
             WHERE pd.language_id = {DEFAULT_LANGUAGE_ID} AND {} \
             ORDER BY c.date_added",
            owner.condition()
        );
        let query = sqlx::query_as::<_, CartLine>(&sql);
        Self::bind_owner(query, owner)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list cart lines", e))
    }

    /// Find a single cart line by ID.
    pub async fn find_item(&self, cart_id: i32) -> AppResult<Option<CartItem>> {
        sqlx::query_as::<_, CartItem>(
            "SELECT cart_id, api_id, customer_id, session_id, product_id, recurring_id, \
             `option`, quantity, date_added FROM oc_cart WHERE cart_id = ?",
        )
        .bind(cart_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find cart item", e))
    }

    /// Add a product to the owner's cart.
    ///
    /// If a line for the same product with identical options already
    /// exists, its quantity is bumped instead of inserting a duplicate.
    pub async fn add_item(
        &self,
        owner: &CartOwner,
        session_id: &str,
        product_id: i32,
        quantity: i32,
        option_json: &str,
    ) -> AppResult<i32> {
        let existing_sql = format!(
            "SELECT cart_id, api_id, customer_id, session_id, product_id, recurring_id, \
             `option`, quantity, date_added FROM oc_cart \
             WHERE {} AND product_id = ? AND `option` = ?",
            owner.condition()
        );
        let query = sqlx::query_as::<_, CartItem>(&existing_sql);
        let existing = Self::bind_owner(query, owner)
            .bind(product_id)
            .bind(option_json)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to check existing cart line", e)
            })?;

        if let Some(item) = existing {
            sqlx::query("UPDATE oc_cart SET quantity = quantity + ? WHERE cart_id = ?")
                .bind(quantity)
                .bind(item.cart_id)
                .execute(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to bump cart quantity", e)
                })?;
            return Ok(item.cart_id);
        }

        let customer_id = match owner {
            CartOwner::Customer(id) => *id,
            CartOwner::Guest(_) => 0,
        };
        let result = sqlx::query(
            "INSERT INTO oc_cart (api_id, customer_id, session_id, product_id, recurring_id, \
             `option`, quantity, date_added) VALUES (0, ?, ?, ?, 0, ?, ?, ?)",
        )
        .bind(customer_id)
        .bind(session_id)
        .bind(product_id)
        .bind(option_json)
        .bind(quantity)
        .bind(Utc::now().naive_utc())
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to add cart item", e))?;

        Ok(result.last_insert_id() as i32)
    }

    /// Set the quantity of a cart line.
    pub async fn update_quantity(&self, cart_id: i32, quantity: i32) -> AppResult<bool> {
        let result = sqlx::query("UPDATE oc_cart SET quantity = ? WHERE cart_id = ?")
            .bind(quantity)
            .bind(cart_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to update cart quantity", e)
            })?;
        Ok(result.rows_affected() > 0)
    }

    /// Remove one cart line.
    pub async fn delete_item(&self, cart_id: i32) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM oc_cart WHERE cart_id = ?")
            .bind(cart_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete cart item", e)
            })?;
        Ok(result.rows_affected() > 0)
    }

    /// Remove every line in the owner's cart.
    pub async fn clear(&self, owner: &CartOwner) -> AppResult<u64> {
        let sql = format!("DELETE FROM oc_cart WHERE {}", owner.condition());
        let query = sqlx::query(&sql);
        let query = match owner {
            CartOwner::Customer(id) => query.bind(*id),
            CartOwner::Guest(session_id) => query.bind(session_id.as_str()),
        };
        let result = query
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to clear cart", e))?;
        Ok(result.rows_affected())
    }
}
