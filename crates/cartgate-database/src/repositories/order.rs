//! Order repository implementation. Orders are placed by the storefront;
//! the gateway exposes them read-mostly, with an admin status update.

use chrono::Utc;
use sqlx::MySqlPool;

use cartgate_core::error::{AppError, ErrorKind};
use cartgate_core::result::AppResult;
use cartgate_core::types::pagination::{PageRequest, PageResponse};
use cartgate_entity::order::{Order, OrderProduct};

const ORDER_COLUMNS: &str = "order_id, customer_id, firstname, lastname, email, telephone, \
     total, order_status_id, date_added, date_modified";

/// Repository for orders.
#[derive(Debug, Clone)]
pub struct OrderRepository {
    pool: MySqlPool,
}

impl OrderRepository {
    /// Create a new order repository.
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// List all orders, newest first.
    pub async fn list(&self, page: &PageRequest) -> AppResult<PageResponse<Order>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM oc_order")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count orders", e))?;

        let orders = sqlx::query_as::<_, Order>(&format!(
            "SELECT {ORDER_COLUMNS} FROM oc_order ORDER BY date_added DESC LIMIT ? OFFSET ?"
        ))
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list orders", e))?;

        Ok(PageResponse::new(
            orders,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// List one customer's orders, newest first.
    pub async fn list_by_customer(
        &self,
        customer_id: i32,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Order>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM oc_order WHERE customer_id = ?")
            .bind(customer_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count customer orders", e)
            })?;

        let orders = sqlx::query_as::<_, Order>(&format!(
            "SELECT {ORDER_COLUMNS} FROM oc_order WHERE customer_id = ? \
             ORDER BY date_added DESC LIMIT ? OFFSET ?"
        ))
        .bind(customer_id)
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list customer orders", e)
        })?;

        Ok(PageResponse::new(
            orders,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Find an order by ID.
    pub async fn find_by_id(&self, id: i32) -> AppResult<Option<Order>> {
        sqlx::query_as::<_, Order>(&format!(
            "SELECT {ORDER_COLUMNS} FROM oc_order WHERE order_id = ?"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find order", e))
    }

    /// List the line items of an order.
    pub async fn find_products(&self, order_id: i32) -> AppResult<Vec<OrderProduct>> {
        sqlx::query_as::<_, OrderProduct>(
            "SELECT order_product_id, order_id, product_id, name, model, quantity, price, total \
             FROM oc_order_product WHERE order_id = ?",
        )
        .bind(order_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list order products", e))
    }

    /// Change the status of an order.
    pub async fn update_status(&self, id: i32, order_status_id: i32) -> AppResult<Option<Order>> {
        sqlx::query(
            "UPDATE oc_order SET order_status_id = ?, date_modified = ? WHERE order_id = ?",
        )
        .bind(order_status_id)
        .bind(Utc::now().naive_utc())
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to update order status", e)
        })?;

        self.find_by_id(id).await
    }
}
