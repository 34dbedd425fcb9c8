//! Customer repository implementation.

use sqlx::MySqlPool;

use cartgate_core::error::{AppError, ErrorKind};
use cartgate_core::result::AppResult;
use cartgate_core::types::pagination::{PageRequest, PageResponse};
use cartgate_entity::customer::Customer;

/// Columns selected for every customer query; the `oc_customer` table has
/// many more that the gateway never reads.
const CUSTOMER_COLUMNS: &str = "customer_id, customer_group_id, store_id, firstname, lastname, \
     email, telephone, password, salt, newsletter, status, ip, date_added";

/// Repository for customer accounts.
#[derive(Debug, Clone)]
pub struct CustomerRepository {
    pool: MySqlPool,
}

impl CustomerRepository {
    /// Create a new customer repository.
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Find a customer by ID.
    pub async fn find_by_id(&self, id: i32) -> AppResult<Option<Customer>> {
        sqlx::query_as::<_, Customer>(&format!(
            "SELECT {CUSTOMER_COLUMNS} FROM oc_customer WHERE customer_id = ?"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find customer", e))
    }

    /// Find a customer by login email.
    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<Customer>> {
        sqlx::query_as::<_, Customer>(&format!(
            "SELECT {CUSTOMER_COLUMNS} FROM oc_customer WHERE email = ?"
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to find customer by email", e)
        })
    }

    /// List customers, newest first.
    pub async fn list(&self, page: &PageRequest) -> AppResult<PageResponse<Customer>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM oc_customer")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count customers", e)
            })?;

        let customers = sqlx::query_as::<_, Customer>(&format!(
            "SELECT {CUSTOMER_COLUMNS} FROM oc_customer ORDER BY date_added DESC LIMIT ? OFFSET ?"
        ))
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list customers", e))?;

        Ok(PageResponse::new(
            customers,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Update the mutable profile fields of a customer.
    pub async fn update_profile(
        &self,
        id: i32,
        firstname: &str,
        lastname: &str,
        email: &str,
        telephone: &str,
        newsletter: bool,
    ) -> AppResult<Option<Customer>> {
        sqlx::query(
            "UPDATE oc_customer SET firstname = ?, lastname = ?, email = ?, telephone = ?, \
             newsletter = ? WHERE customer_id = ?",
        )
        .bind(firstname)
        .bind(lastname)
        .bind(email)
        .bind(telephone)
        .bind(newsletter)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update customer", e))?;

        self.find_by_id(id).await
    }

    /// Delete a customer account.
    pub async fn delete(&self, id: i32) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM oc_customer WHERE customer_id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete customer", e)
            })?;
        Ok(result.rows_affected() > 0)
    }
}
