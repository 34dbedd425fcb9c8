//! Address repository implementation.

use sqlx::MySqlPool;

use cartgate_core::error::{AppError, ErrorKind};
use cartgate_core::result::AppResult;
use cartgate_entity::address::{Address, CreateAddress};

const ADDRESS_COLUMNS: &str = "address_id, customer_id, firstname, lastname, company, \
     address_1, address_2, city, postcode, country_id, zone_id";

/// Repository for customer addresses.
#[derive(Debug, Clone)]
pub struct AddressRepository {
    pool: MySqlPool,
}

impl AddressRepository {
    /// Create a new address repository.
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Find an address by ID.
    pub async fn find_by_id(&self, id: i32) -> AppResult<Option<Address>> {
        sqlx::query_as::<_, Address>(&format!(
            "SELECT {ADDRESS_COLUMNS} FROM oc_address WHERE address_id = ?"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find address", e))
    }

    /// List every address of a customer.
    pub async fn list_by_customer(&self, customer_id: i32) -> AppResult<Vec<Address>> {
        sqlx::query_as::<_, Address>(&format!(
            "SELECT {ADDRESS_COLUMNS} FROM oc_address WHERE customer_id = ? ORDER BY address_id"
        ))
        .bind(customer_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list addresses", e))
    }

    /// Create an address for a customer.
    pub async fn create(&self, customer_id: i32, data: &CreateAddress) -> AppResult<Address> {
        let result = sqlx::query(
            "INSERT INTO oc_address (customer_id, firstname, lastname, company, address_1, \
             address_2, city, postcode, country_id, zone_id) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(customer_id)
        .bind(&data.firstname)
        .bind(&data.lastname)
        .bind(&data.company)
        .bind(&data.address_1)
        .bind(&data.address_2)
        .bind(&data.city)
        .bind(&data.postcode)
        .bind(data.country_id)
        .bind(data.zone_id)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create address", e))?;

        let id = result.last_insert_id() as i32;
        self.find_by_id(id).await?.ok_or_else(|| {
            AppError::database("Address vanished between insert and read-back")
        })
    }

    /// Replace the mutable fields of an address.
    pub async fn update(&self, id: i32, data: &CreateAddress) -> AppResult<Option<Address>> {
        sqlx::query(
            "UPDATE oc_address SET firstname = ?, lastname = ?, company = ?, address_1 = ?, \
             address_2 = ?, city = ?, postcode = ?, country_id = ?, zone_id = ? \
             WHERE address_id = ?",
        )
        .bind(&data.firstname)
        .bind(&data.lastname)
        .bind(&data.company)
        .bind(&data.address_1)
        .bind(&data.address_2)
        .bind(&data.city)
        .bind(&data.postcode)
        .bind(data.country_id)
        .bind(data.zone_id)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update address", e))?;

        self.find_by_id(id).await
    }

    /// Delete an address.
    pub async fn delete(&self, id: i32) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM oc_address WHERE address_id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete address", e)
            })?;
        Ok(result.rows_affected() > 0)
    }
}
