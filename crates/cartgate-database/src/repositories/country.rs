//! Country repository implementation (reference data).

use sqlx::MySqlPool;

use cartgate_core::error::{AppError, ErrorKind};
use cartgate_core::result::AppResult;
use cartgate_entity::country::Country;

const COUNTRY_COLUMNS: &str =
    "country_id, name, iso_code_2, iso_code_3, postcode_required, status";

/// Repository for countries.
#[derive(Debug, Clone)]
pub struct CountryRepository {
    pool: MySqlPool,
}

impl CountryRepository {
    /// Create a new country repository.
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// List countries, optionally only enabled ones.
    pub async fn list(&self, only_enabled: bool) -> AppResult<Vec<Country>> {
        let sql = if only_enabled {
            format!("SELECT {COUNTRY_COLUMNS} FROM oc_country WHERE status = 1 ORDER BY name")
        } else {
            format!("SELECT {COUNTRY_COLUMNS} FROM oc_country ORDER BY name")
        };
        sqlx::query_as::<_, Country>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list countries", e))
    }

    /// Find a country by ID.
    pub async fn find_by_id(&self, id: i32) -> AppResult<Option<Country>> {
        sqlx::query_as::<_, Country>(&format!(
            "SELECT {COUNTRY_COLUMNS} FROM oc_country WHERE country_id = ?"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find country", e))
    }

    /// Create a country.
    pub async fn create(
        &self,
        name: &str,
        iso_code_2: &str,
        iso_code_3: &str,
        postcode_required: bool,
        status: bool,
    ) -> AppResult<Country> {
        let result = sqlx::query(
            "INSERT INTO oc_country (name, iso_code_2, iso_code_3, address_format, \
             postcode_required, status) VALUES (?, ?, ?, '', ?, ?)",
        )
        .bind(name)
        .bind(iso_code_2)
        .bind(iso_code_3)
        .bind(postcode_required)
        .bind(status)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create country", e))?;

        let id = result.last_insert_id() as i32;
        self.find_by_id(id).await?.ok_or_else(|| {
            AppError::database("Country vanished between insert and read-back")
        })
    }

    /// Replace the mutable fields of a country.
    pub async fn update(
        &self,
        id: i32,
        name: &str,
        iso_code_2: &str,
        iso_code_3: &str,
        postcode_required: bool,
        status: bool,
    ) -> AppResult<Option<Country>> {
        sqlx::query(
            "UPDATE oc_country SET name = ?, iso_code_2 = ?, iso_code_3 = ?, \
             postcode_required = ?, status = ? WHERE country_id = ?",
        )
        .bind(name)
        .bind(iso_code_2)
        .bind(iso_code_3)
        .bind(postcode_required)
        .bind(status)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update country", e))?;

        self.find_by_id(id).await
    }

    /// Delete a country.
    pub async fn delete(&self, id: i32) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM oc_country WHERE country_id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete country", e)
            })?;
        Ok(result.rows_affected() > 0)
    }
}
