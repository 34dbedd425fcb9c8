//! Zone repository implementation (reference data).

use sqlx::MySqlPool;

use cartgate_core::error::{AppError, ErrorKind};
use cartgate_core::result::AppResult;
use cartgate_entity::zone::Zone;

const ZONE_COLUMNS: &str = "zone_id, country_id, name, code, status";

/// Repository for zones (states/provinces).
#[derive(Debug, Clone)]
pub struct ZoneRepository {
    pool: MySqlPool,
}

impl ZoneRepository {
    /// Create a new zone repository.
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// List zones, optionally restricted to one country.
    pub async fn list(&self, country_id: Option<i32>) -> AppResult<Vec<Zone>> {
        let sql = match country_id {
            Some(_) => format!("SELECT {ZONE_COLUMNS} FROM oc_zone WHERE country_id = ? ORDER BY name"),
            None => format!("SELECT {ZONE_COLUMNS} FROM oc_zone ORDER BY name"),
        };
        let mut query = sqlx::query_as::<_, Zone>(&sql);
        if let Some(country_id) = country_id {
            query = query.bind(country_id);
        }
        query
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list zones", e))
    }

    /// Find a zone by ID.
    pub async fn find_by_id(&self, id: i32) -> AppResult<Option<Zone>> {
        sqlx::query_as::<_, Zone>(&format!(
            "SELECT {ZONE_COLUMNS} FROM oc_zone WHERE zone_id = ?"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find zone", e))
    }

    /// Create a zone.
    pub async fn create(
        &self,
        country_id: i32,
        name: &str,
        code: &str,
        status: bool,
    ) -> AppResult<Zone> {
        let result = sqlx::query(
            "INSERT INTO oc_zone (country_id, name, code, status) VALUES (?, ?, ?, ?)",
        )
        .bind(country_id)
        .bind(name)
        .bind(code)
        .bind(status)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create zone", e))?;

        let id = result.last_insert_id() as i32;
        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::database("Zone vanished between insert and read-back"))
    }

    /// Replace the mutable fields of a zone.
    pub async fn update(
        &self,
        id: i32,
        country_id: i32,
        name: &str,
        code: &str,
        status: bool,
    ) -> AppResult<Option<Zone>> {
        sqlx::query(
            "UPDATE oc_zone SET country_id = ?, name = ?, code = ?, status = ? WHERE zone_id = ?",
        )
        .bind(country_id)
        .bind(name)
        .bind(code)
        .bind(status)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update zone", e))?;

        self.find_by_id(id).await
    }

    /// Delete a zone.
    pub async fn delete(&self, id: i32) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM oc_zone WHERE zone_id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete zone", e))?;
        Ok(result.rows_affected() > 0)
    }
}
