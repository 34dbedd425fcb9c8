//! Category repository implementation.

use chrono::Utc;
use sqlx::MySqlPool;

use cartgate_core::error::{AppError, ErrorKind};
use cartgate_core::result::AppResult;
use cartgate_core::types::pagination::{PageRequest, PageResponse};
use cartgate_entity::category::{
    Category, CategoryDescription, CategorySummary, CreateCategory, UpdateCategory,
};

const DEFAULT_LANGUAGE_ID: i32 = 1;

/// Repository for catalog categories.
#[derive(Debug, Clone)]
pub struct CategoryRepository {
    pool: MySqlPool,
}

impl CategoryRepository {
    /// Create a new category repository.
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// List categories with their default-language names.
    pub async fn list(
        &self,
        parent_id: Option<i32>,
        page: &PageRequest,
    ) -> AppResult<PageResponse<CategorySummary>> {
        let where_clause = if parent_id.is_some() {
            "WHERE cd.language_id = ? AND c.parent_id = ?"
        } else {
            "WHERE cd.language_id = ?"
        };

        let count_sql = format!(
            "SELECT COUNT(*) FROM oc_category c \
             JOIN oc_category_description cd ON c.category_id = cd.category_id {where_clause}"
        );
        let select_sql = format!(
            "SELECT c.category_id, c.parent_id, cd.name, c.sort_order, c.status \
             FROM oc_category c \
             JOIN oc_category_description cd ON c.category_id = cd.category_id {where_clause} \
             ORDER BY c.sort_order, cd.name LIMIT ? OFFSET ?"
        );

        let mut count_query = sqlx::query_scalar::<_, i64>(&count_sql).bind(DEFAULT_LANGUAGE_ID);
        let mut select_query =
            sqlx::query_as::<_, CategorySummary>(&select_sql).bind(DEFAULT_LANGUAGE_ID);
        if let Some(parent_id) = parent_id {
            count_query = count_query.bind(parent_id);
            select_query = select_query.bind(parent_id);
        }

        let total = count_query.fetch_one(&self.pool).await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to count categories", e)
        })?;

        let categories = select_query
            .bind(page.limit() as i64)
            .bind(page.offset() as i64)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list categories", e)
            })?;

        Ok(PageResponse::new(
            categories,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Find a category by ID.
    pub async fn find_by_id(&self, id: i32) -> AppResult<Option<Category>> {
        sqlx::query_as::<_, Category>(
            "SELECT category_id, parent_id, image, sort_order, status, date_added, date_modified \
             FROM oc_category WHERE category_id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find category", e))
    }

    /// Fetch the default-language description of a category.
    pub async fn find_description(&self, id: i32) -> AppResult<Option<CategoryDescription>> {
        sqlx::query_as::<_, CategoryDescription>(
            "SELECT category_id, language_id, name, description \
             FROM oc_category_description WHERE category_id = ? AND language_id = ?",
        )
        .bind(id)
        .bind(DEFAULT_LANGUAGE_ID)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to find category description", e)
        })
    }

    /// Create a category and its default-language description.
    pub async fn create(&self, data: &CreateCategory) -> AppResult<i32> {
        let now = Utc::now().naive_utc();
        let result = sqlx::query(
            "INSERT INTO oc_category (parent_id, image, sort_order, status, date_added, \
             date_modified) VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(data.parent_id)
        .bind(&data.image)
        .bind(data.sort_order)
        .bind(data.status)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create category", e))?;

        let category_id = result.last_insert_id() as i32;

        sqlx::query(
            "INSERT INTO oc_category_description (category_id, language_id, name, description, \
             meta_title, meta_description, meta_keyword) VALUES (?, ?, ?, ?, ?, '', '')",
        )
        .bind(category_id)
        .bind(DEFAULT_LANGUAGE_ID)
        .bind(&data.name)
        .bind(&data.description)
        .bind(&data.name)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to create category description", e)
        })?;

        Ok(category_id)
    }

    /// Apply a partial update to a category and its description.
    pub async fn update(&self, id: i32, data: &UpdateCategory) -> AppResult<Option<Category>> {
        let Some(current) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        sqlx::query(
            "UPDATE oc_category SET parent_id = ?, image = ?, sort_order = ?, status = ?, \
             date_modified = ? WHERE category_id = ?",
        )
        .bind(data.parent_id.unwrap_or(current.parent_id))
        .bind(data.image.as_deref().or(current.image.as_deref()))
        .bind(data.sort_order.unwrap_or(current.sort_order))
        .bind(data.status.unwrap_or(current.status))
        .bind(Utc::now().naive_utc())
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update category", e))?;

        if data.name.is_some() || data.description.is_some() {
            let desc = self.find_description(id).await?;
            let (name, description) = match &desc {
                Some(d) => (d.name.clone(), d.description.clone()),
                None => (String::new(), String::new()),
            };
            sqlx::query(
                "UPDATE oc_category_description SET name = ?, description = ? \
                 WHERE category_id = ? AND language_id = ?",
            )
            .bind(data.name.as_deref().unwrap_or(&name))
            .bind(data.description.as_deref().unwrap_or(&description))
            .bind(id)
            .bind(DEFAULT_LANGUAGE_ID)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Database,
                    "Failed to update category description",
                    e,
                )
            })?;
        }

        self.find_by_id(id).await
    }

    /// Delete a category and its descriptions.
    pub async fn delete(&self, id: i32) -> AppResult<bool> {
        sqlx::query("DELETE FROM oc_category_description WHERE category_id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete category description", e)
            })?;

        let result = sqlx::query("DELETE FROM oc_category WHERE category_id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete category", e)
            })?;
        Ok(result.rows_affected() > 0)
    }
}
