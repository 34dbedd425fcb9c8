//! Product repository implementation.
//!
//! Every read joins `oc_product_description` for the default language
//! (language_id 1), mirroring what the storefront shows.

use chrono::Utc;
use sqlx::MySqlPool;

use cartgate_core::error::{AppError, ErrorKind};
use cartgate_core::result::AppResult;
use cartgate_core::types::pagination::{PageRequest, PageResponse};
use cartgate_entity::product::{
    CreateProduct, Product, ProductDescription, ProductSummary, UpdateProduct,
};

/// Default storefront language used for description joins.
const DEFAULT_LANGUAGE_ID: i32 = 1;

/// Optional filters for product listing.
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    /// Substring match against name, model, or SKU.
    pub search: Option<String>,
    /// Restrict to one category.
    pub category_id: Option<i32>,
    /// Minimum price, inclusive.
    pub min_price: Option<f64>,
    /// Maximum price, inclusive.
    pub max_price: Option<f64>,
    /// Restrict by enabled/disabled status.
    pub status: Option<bool>,
}

/// Repository for catalog products.
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: MySqlPool,
}

impl ProductRepository {
    /// Create a new product repository.
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// List products with optional filters, joined with their names.
    pub async fn list(
        &self,
        filter: &ProductFilter,
        page: &PageRequest,
    ) -> AppResult<PageResponse<ProductSummary>> {
        let mut conditions = vec!["pd.language_id = ?".to_string()];
        if filter.search.is_some() {
            conditions
                .push("(pd.name LIKE ? OR p.model LIKE ? OR p.sku LIKE ?)".to_string());
        }
        if filter.category_id.is_some() {
            conditions.push(
                "p.product_id IN (SELECT product_id FROM oc_product_to_category \
                 WHERE category_id = ?)"
                    .to_string(),
            );
        }
        if filter.min_price.is_some() {
            conditions.push("p.price >= ?".to_string());
        }
        if filter.max_price.is_some() {
            conditions.push("p.price <= ?".to_string());
        }
        if filter.status.is_some() {
            conditions.push("p.status = ?".to_string());
        }
        let where_clause = format!("WHERE {}", conditions.join(" AND "));

        let count_sql = format!(
            "SELECT COUNT(*) FROM oc_product p \
             JOIN oc_product_description pd ON p.product_id = pd.product_id {where_clause}"
        );
        let select_sql = format!(
            "SELECT p.product_id, p.model, pd.name, p.price, p.quantity, p.status, p.image \
             FROM oc_product p \
             JOIN oc_product_description pd ON p.product_id = pd.product_id {where_clause} \
             ORDER BY p.product_id LIMIT ? OFFSET ?"
        );

        let mut count_query = sqlx::query_scalar::<_, i64>(&count_sql);
        let mut select_query = sqlx::query_as::<_, ProductSummary>(&select_sql);

        count_query = count_query.bind(DEFAULT_LANGUAGE_ID);
        select_query = select_query.bind(DEFAULT_LANGUAGE_ID);
        if let Some(search) = &filter.search {
            let pattern = format!("%{search}%");
            for _ in 0..3 {
                count_query = count_query.bind(pattern.clone());
                select_query = select_query.bind(pattern.clone());
            }
        }
        if let Some(category_id) = filter.category_id {
            count_query = count_query.bind(category_id);
            select_query = select_query.bind(category_id);
        }
        if let Some(min_price) = filter.min_price {
            count_query = count_query.bind(min_price);
            select_query = select_query.bind(min_price);
        }
        if let Some(max_price) = filter.max_price {
            count_query = count_query.bind(max_price);
            select_query = select_query.bind(max_price);
        }
        if let Some(status) = filter.status {
            count_query = count_query.bind(status);
            select_query = select_query.bind(status);
        }

        let total = count_query
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count products", e))?;

        let products = select_query
            .bind(page.limit() as i64)
            .bind(page.offset() as i64)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list products", e))?;

        Ok(PageResponse::new(
            products,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Find a product by ID.
    pub async fn find_by_id(&self, id: i32) -> AppResult<Option<Product>> {
        sqlx::query_as::<_, Product>(
            "SELECT product_id, model, sku, quantity, stock_status_id, image, manufacturer_id, \
             shipping, price, status, viewed, date_added, date_modified \
             FROM oc_product WHERE product_id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find product", e))
    }

    /// Fetch the default-language description of a product.
    pub async fn find_description(&self, id: i32) -> AppResult<Option<ProductDescription>> {
        sqlx::query_as::<_, ProductDescription>(
            "SELECT product_id, language_id, name, description, meta_title \
             FROM oc_product_description WHERE product_id = ? AND language_id = ?",
        )
        .bind(id)
        .bind(DEFAULT_LANGUAGE_ID)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to find product description", e)
        })
    }

    /// Create a product and its default-language description.
    pub async fn create(&self, data: &CreateProduct) -> AppResult<i32> {
        let now = Utc::now().naive_utc();
        let result = sqlx::query(
            "INSERT INTO oc_product (model, sku, quantity, stock_status_id, image, \
             manufacturer_id, shipping, price, status, viewed, date_added, date_modified) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, 0, ?, ?)",
        )
        .bind(&data.model)
        .bind(&data.sku)
        .bind(data.quantity)
        .bind(data.stock_status_id)
        .bind(&data.image)
        .bind(data.manufacturer_id)
        .bind(data.shipping)
        .bind(data.price)
        .bind(data.status)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create product", e))?;

        let product_id = result.last_insert_id() as i32;

        sqlx::query(
            "INSERT INTO oc_product_description (product_id, language_id, name, description, \
             tag, meta_title, meta_description, meta_keyword) VALUES (?, ?, ?, ?, '', ?, '', '')",
        )
        .bind(product_id)
        .bind(DEFAULT_LANGUAGE_ID)
        .bind(&data.name)
        .bind(&data.description)
        .bind(&data.meta_title)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to create product description", e)
        })?;

        Ok(product_id)
    }

    /// Apply a partial update to a product and its description.
    pub async fn update(&self, id: i32, data: &UpdateProduct) -> AppResult<Option<Product>> {
        let Some(current) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        sqlx::query(
            "UPDATE oc_product SET model = ?, sku = ?, quantity = ?, stock_status_id = ?, \
             image = ?, manufacturer_id = ?, shipping = ?, price = ?, status = ?, \
             date_modified = ? WHERE product_id = ?",
        )
        .bind(data.model.as_deref().unwrap_or(&current.model))
        .bind(data.sku.as_deref().unwrap_or(&current.sku))
        .bind(data.quantity.unwrap_or(current.quantity))
        .bind(data.stock_status_id.unwrap_or(current.stock_status_id))
        .bind(data.image.as_deref().or(current.image.as_deref()))
        .bind(data.manufacturer_id.unwrap_or(current.manufacturer_id))
        .bind(data.shipping.unwrap_or(current.shipping))
        .bind(data.price.unwrap_or(current.price))
        .bind(data.status.unwrap_or(current.status))
        .bind(Utc::now().naive_utc())
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update product", e))?;

        if data.name.is_some() || data.description.is_some() || data.meta_title.is_some() {
            let desc = self.find_description(id).await?;
            let (name, description, meta_title) = match &desc {
                Some(d) => (d.name.clone(), d.description.clone(), d.meta_title.clone()),
                None => (String::new(), String::new(), String::new()),
            };
            sqlx::query(
                "UPDATE oc_product_description SET name = ?, description = ?, meta_title = ? \
                 WHERE product_id = ? AND language_id = ?",
            )
            .bind(data.name.as_deref().unwrap_or(&name))
            .bind(data.description.as_deref().unwrap_or(&description))
            .bind(data.meta_title.as_deref().unwrap_or(&meta_title))
            .bind(id)
            .bind(DEFAULT_LANGUAGE_ID)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to update product description", e)
            })?;
        }

        self.find_by_id(id).await
    }

    /// Delete a product and its descriptions.
    pub async fn delete(&self, id: i32) -> AppResult<bool> {
        sqlx::query("DELETE FROM oc_product_description WHERE product_id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete product description", e)
            })?;

        let result = sqlx::query("DELETE FROM oc_product WHERE product_id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete product", e)
            })?;
        Ok(result.rows_affected() > 0)
    }
}
