//! Category entities (`oc_category`, `oc_category_description`).

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A catalog category row.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Category {
    pub category_id: i32,
    /// Parent category (0 = top level).
    pub parent_id: i32,
    pub image: Option<String>,
    pub sort_order: i32,
    pub status: bool,
    pub date_added: NaiveDateTime,
    pub date_modified: NaiveDateTime,
}

/// Localized category text for one language.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CategoryDescription {
    pub category_id: i32,
    pub language_id: i32,
    pub name: String,
    pub description: String,
}

/// List-view projection: category joined with its default-language name.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CategorySummary {
    pub category_id: i32,
    pub parent_id: i32,
    pub name: String,
    pub sort_order: i32,
    pub status: bool,
}

/// Fields for creating a category with its default-language text.
#[derive(Debug, Clone)]
pub struct CreateCategory {
    pub parent_id: i32,
    pub image: Option<String>,
    pub sort_order: i32,
    pub status: bool,
    pub name: String,
    pub description: String,
}

/// Partial update of a category; `None` leaves the column untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateCategory {
    pub parent_id: Option<i32>,
    pub image: Option<String>,
    pub sort_order: Option<i32>,
    pub status: Option<bool>,
    pub name: Option<String>,
    pub description: Option<String>,
}
