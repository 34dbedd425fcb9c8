//! Country entity (`oc_country`).

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Reference data: a shippable country.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Country {
    pub country_id: i32,
    pub name: String,
    pub iso_code_2: String,
    pub iso_code_3: String,
    pub postcode_required: bool,
    pub status: bool,
}
