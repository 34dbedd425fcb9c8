//! Zone entity (`oc_zone`).

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Reference data: a state/province within a country.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Zone {
    pub zone_id: i32,
    pub country_id: i32,
    pub name: String,
    pub code: String,
    pub status: bool,
}
