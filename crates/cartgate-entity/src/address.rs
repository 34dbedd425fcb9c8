//! Address entity (`oc_address`).

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A customer address book entry.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Address {
    pub address_id: i32,
    pub customer_id: i32,
    pub firstname: String,
    pub lastname: String,
    pub company: String,
    pub address_1: String,
    pub address_2: String,
    pub city: String,
    pub postcode: String,
    pub country_id: i32,
    pub zone_id: i32,
}

/// Fields for creating or replacing an address.
#[derive(Debug, Clone)]
pub struct CreateAddress {
    pub firstname: String,
    pub lastname: String,
    pub company: String,
    pub address_1: String,
    pub address_2: String,
    pub city: String,
    pub postcode: String,
    pub country_id: i32,
    pub zone_id: i32,
}
