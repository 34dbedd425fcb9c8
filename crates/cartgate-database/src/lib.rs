//! # cartgate-database
//!
//! MySQL connection management and concrete repository implementations.
//!
//! The OpenCart `oc_*` tables are an external, fixed schema: repositories
//! read and write them but the migration runner never touches them. Only
//! the gateway's own tracking tables are created here.

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::create_pool;
