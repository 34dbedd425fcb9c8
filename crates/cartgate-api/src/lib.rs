//! # cartgate-api
//!
//! HTTP layer of the gateway: router, handlers, auth extractors, tracking
//! and CORS middleware, request/response DTOs, and the `AppError` → HTTP
//! response mapping.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use error::ApiError;
pub use state::AppState;
