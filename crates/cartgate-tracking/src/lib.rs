//! # cartgate-tracking
//!
//! Per-request visitor tracking: event classification, device and
//! campaign enrichment, geolocation, and best-effort persistence of one
//! session upsert plus one append-only activity record per request.
//!
//! Tracking never blocks or fails a request. Every error on this path is
//! logged and swallowed.

pub mod classifier;
pub mod device;
pub mod geo;
pub mod store;
pub mod tracker;

pub use geo::{CachedGeoProvider, GeoProvider, IpinfoClient};
pub use store::{DbTrackingStore, TrackingStore};
pub use tracker::{RequestCapture, RequestTracker};
