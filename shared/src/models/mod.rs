//! Data models
//!
//! Shared between the booking client and the mock service (via API).
//! Table and booking IDs are opaque strings assigned by the service.

pub mod availability;
pub mod booking;
pub mod dining_table;

// Re-exports
pub use availability::*;
pub use booking::*;
pub use dining_table::*;
