//! In-memory booking service
//!
//! Serves the reservation API (`/api/health`, `/api/tables`,
//! `/api/check-availability`, `/api/bookings`) over a seeded table layout.
//! Used by the client's integration tests through [`router`] and runnable
//! standalone via the `booking-mock` binary.

pub mod api;
pub mod config;
pub mod error;
pub mod logger;
pub mod state;

pub use api::router;
pub use config::Config;
pub use error::{ApiError, ApiResult};
pub use state::{AppState, BookingRecord};
