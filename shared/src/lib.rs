//! Shared types for the reservation workspace
//!
//! Wire types used by both the booking client and the mock booking
//! service: tables, bookings, availability DTOs, slot/party-size value
//! types and the error body format.

pub mod error;
pub mod models;
pub mod response;
pub mod types;

// Re-exports
pub use error::ErrorBody;
pub use models::{AvailabilityQuery, AvailabilityResponse, Booking, BookingCreate, Table};
pub use response::HealthResponse;
pub use types::{PartySize, PartySizeError, TimeSlot, UnknownTimeSlot};
