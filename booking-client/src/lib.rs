//! Booking Client - reservation wizard and HTTP client for the booking service
//!
//! - [`BookingWizard`]: the step-by-step reservation state machine
//! - [`BookingService`]: the booking API contract, implemented over HTTP by
//!   [`BookingClient`]
//! - [`ClientConfig`]: service URL and timeout, loadable from the environment

pub mod client;
pub mod config;
pub mod error;
pub mod wizard;

pub use client::{BookingClient, BookingService, HttpClient, NetworkHttpClient};
#[cfg(feature = "in-process")]
pub use client::OneshotHttpClient;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use wizard::{BookingWizard, Step, WizardError, WizardResult};

// Re-export shared types for convenience
pub use shared::{Booking, PartySize, Table, TimeSlot};
