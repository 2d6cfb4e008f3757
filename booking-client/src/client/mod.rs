//! Client module - HTTP transports and the booking service client.

pub mod http;
#[cfg(feature = "in-process")]
pub mod http_oneshot;
pub mod service;

pub use http::{HttpClient, NetworkHttpClient};
#[cfg(feature = "in-process")]
pub use http_oneshot::OneshotHttpClient;
pub use service::{BookingClient, BookingService};
