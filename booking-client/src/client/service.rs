// booking-client/src/client/service.rs
// Booking service contract and its HTTP implementation

use async_trait::async_trait;
use chrono::NaiveDate;
use shared::{
    AvailabilityQuery, AvailabilityResponse, Booking, BookingCreate, HealthResponse, Table,
};

use super::http::{HttpClient, NetworkHttpClient};
use crate::{ClientConfig, ClientError, ClientResult};

/// Path of one booking, with `id` percent-encoded as a single segment
fn booking_path(id: &str) -> ClientResult<String> {
    let mut url = reqwest::Url::parse("http://localhost/api/bookings")
        .map_err(|e| ClientError::Internal(format!("Failed to build booking path: {}", e)))?;
    url.path_segments_mut()
        .map_err(|_| ClientError::Internal("Booking path cannot take segments".into()))?
        .push(id);
    Ok(url.path().to_string())
}

/// Operations the reservation flow needs from the booking service.
///
/// The wizard only depends on `check_availability` and `create_booking`;
/// the read operations exist for hosts that show existing bookings.
#[async_trait]
pub trait BookingService: Send + Sync {
    /// POST /api/check-availability
    async fn check_availability(&self, query: &AvailabilityQuery)
    -> ClientResult<AvailabilityResponse>;

    /// POST /api/bookings
    async fn create_booking(&self, request: &BookingCreate) -> ClientResult<Booking>;

    /// GET /api/health
    async fn health(&self) -> ClientResult<HealthResponse>;

    /// GET /api/tables
    async fn list_tables(&self) -> ClientResult<Vec<Table>>;

    /// GET /api/bookings[?date=YYYY-MM-DD]
    async fn list_bookings(&self, date: Option<NaiveDate>) -> ClientResult<Vec<Booking>>;

    /// GET /api/bookings/{id}
    async fn get_booking(&self, id: &str) -> ClientResult<Booking>;
}

/// Booking API client over any `HttpClient` transport
#[derive(Debug, Clone)]
pub struct BookingClient<H = NetworkHttpClient> {
    http: H,
}

impl BookingClient<NetworkHttpClient> {
    /// Build a network client from configuration
    pub fn from_config(config: &ClientConfig) -> ClientResult<Self> {
        Ok(Self::new(config.build_http_client()?))
    }
}

impl<H: HttpClient> BookingClient<H> {
    pub fn new(http: H) -> Self {
        Self { http }
    }

    /// Returns the underlying transport
    pub fn http(&self) -> &H {
        &self.http
    }
}

#[async_trait]
impl<H: HttpClient> BookingService for BookingClient<H> {
    async fn check_availability(
        &self,
        query: &AvailabilityQuery,
    ) -> ClientResult<AvailabilityResponse> {
        self.http.post("/api/check-availability", query).await
    }

    async fn create_booking(&self, request: &BookingCreate) -> ClientResult<Booking> {
        self.http.post("/api/bookings", request).await
    }

    async fn health(&self) -> ClientResult<HealthResponse> {
        self.http.get("/api/health").await
    }

    async fn list_tables(&self) -> ClientResult<Vec<Table>> {
        self.http.get("/api/tables").await
    }

    async fn list_bookings(&self, date: Option<NaiveDate>) -> ClientResult<Vec<Booking>> {
        match date {
            Some(date) => self.http.get(&format!("/api/bookings?date={}", date)).await,
            None => self.http.get("/api/bookings").await,
        }
    }

    async fn get_booking(&self, id: &str) -> ClientResult<Booking> {
        self.http.get(&booking_path(id)?).await
    }
}
