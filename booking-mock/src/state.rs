//! In-memory booking store

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use shared::{AvailabilityQuery, Booking, BookingCreate, Table};
use tokio::sync::RwLock;
use tracing::info;

use crate::error::{ApiError, ApiResult};

/// Venue layout: (name, capacity, location)
const SEED_TABLES: [(&str, u32, &str); 12] = [
    ("Table 1", 2, "Window"),
    ("Table 2", 4, "Center"),
    ("Table 3", 4, "Center"),
    ("Table 4", 6, "Corner"),
    ("Table 5", 2, "Bar"),
    ("Table 6", 8, "Private"),
    ("Table 7", 4, "Center"),
    ("Table 8", 2, "Window"),
    ("Table 9", 6, "Corner"),
    ("Table 10", 4, "Center"),
    ("Bar Counter 1", 8, "Bar"),
    ("Bar Counter 2", 6, "Bar"),
];

/// Stored booking; serialized with its creation timestamp
#[derive(Debug, Clone, Serialize)]
pub struct BookingRecord {
    #[serde(flatten)]
    pub booking: Booking,
    pub created_at: DateTime<Utc>,
}

impl BookingRecord {
    fn occupies(&self, table_id: &str, date: NaiveDate, time: &str) -> bool {
        self.booking.table_id.as_deref() == Some(table_id)
            && self.booking.booking_date == date
            && self.booking.booking_time == time
    }
}

pub struct AppState {
    tables: RwLock<Vec<Table>>,
    bookings: RwLock<Vec<BookingRecord>>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::seeded()
    }
}

impl AppState {
    /// Store with the given tables and no bookings
    pub fn with_tables(tables: Vec<Table>) -> Self {
        Self {
            tables: RwLock::new(tables),
            bookings: RwLock::new(Vec::new()),
        }
    }

    /// Store with the standard twelve-table layout, ids generated
    pub fn seeded() -> Self {
        let tables = SEED_TABLES
            .iter()
            .map(|(name, capacity, location)| {
                Table::new(uuid::Uuid::new_v4().to_string(), *name, *capacity, *location)
            })
            .collect::<Vec<_>>();
        info!(count = tables.len(), "Seeded tables");
        Self::with_tables(tables)
    }

    pub async fn tables(&self) -> Vec<Table> {
        self.tables.read().await.clone()
    }

    /// Tables that seat the party and are free at the requested date and time
    pub async fn available_tables(&self, query: &AvailabilityQuery) -> Vec<Table> {
        let tables = self.tables.read().await;
        let bookings = self.bookings.read().await;
        let time = query.booking_time.as_str();

        tables
            .iter()
            .filter(|t| t.seats(query.party_size))
            .filter(|t| {
                !bookings
                    .iter()
                    .any(|b| b.occupies(&t.id, query.booking_date, time))
            })
            .cloned()
            .collect()
    }

    /// Records a booking.
    ///
    /// Checks run in order: table exists, slot free, party fits.
    pub async fn create_booking(&self, request: BookingCreate) -> ApiResult<BookingRecord> {
        let tables = self.tables.read().await;
        let table = tables
            .iter()
            .find(|t| t.id == request.table_id)
            .ok_or_else(|| ApiError::not_found("Table not found"))?;

        let mut bookings = self.bookings.write().await;
        let time = request.booking_time.as_str();
        if bookings
            .iter()
            .any(|b| b.occupies(&table.id, request.booking_date, time))
        {
            return Err(ApiError::bad_request("Table is already booked for this time"));
        }

        if !table.seats(request.party_size) {
            return Err(ApiError::bad_request("Party size exceeds table capacity"));
        }

        let record = BookingRecord {
            booking: Booking {
                id: uuid::Uuid::new_v4().to_string(),
                table_id: Some(table.id.clone()),
                table_name: table.name.clone(),
                booking_date: request.booking_date,
                booking_time: time.to_string(),
                party_size: u32::from(request.party_size.get()),
                customer_name: request.customer_name,
                customer_phone: request.customer_phone,
                special_requests: request.special_requests,
            },
            created_at: Utc::now(),
        };
        info!(
            booking_id = %record.booking.id,
            table = %record.booking.table_name,
            date = %record.booking.booking_date,
            time = %record.booking.booking_time,
            "Booking created"
        );
        bookings.push(record.clone());
        Ok(record)
    }

    pub async fn bookings(&self, date: Option<NaiveDate>) -> Vec<BookingRecord> {
        self.bookings
            .read()
            .await
            .iter()
            .filter(|b| date.is_none_or(|d| b.booking.booking_date == d))
            .cloned()
            .collect()
    }

    pub async fn booking(&self, id: &str) -> ApiResult<BookingRecord> {
        self.bookings
            .read()
            .await
            .iter()
            .find(|b| b.booking.id == id)
            .cloned()
            .ok_or_else(|| ApiError::not_found("Booking not found"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{PartySize, TimeSlot};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn test_state() -> AppState {
        AppState::with_tables(vec![
            Table::new("1", "Table 1", 2, "Window"),
            Table::new("2", "Table 2", 4, "Center"),
        ])
    }

    fn request(table_id: &str, party: u8) -> BookingCreate {
        BookingCreate {
            table_id: table_id.to_string(),
            customer_name: "Alex".to_string(),
            customer_phone: "555-1234".to_string(),
            party_size: PartySize::new(party).unwrap(),
            booking_date: date(2025, 6, 10),
            booking_time: TimeSlot::H19,
            special_requests: None,
        }
    }

    fn query(party: u8) -> AvailabilityQuery {
        AvailabilityQuery {
            booking_date: date(2025, 6, 10),
            booking_time: TimeSlot::H19,
            party_size: PartySize::new(party).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_seeded_layout() {
        let tables = AppState::seeded().tables().await;
        assert_eq!(tables.len(), 12);
        assert_eq!(tables[0].name, "Table 1");
        assert_eq!(tables[11].name, "Bar Counter 2");
        assert!(tables.iter().all(|t| !t.id.is_empty()));
    }

    #[tokio::test]
    async fn test_availability_filters_capacity_and_bookings() {
        let state = test_state();
        assert_eq!(state.available_tables(&query(2)).await.len(), 2);
        assert_eq!(state.available_tables(&query(3)).await.len(), 1);

        state.create_booking(request("2", 4)).await.unwrap();
        let tables = state.available_tables(&query(2)).await;
        assert_eq!(tables.len(), 1);
        assert_eq!(tables[0].id, "1");

        // Other slots are unaffected
        let mut later = query(2);
        later.booking_time = TimeSlot::H20;
        assert_eq!(state.available_tables(&later).await.len(), 2);
    }

    #[tokio::test]
    async fn test_create_booking_rules() {
        let state = test_state();

        let err = state.create_booking(request("9", 2)).await.unwrap_err();
        assert!(matches!(err, ApiError::NotFound(ref m) if m == "Table not found"));

        let err = state.create_booking(request("1", 3)).await.unwrap_err();
        assert_eq!(err.to_string(), "Party size exceeds table capacity");

        let record = state.create_booking(request("1", 2)).await.unwrap();
        assert_eq!(record.booking.table_name, "Table 1");
        assert_eq!(record.booking.booking_time, "19:00");

        let err = state.create_booking(request("1", 2)).await.unwrap_err();
        assert_eq!(err.to_string(), "Table is already booked for this time");
    }

    #[tokio::test]
    async fn test_double_booking_checked_before_capacity() {
        let state = test_state();
        state.create_booking(request("1", 2)).await.unwrap();

        let err = state.create_booking(request("1", 5)).await.unwrap_err();
        assert_eq!(err.to_string(), "Table is already booked for this time");
    }

    #[tokio::test]
    async fn test_list_and_get_bookings() {
        let state = test_state();
        let record = state.create_booking(request("2", 4)).await.unwrap();

        assert_eq!(state.bookings(None).await.len(), 1);
        assert_eq!(state.bookings(Some(date(2025, 6, 10))).await.len(), 1);
        assert!(state.bookings(Some(date(2025, 6, 11))).await.is_empty());

        let found = state.booking(&record.booking.id).await.unwrap();
        assert_eq!(found.booking, record.booking);
        assert!(matches!(state.booking("missing").await, Err(ApiError::NotFound(_))));
    }
}
