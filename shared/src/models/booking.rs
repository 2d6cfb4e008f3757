//! Booking Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::{PartySize, TimeSlot};

/// Confirmed booking record issued by the booking service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table_id: Option<String>,
    pub table_name: String,
    pub booking_date: NaiveDate,
    /// Start time as stored by the service (normally one of the slots)
    pub booking_time: String,
    pub party_size: u32,
    pub customer_name: String,
    pub customer_phone: String,
    #[serde(default)]
    pub special_requests: Option<String>,
}

/// Create booking payload (POST /api/bookings)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingCreate {
    pub table_id: String,
    pub customer_name: String,
    pub customer_phone: String,
    pub party_size: PartySize,
    pub booking_date: NaiveDate,
    pub booking_time: TimeSlot,
    #[serde(default)]
    pub special_requests: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_payload_wire_format() {
        let payload = BookingCreate {
            table_id: "2".to_string(),
            customer_name: "Alex".to_string(),
            customer_phone: "555-1234".to_string(),
            party_size: PartySize::new(4).unwrap(),
            booking_date: NaiveDate::from_ymd_opt(2025, 6, 10).unwrap(),
            booking_time: TimeSlot::H19,
            special_requests: None,
        };

        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "table_id": "2",
                "customer_name": "Alex",
                "customer_phone": "555-1234",
                "party_size": 4,
                "booking_date": "2025-06-10",
                "booking_time": "19:00",
                "special_requests": null
            })
        );
    }

    #[test]
    fn test_booking_ignores_extra_fields() {
        let booking: Booking = serde_json::from_str(
            r#"{
                "id": "B123",
                "table_id": "2",
                "table_name": "Table 2",
                "booking_date": "2025-06-10",
                "booking_time": "19:00",
                "party_size": 4,
                "customer_name": "Alex",
                "customer_phone": "555-1234",
                "special_requests": null,
                "created_at": "2025-06-01T12:00:00.000000"
            }"#,
        )
        .unwrap();

        assert_eq!(booking.id, "B123");
        assert_eq!(booking.table_id.as_deref(), Some("2"));
        assert_eq!(booking.special_requests, None);
    }
}
