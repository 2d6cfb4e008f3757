//! Availability query DTOs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Table;
use crate::types::{PartySize, TimeSlot};

/// Availability request (POST /api/check-availability)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityQuery {
    pub booking_date: NaiveDate,
    pub booking_time: TimeSlot,
    pub party_size: PartySize,
}

/// Availability response
///
/// The service echoes the query fields; only `available_tables` is required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityResponse {
    pub available_tables: Vec<Table>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub booking_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub booking_time: Option<TimeSlot>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub party_size: Option<PartySize>,
}

impl AvailabilityResponse {
    /// Build a response echoing the query it answers
    pub fn for_query(query: &AvailabilityQuery, available_tables: Vec<Table>) -> Self {
        Self {
            available_tables,
            booking_date: Some(query.booking_date),
            booking_time: Some(query.booking_time),
            party_size: Some(query.party_size),
        }
    }
}
