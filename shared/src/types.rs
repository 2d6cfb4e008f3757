//! Common value types for the reservation workspace
//!
//! `TimeSlot` and `PartySize` are closed value types: a value that exists is
//! always one the booking service accepts.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// ============================================================================
// Time Slot
// ============================================================================

/// Bookable start time. The venue takes bookings on the hour, 17:00-23:00.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TimeSlot {
    #[serde(rename = "17:00")]
    H17,
    #[serde(rename = "18:00")]
    H18,
    #[serde(rename = "19:00")]
    H19,
    #[serde(rename = "20:00")]
    H20,
    #[serde(rename = "21:00")]
    H21,
    #[serde(rename = "22:00")]
    H22,
    #[serde(rename = "23:00")]
    H23,
}

impl TimeSlot {
    /// All slots in display order
    pub const ALL: [TimeSlot; 7] = [
        TimeSlot::H17,
        TimeSlot::H18,
        TimeSlot::H19,
        TimeSlot::H20,
        TimeSlot::H21,
        TimeSlot::H22,
        TimeSlot::H23,
    ];

    /// Wire representation ("HH:MM"), sent verbatim to the service
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::H17 => "17:00",
            Self::H18 => "18:00",
            Self::H19 => "19:00",
            Self::H20 => "20:00",
            Self::H21 => "21:00",
            Self::H22 => "22:00",
            Self::H23 => "23:00",
        }
    }

    /// Hour of day (17-23)
    pub fn hour(&self) -> u32 {
        match self {
            Self::H17 => 17,
            Self::H18 => 18,
            Self::H19 => 19,
            Self::H20 => 20,
            Self::H21 => 21,
            Self::H22 => 22,
            Self::H23 => 23,
        }
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse failure for a time outside the fixed slot set
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown time slot: {0}")]
pub struct UnknownTimeSlot(pub String);

impl FromStr for TimeSlot {
    type Err = UnknownTimeSlot;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|slot| slot.as_str() == s)
            .ok_or_else(|| UnknownTimeSlot(s.to_string()))
    }
}

// ============================================================================
// Party Size
// ============================================================================

/// Number of guests, always within `[PartySize::MIN, PartySize::MAX]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PartySize(u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Party size must be between {min} and {max}, got {0}", min = PartySize::MIN, max = PartySize::MAX)]
pub struct PartySizeError(pub u8);

impl PartySize {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;
    pub const DEFAULT: PartySize = PartySize(2);

    pub fn new(size: u8) -> Result<Self, PartySizeError> {
        if (Self::MIN..=Self::MAX).contains(&size) {
            Ok(Self(size))
        } else {
            Err(PartySizeError(size))
        }
    }

    pub fn get(&self) -> u8 {
        self.0
    }

    /// One more guest, saturating at `MAX`
    pub fn increment(self) -> Self {
        Self(self.0.saturating_add(1).min(Self::MAX))
    }

    /// One fewer guest, saturating at `MIN`
    pub fn decrement(self) -> Self {
        Self(self.0.saturating_sub(1).max(Self::MIN))
    }
}

impl Default for PartySize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<u8> for PartySize {
    type Error = PartySizeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PartySize> for u8 {
    fn from(value: PartySize) -> Self {
        value.0
    }
}

impl fmt::Display for PartySize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
