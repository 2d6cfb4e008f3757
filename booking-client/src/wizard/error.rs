//! Wizard error types

use chrono::NaiveDate;
use shared::{PartySizeError, UnknownTimeSlot};
use thiserror::Error;

use super::step::{Step, Transition};
use crate::ClientError;

/// Banner text when availability cannot be checked
pub const AVAILABILITY_FAILED_MESSAGE: &str = "Failed to check availability";

/// Banner text when booking fails without a server-provided reason
pub const BOOKING_FAILED_MESSAGE: &str = "Failed to create booking";

/// Wizard error type
///
/// Guard and transition violations leave the wizard untouched. The two flow
/// failures (`AvailabilityCheckFailed`, `BookingCreationFailed`) are also
/// surfaced through the wizard's error banner.
#[derive(Debug, Error)]
pub enum WizardError {
    #[error("Cannot {transition} from the {from} step")]
    InvalidTransition { from: Step, transition: Transition },

    #[error("Cannot {action} on the {step} step")]
    NotAllowed { action: &'static str, step: Step },

    #[error("A request is already in flight")]
    RequestInFlight,

    #[error("Booking date {date} is before today ({today})")]
    DateInPast { date: NaiveDate, today: NaiveDate },

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error(transparent)]
    InvalidPartySize(#[from] PartySizeError),

    #[error(transparent)]
    UnknownTimeSlot(#[from] UnknownTimeSlot),

    #[error("Table {0} is not among the available tables")]
    TableNotOffered(String),

    #[error("Select a table to continue")]
    NoTableSelected,

    #[error("Tables are available for this search")]
    TablesAvailable,

    #[error("Request ticket was issued for a different call")]
    TicketMismatch,

    #[error("{}", AVAILABILITY_FAILED_MESSAGE)]
    AvailabilityCheckFailed {
        #[source]
        source: ClientError,
    },

    #[error("{reason}")]
    BookingCreationFailed {
        reason: String,
        #[source]
        source: ClientError,
    },
}

impl WizardError {
    /// Whether this is one of the recoverable service failures shown in the banner
    pub fn is_service_failure(&self) -> bool {
        matches!(
            self,
            Self::AvailabilityCheckFailed { .. } | Self::BookingCreationFailed { .. }
        )
    }
}

/// Result type for wizard operations
pub type WizardResult<T> = Result<T, WizardError>;
