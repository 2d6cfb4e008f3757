//! Reservation wizard.
//!
//! A four-step state machine (`DateTime -> Tables -> Details ->
//! Confirmation`) that owns the booking draft, validates each step's inputs
//! and drives the two booking-service calls.
//!
//! Calls can be made in one go (`check_availability`, `confirm_booking`) or
//! split into `begin_*` / `complete_*` for hosts that run the network call
//! elsewhere. Only one call may be outstanding; a response whose ticket was
//! abandoned by navigation is discarded.

mod clock;
mod draft;
mod error;
mod machine;
mod step;


pub use clock::{Clock, FixedClock, SystemClock};
pub use draft::BookingDraft;
pub use error::{AVAILABILITY_FAILED_MESSAGE, BOOKING_FAILED_MESSAGE, WizardError, WizardResult};
pub use machine::{BookingWizard, Completion, PendingRequest, RequestKind, WizardState};
pub use step::{Step, Transition};
