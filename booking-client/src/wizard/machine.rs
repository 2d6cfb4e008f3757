//! BookingWizard - the reservation state machine.

use chrono::NaiveDate;
use shared::{AvailabilityQuery, AvailabilityResponse, Booking, BookingCreate, PartySize, Table, TimeSlot};
use std::sync::Arc;

use super::clock::{Clock, SystemClock};
use super::draft::BookingDraft;
use super::error::{BOOKING_FAILED_MESSAGE, WizardError, WizardResult};
use super::step::{Step, Transition};
use crate::{BookingService, ClientResult};

// ============================================================================
// Requests
// ============================================================================

/// Which external call a ticket belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    Availability,
    Booking,
}

/// Ticket for one outstanding external call.
///
/// Issued by `begin_*`, handed back to `complete_*` together with the call's
/// result. A ticket is honored only while it is still the wizard's current
/// request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRequest {
    id: u64,
    kind: RequestKind,
    origin: Step,
}

impl PendingRequest {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn kind(&self) -> RequestKind {
        self.kind
    }

    /// Step the call was started from
    pub fn origin(&self) -> Step {
        self.origin
    }
}

/// What `complete_*` did with a response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// Result applied to the wizard
    Applied,
    /// Ticket no longer current (user navigated away); result dropped
    Discarded,
}

// ============================================================================
// Wizard State
// ============================================================================

/// Workflow state besides the draft
#[derive(Debug, Clone, Default)]
pub struct WizardState {
    current_step: Step,
    available_tables: Vec<Table>,
    error: Option<String>,
    booking: Option<Booking>,
    in_flight: Option<PendingRequest>,
    /// Call left behind by navigation; still running on the service
    abandoned: Option<PendingRequest>,
}

impl WizardState {
    pub fn current_step(&self) -> Step {
        self.current_step
    }

    pub fn available_tables(&self) -> &[Table] {
        &self.available_tables
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn booking(&self) -> Option<&Booking> {
        self.booking.as_ref()
    }

    /// True only while an external call is outstanding
    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn in_flight(&self) -> Option<&PendingRequest> {
        self.in_flight.as_ref()
    }

    /// Abandoned call whose response has not arrived yet
    pub fn abandoned(&self) -> Option<&PendingRequest> {
        self.abandoned.as_ref()
    }

    /// True while any call, current or abandoned, is still outstanding
    pub fn has_outstanding_call(&self) -> bool {
        self.in_flight.is_some() || self.abandoned.is_some()
    }
}

// ============================================================================
// BookingWizard
// ============================================================================

/// Guided reservation flow: `DateTime -> Tables -> Details -> Confirmation`.
///
/// All step changes go through one transition function; guards reject
/// invalid moves with a [`WizardError`] and leave the wizard untouched.
///
/// # Example
///
/// ```no_run
/// use booking_client::{BookingClient, BookingWizard, ClientConfig};
/// use shared::TimeSlot;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let service = BookingClient::from_config(&ClientConfig::from_env())?;
/// let mut wizard = BookingWizard::new();
///
/// wizard.set_date(chrono::Local::now().date_naive())?;
/// wizard.set_time(TimeSlot::H19)?;
/// wizard.check_availability(&service).await?;
///
/// let first = wizard.available_tables()[0].id.clone();
/// wizard.select_table(&first)?;
/// wizard.continue_to_details()?;
/// wizard.set_customer_name("Alex")?;
/// wizard.set_customer_phone("555-1234")?;
/// wizard.confirm_booking(&service).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct BookingWizard {
    draft: BookingDraft,
    state: WizardState,
    clock: Arc<dyn Clock>,
    /// Last issued request id; survives reset so old tickets never match
    last_request_id: u64,
}

impl Default for BookingWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl BookingWizard {
    /// Creates a wizard using the host's local date as "today"
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }

    pub fn with_clock(clock: impl Clock + 'static) -> Self {
        Self {
            draft: BookingDraft::default(),
            state: WizardState::default(),
            clock: Arc::new(clock),
            last_request_id: 0,
        }
    }

    // ========== Accessors ==========

    pub fn step(&self) -> Step {
        self.state.current_step
    }

    pub fn draft(&self) -> &BookingDraft {
        &self.draft
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn available_tables(&self) -> &[Table] {
        &self.state.available_tables
    }

    pub fn selected_table(&self) -> Option<&Table> {
        self.draft.selected_table.as_ref()
    }

    pub fn booking(&self) -> Option<&Booking> {
        self.state.booking.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.state.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// On the Tables step with nothing to choose from
    pub fn has_no_tables(&self) -> bool {
        self.state.current_step == Step::Tables && self.state.available_tables.is_empty()
    }

    /// Whether the "check availability" control should be enabled
    pub fn can_check_availability(&self) -> bool {
        self.state.current_step == Step::DateTime
            && self.draft.has_search()
            && !self.state.has_outstanding_call()
    }

    /// Whether the "continue" control on the Tables step should be enabled
    pub fn can_continue(&self) -> bool {
        self.state.current_step == Step::Tables && self.draft.selected_table.is_some()
    }

    /// Whether the "confirm booking" control should be enabled
    pub fn can_confirm(&self) -> bool {
        self.state.current_step == Step::Details
            && self.draft.has_contact()
            && !self.state.has_outstanding_call()
    }

    /// Clears the error banner; no effect on the flow
    pub fn dismiss_error(&mut self) {
        self.state.error = None;
    }

    // ========== Transition function ==========

    fn next_step(&self, transition: Transition) -> WizardResult<Step> {
        let from = self.state.current_step;
        transition
            .target(from)
            .ok_or(WizardError::InvalidTransition { from, transition })
    }

    fn transition(&mut self, transition: Transition) -> WizardResult<Step> {
        let from = self.state.current_step;
        let to = self.next_step(transition)?;
        self.state.current_step = to;
        tracing::info!(%from, %to, %transition, "Wizard step changed");
        Ok(to)
    }

    fn ensure_editable(&self, action: &'static str, step: Step) -> WizardResult<()> {
        if self.state.current_step != step {
            return Err(WizardError::NotAllowed {
                action,
                step: self.state.current_step,
            });
        }
        if self.is_loading() {
            return Err(WizardError::RequestInFlight);
        }
        Ok(())
    }

    /// Detaches the outstanding call, if any. Its response will be
    /// discarded, and no new call starts until that response arrives.
    fn abandon_in_flight(&mut self) {
        if let Some(pending) = self.state.in_flight.take() {
            tracing::debug!(
                request_id = pending.id,
                kind = ?pending.kind,
                "Abandoning in-flight request"
            );
            self.state.abandoned = Some(pending);
        }
    }

    fn ensure_no_outstanding_call(&self) -> WizardResult<()> {
        if self.state.has_outstanding_call() {
            return Err(WizardError::RequestInFlight);
        }
        Ok(())
    }

    fn issue_ticket(&mut self, kind: RequestKind) -> PendingRequest {
        self.last_request_id += 1;
        let ticket = PendingRequest {
            id: self.last_request_id,
            kind,
            origin: self.state.current_step,
        };
        self.state.error = None;
        self.state.in_flight = Some(ticket.clone());
        ticket
    }

    /// Checks that `ticket` is the live request of `kind`
    fn accept_ticket(&mut self, ticket: &PendingRequest, kind: RequestKind) -> WizardResult<bool> {
        if ticket.kind != kind {
            return Err(WizardError::TicketMismatch);
        }
        let current = self.state.in_flight.as_ref() == Some(ticket)
            && self.state.current_step == ticket.origin;
        if current {
            self.state.in_flight = None;
        } else if self.state.abandoned.as_ref() == Some(ticket) {
            self.state.abandoned = None;
        }
        Ok(current)
    }

    // ========== DateTime step ==========

    /// Sets the booking date; dates before today are rejected
    pub fn set_date(&mut self, date: NaiveDate) -> WizardResult<()> {
        self.ensure_editable("change the date", Step::DateTime)?;
        let today = self.clock.today();
        if date < today {
            return Err(WizardError::DateInPast { date, today });
        }
        tracing::debug!(%date, "Date selected");
        self.draft.date = Some(date);
        Ok(())
    }

    pub fn set_time(&mut self, time: TimeSlot) -> WizardResult<()> {
        self.ensure_editable("change the time", Step::DateTime)?;
        tracing::debug!(%time, "Time selected");
        self.draft.time = Some(time);
        Ok(())
    }

    /// Sets the time from its "HH:MM" form; only the fixed slots parse
    pub fn set_time_str(&mut self, time: &str) -> WizardResult<()> {
        let slot: TimeSlot = time.parse()?;
        self.set_time(slot)
    }

    pub fn set_party_size(&mut self, size: u8) -> WizardResult<PartySize> {
        self.ensure_editable("change the party size", Step::DateTime)?;
        self.draft.party_size = PartySize::new(size)?;
        Ok(self.draft.party_size)
    }

    /// "+" control; saturates at the maximum
    pub fn increment_party(&mut self) -> WizardResult<PartySize> {
        self.ensure_editable("change the party size", Step::DateTime)?;
        self.draft.party_size = self.draft.party_size.increment();
        Ok(self.draft.party_size)
    }

    /// "-" control; saturates at the minimum
    pub fn decrement_party(&mut self) -> WizardResult<PartySize> {
        self.ensure_editable("change the party size", Step::DateTime)?;
        self.draft.party_size = self.draft.party_size.decrement();
        Ok(self.draft.party_size)
    }

    /// Starts an availability check.
    ///
    /// Clears the error banner and marks the wizard loading. Send the query,
    /// then pass the result to [`complete_availability_check`].
    ///
    /// [`complete_availability_check`]: Self::complete_availability_check
    pub fn begin_availability_check(&mut self) -> WizardResult<(PendingRequest, AvailabilityQuery)> {
        self.next_step(Transition::AvailabilityLoaded)?;
        self.ensure_no_outstanding_call()?;
        let query = self.draft.availability_query(self.clock.today())?;
        let ticket = self.issue_ticket(RequestKind::Availability);
        tracing::debug!(
            request_id = ticket.id,
            date = %query.booking_date,
            time = %query.booking_time,
            party_size = %query.party_size,
            "Checking availability"
        );
        Ok((ticket, query))
    }

    /// Applies the availability result for `ticket`.
    ///
    /// Success (including an empty table list) moves to Tables. Failure sets
    /// the error banner, stays on DateTime and is returned as
    /// [`WizardError::AvailabilityCheckFailed`].
    pub fn complete_availability_check(
        &mut self,
        ticket: PendingRequest,
        result: ClientResult<AvailabilityResponse>,
    ) -> WizardResult<Completion> {
        if !self.accept_ticket(&ticket, RequestKind::Availability)? {
            tracing::warn!(
                request_id = ticket.id,
                step = %self.state.current_step,
                "Discarding stale availability response"
            );
            return Ok(Completion::Discarded);
        }

        match result {
            Ok(response) => {
                tracing::info!(
                    request_id = ticket.id,
                    tables = response.available_tables.len(),
                    "Availability loaded"
                );
                self.state.available_tables = response.available_tables;
                self.draft.selected_table = None;
                self.transition(Transition::AvailabilityLoaded)?;
                Ok(Completion::Applied)
            }
            Err(source) => {
                tracing::warn!(request_id = ticket.id, error = %source, "Availability check failed");
                let err = WizardError::AvailabilityCheckFailed { source };
                self.state.error = Some(err.to_string());
                Err(err)
            }
        }
    }

    /// Checks availability for the current search and applies the result
    pub async fn check_availability<S>(&mut self, service: &S) -> WizardResult<()>
    where
        S: BookingService + ?Sized,
    {
        let (ticket, query) = self.begin_availability_check()?;
        let result = service.check_availability(&query).await;
        self.complete_availability_check(ticket, result).map(|_| ())
    }

    // ========== Tables step ==========

    /// Selects one of the offered tables by id
    pub fn select_table(&mut self, table_id: &str) -> WizardResult<&Table> {
        if self.state.current_step != Step::Tables {
            return Err(WizardError::NotAllowed {
                action: "select a table",
                step: self.state.current_step,
            });
        }
        let table = self
            .state
            .available_tables
            .iter()
            .find(|t| t.id == table_id)
            .ok_or_else(|| WizardError::TableNotOffered(table_id.to_string()))?;
        tracing::debug!(table_id = %table.id, table_name = %table.name, "Table selected");
        Ok(self.draft.selected_table.insert(table.clone()))
    }

    pub fn continue_to_details(&mut self) -> WizardResult<()> {
        self.next_step(Transition::ContinueToDetails)?;
        if self.draft.selected_table.is_none() {
            return Err(WizardError::NoTableSelected);
        }
        self.transition(Transition::ContinueToDetails)?;
        Ok(())
    }

    /// From the no-tables state, return to DateTime keeping the search fields
    pub fn try_different_time(&mut self) -> WizardResult<()> {
        self.next_step(Transition::TryDifferentTime)?;
        if !self.state.available_tables.is_empty() {
            return Err(WizardError::TablesAvailable);
        }
        self.clear_table_step();
        self.transition(Transition::TryDifferentTime)?;
        Ok(())
    }

    fn clear_table_step(&mut self) {
        self.state.available_tables.clear();
        self.draft.selected_table = None;
    }

    // ========== Details step ==========

    pub fn set_customer_name(&mut self, name: impl Into<String>) -> WizardResult<()> {
        self.ensure_editable("edit contact details", Step::Details)?;
        self.draft.customer_name = name.into();
        Ok(())
    }

    pub fn set_customer_phone(&mut self, phone: impl Into<String>) -> WizardResult<()> {
        self.ensure_editable("edit contact details", Step::Details)?;
        self.draft.customer_phone = phone.into();
        Ok(())
    }

    pub fn set_special_requests(&mut self, requests: impl Into<String>) -> WizardResult<()> {
        self.ensure_editable("edit contact details", Step::Details)?;
        self.draft.special_requests = requests.into();
        Ok(())
    }

    /// Starts the create-booking call; see [`begin_availability_check`].
    ///
    /// [`begin_availability_check`]: Self::begin_availability_check
    pub fn begin_booking(&mut self) -> WizardResult<(PendingRequest, BookingCreate)> {
        self.next_step(Transition::BookingConfirmed)?;
        self.ensure_no_outstanding_call()?;
        let request = self.draft.booking_request()?;
        let ticket = self.issue_ticket(RequestKind::Booking);
        tracing::debug!(request_id = ticket.id, table_id = %request.table_id, "Creating booking");
        Ok((ticket, request))
    }

    /// Applies the create-booking result for `ticket`.
    ///
    /// Success stores the booking and moves to Confirmation. Failure keeps
    /// every entered field, sets the banner to the service's detail (or a
    /// generic message) and is returned as
    /// [`WizardError::BookingCreationFailed`].
    pub fn complete_booking(
        &mut self,
        ticket: PendingRequest,
        result: ClientResult<Booking>,
    ) -> WizardResult<Completion> {
        if !self.accept_ticket(&ticket, RequestKind::Booking)? {
            match &result {
                Ok(booking) => tracing::warn!(
                    request_id = ticket.id,
                    booking_id = %booking.id,
                    "Discarding booking response after navigation; booking exists on the service"
                ),
                Err(e) => tracing::warn!(
                    request_id = ticket.id,
                    error = %e,
                    "Discarding stale booking failure"
                ),
            }
            return Ok(Completion::Discarded);
        }

        match result {
            Ok(booking) => {
                tracing::info!(request_id = ticket.id, booking_id = %booking.id, "Booking confirmed");
                self.state.booking = Some(booking);
                self.transition(Transition::BookingConfirmed)?;
                Ok(Completion::Applied)
            }
            Err(source) => {
                let reason = source.detail().unwrap_or(BOOKING_FAILED_MESSAGE).to_string();
                tracing::warn!(request_id = ticket.id, error = %source, "Booking failed");
                self.state.error = Some(reason.clone());
                Err(WizardError::BookingCreationFailed { reason, source })
            }
        }
    }

    /// Submits the draft and applies the result
    pub async fn confirm_booking<S>(&mut self, service: &S) -> WizardResult<()>
    where
        S: BookingService + ?Sized,
    {
        let (ticket, request) = self.begin_booking()?;
        let result = service.create_booking(&request).await;
        self.complete_booking(ticket, result).map(|_| ())
    }

    // ========== Navigation ==========

    /// Steps back one page.
    ///
    /// Tables -> DateTime clears the offered tables and the selection.
    /// Details -> Tables keeps them. Any outstanding call is abandoned:
    /// loading clears, but a new call is rejected until the abandoned one
    /// completes.
    pub fn back(&mut self) -> WizardResult<Step> {
        let to = self.next_step(Transition::Back)?;
        self.abandon_in_flight();
        if to == Step::DateTime {
            self.clear_table_step();
        }
        self.transition(Transition::Back)
    }

    /// Discards everything and starts over (from Confirmation).
    ///
    /// An abandoned call is still tracked so its response is discarded.
    pub fn reset(&mut self) -> WizardResult<()> {
        self.next_step(Transition::Reset)?;
        self.abandon_in_flight();
        self.transition(Transition::Reset)?;
        self.draft = BookingDraft::default();
        self.state = WizardState {
            abandoned: self.state.abandoned.take(),
            ..WizardState::default()
        };
        Ok(())
    }
}
