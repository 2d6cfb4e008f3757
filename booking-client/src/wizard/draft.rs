//! In-progress reservation data.

use chrono::NaiveDate;
use shared::{AvailabilityQuery, BookingCreate, PartySize, Table, TimeSlot};

use super::error::{WizardError, WizardResult};

/// The reservation being composed.
///
/// Owned by the wizard and only mutated through it; hosts read it back via
/// the getters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingDraft {
    pub(crate) date: Option<NaiveDate>,
    pub(crate) time: Option<TimeSlot>,
    pub(crate) party_size: PartySize,
    pub(crate) selected_table: Option<Table>,
    pub(crate) customer_name: String,
    pub(crate) customer_phone: String,
    pub(crate) special_requests: String,
}

impl BookingDraft {
    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    pub fn time(&self) -> Option<TimeSlot> {
        self.time
    }

    pub fn party_size(&self) -> PartySize {
        self.party_size
    }

    pub fn selected_table(&self) -> Option<&Table> {
        self.selected_table.as_ref()
    }

    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    pub fn customer_phone(&self) -> &str {
        &self.customer_phone
    }

    pub fn special_requests(&self) -> &str {
        &self.special_requests
    }

    /// Search fields are complete (button-enable check, ignores the date floor)
    pub fn has_search(&self) -> bool {
        self.date.is_some() && self.time.is_some()
    }

    /// Contact fields are filled in
    pub fn has_contact(&self) -> bool {
        !self.customer_name.trim().is_empty() && !self.customer_phone.trim().is_empty()
    }

    /// Build the availability query, enforcing the date/time gates
    pub(crate) fn availability_query(&self, today: NaiveDate) -> WizardResult<AvailabilityQuery> {
        let date = self.date.ok_or(WizardError::MissingField("date"))?;
        if date < today {
            return Err(WizardError::DateInPast { date, today });
        }
        let time = self.time.ok_or(WizardError::MissingField("time"))?;

        Ok(AvailabilityQuery {
            booking_date: date,
            booking_time: time,
            party_size: self.party_size,
        })
    }

    /// Build the create-booking payload, enforcing the presence gates
    pub(crate) fn booking_request(&self) -> WizardResult<BookingCreate> {
        let table = self
            .selected_table
            .as_ref()
            .ok_or(WizardError::NoTableSelected)?;
        let date = self.date.ok_or(WizardError::MissingField("date"))?;
        let time = self.time.ok_or(WizardError::MissingField("time"))?;

        let customer_name = self.customer_name.trim();
        if customer_name.is_empty() {
            return Err(WizardError::MissingField("customer_name"));
        }
        let customer_phone = self.customer_phone.trim();
        if customer_phone.is_empty() {
            return Err(WizardError::MissingField("customer_phone"));
        }
        let special_requests = Some(self.special_requests.trim())
            .filter(|s| !s.is_empty())
            .map(str::to_string);

        Ok(BookingCreate {
            table_id: table.id.clone(),
            customer_name: customer_name.to_string(),
            customer_phone: customer_phone.to_string(),
            party_size: self.party_size,
            booking_date: date,
            booking_time: time,
            special_requests,
        })
    }
}
