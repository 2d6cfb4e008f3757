//! Walks one reservation through the wizard against a running booking
//! service (BOOKING_API_URL, default http://localhost:8001).
//!
//! ```text
//! cargo run -p booking-mock &
//! cargo run -p booking-client --example wizard_demo
//! ```

use booking_client::{BookingClient, BookingService, BookingWizard, ClientConfig, TimeSlot};
use chrono::Days;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "booking_client=debug,wizard_demo=info".into()),
        )
        .with_target(false)
        .init();

    let config = ClientConfig::from_env();
    info!(base_url = %config.base_url, "Connecting to booking service");
    let service = BookingClient::from_config(&config)?;

    let health = service.health().await?;
    info!(status = %health.status, message = %health.message, "Service health");

    let mut wizard = BookingWizard::new();
    let tomorrow = wizard
        .today()
        .checked_add_days(Days::new(1))
        .ok_or("date out of range")?;

    // Step 1: date, time, party
    wizard.set_date(tomorrow)?;
    wizard.set_time(TimeSlot::H19)?;
    wizard.increment_party()?;
    wizard.increment_party()?;
    info!(step = %wizard.step(), party = %wizard.draft().party_size(), "Checking availability");
    wizard.check_availability(&service).await?;

    // Step 2: table
    if wizard.has_no_tables() {
        info!("No tables available, trying 20:00");
        wizard.try_different_time()?;
        wizard.set_time(TimeSlot::H20)?;
        wizard.check_availability(&service).await?;
    }
    for table in wizard.available_tables() {
        info!(
            id = %table.id,
            name = %table.name,
            capacity = table.capacity,
            location = table.location.as_deref().unwrap_or("-"),
            "Available"
        );
    }
    let Some(table_id) = wizard.available_tables().first().map(|t| t.id.clone()) else {
        info!("Nothing free tomorrow evening");
        return Ok(());
    };
    wizard.select_table(&table_id)?;
    wizard.continue_to_details()?;

    // Step 3: contact details
    wizard.set_customer_name("Alex")?;
    wizard.set_customer_phone("555-1234")?;
    wizard.set_special_requests("Birthday")?;
    wizard.confirm_booking(&service).await?;

    // Step 4: confirmation
    if let Some(booking) = wizard.booking() {
        info!(
            id = %booking.id,
            table = %booking.table_name,
            date = %booking.booking_date,
            time = %booking.booking_time,
            party = booking.party_size,
            "Reservation confirmed"
        );
    }

    let bookings = service.list_bookings(Some(tomorrow)).await?;
    info!(count = bookings.len(), date = %tomorrow, "Bookings on file");

    wizard.reset()?;
    Ok(())
}
