// booking-client/tests/wizard_flow.rs
// Wizard driven end to end against the in-memory booking service

use booking_client::wizard::{BOOKING_FAILED_MESSAGE, FixedClock};
use booking_client::{
    BookingClient, BookingService, BookingWizard, OneshotHttpClient, Step, TimeSlot, WizardError,
};
use booking_mock::AppState;
use chrono::NaiveDate;
use shared::{BookingCreate, PartySize, Table};
use std::sync::Arc;

type InProcessClient = BookingClient<OneshotHttpClient>;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn setup() -> InProcessClient {
    let state = AppState::with_tables(vec![
        Table::new("1", "Table 1", 4, "Window"),
        Table::new("2", "Table 2", 6, "Center"),
        Table::new("3", "Table 3", 2, "Bar"),
    ]);
    let router = booking_mock::router(Arc::new(state));
    BookingClient::new(OneshotHttpClient::new(router))
}

fn wizard() -> BookingWizard {
    BookingWizard::with_clock(FixedClock(date(2025, 6, 1)))
}

async fn search(wizard: &mut BookingWizard, service: &InProcessClient, party: u8) {
    wizard.set_date(date(2025, 6, 10)).unwrap();
    wizard.set_time(TimeSlot::H19).unwrap();
    wizard.set_party_size(party).unwrap();
    wizard.check_availability(service).await.unwrap();
}

async fn fill_details(wizard: &mut BookingWizard, table_id: &str) {
    wizard.select_table(table_id).unwrap();
    wizard.continue_to_details().unwrap();
    wizard.set_customer_name("Alex").unwrap();
    wizard.set_customer_phone("555-1234").unwrap();
}

#[tokio::test]
async fn test_complete_reservation() {
    let service = setup();
    let mut wizard = wizard();

    search(&mut wizard, &service, 4).await;
    let offered: Vec<&str> = wizard.available_tables().iter().map(|t| t.id.as_str()).collect();
    assert_eq!(offered, vec!["1", "2"]);

    fill_details(&mut wizard, "2").await;
    wizard.set_special_requests("Window if possible").unwrap();
    wizard.confirm_booking(&service).await.unwrap();

    assert_eq!(wizard.step(), Step::Confirmation);
    let booking = wizard.booking().unwrap().clone();
    assert!(!booking.id.is_empty());
    assert_eq!(booking.table_name, "Table 2");
    assert_eq!(booking.booking_date, date(2025, 6, 10));
    assert_eq!(booking.booking_time, "19:00");
    assert_eq!(booking.party_size, 4);
    assert_eq!(booking.customer_name, "Alex");
    assert_eq!(booking.special_requests.as_deref(), Some("Window if possible"));

    // The service holds the same record
    let stored = service.get_booking(&booking.id).await.unwrap();
    assert_eq!(stored, booking);

    wizard.reset().unwrap();
    assert_eq!(wizard.step(), Step::DateTime);
    assert!(wizard.booking().is_none());
}

#[tokio::test]
async fn test_booked_table_no_longer_offered() {
    let service = setup();

    let mut first = wizard();
    search(&mut first, &service, 4).await;
    fill_details(&mut first, "2").await;
    first.confirm_booking(&service).await.unwrap();

    let mut second = wizard();
    search(&mut second, &service, 4).await;
    let offered: Vec<&str> = second.available_tables().iter().map(|t| t.id.as_str()).collect();
    assert_eq!(offered, vec!["1"]);
}

#[tokio::test]
async fn test_lost_race_surfaces_server_detail() {
    let service = setup();

    let mut first = wizard();
    let mut second = wizard();
    search(&mut first, &service, 4).await;
    search(&mut second, &service, 4).await;
    fill_details(&mut first, "2").await;
    fill_details(&mut second, "2").await;

    first.confirm_booking(&service).await.unwrap();
    let err = second.confirm_booking(&service).await.unwrap_err();

    assert!(matches!(err, WizardError::BookingCreationFailed { .. }));
    assert_eq!(second.step(), Step::Details);
    assert_eq!(second.error(), Some("Table is already booked for this time"));
    assert_eq!(second.draft().customer_name(), "Alex");
    assert_ne!(second.error(), Some(BOOKING_FAILED_MESSAGE));

    // Back to the list, the taken table is gone after a fresh search
    second.back().unwrap();
    second.back().unwrap();
    second.check_availability(&service).await.unwrap();
    assert!(second.available_tables().iter().all(|t| t.id != "2"));
}

#[tokio::test]
async fn test_no_tables_then_different_time() {
    let service = setup();
    let mut wizard = wizard();

    search(&mut wizard, &service, 8).await;
    assert!(wizard.has_no_tables());
    assert!(wizard.error().is_none());

    wizard.try_different_time().unwrap();
    assert_eq!(wizard.step(), Step::DateTime);
    assert_eq!(wizard.draft().party_size().get(), 8);

    wizard.set_party_size(6).unwrap();
    wizard.check_availability(&service).await.unwrap();
    assert_eq!(wizard.available_tables().len(), 1);
}

#[tokio::test]
async fn test_capacity_rejection_from_service() {
    let service = setup();
    let request = BookingCreate {
        table_id: "3".to_string(),
        customer_name: "Alex".to_string(),
        customer_phone: "555-1234".to_string(),
        party_size: PartySize::new(5).unwrap(),
        booking_date: date(2025, 6, 10),
        booking_time: TimeSlot::H20,
        special_requests: None,
    };

    let err = service.create_booking(&request).await.unwrap_err();
    assert_eq!(err.status(), Some(400));
    assert_eq!(err.detail(), Some("Party size exceeds table capacity"));

    let unknown = BookingCreate {
        table_id: "missing".to_string(),
        ..request
    };
    let err = service.create_booking(&unknown).await.unwrap_err();
    assert_eq!(err.status(), Some(404));
    assert_eq!(err.detail(), Some("Table not found"));
}

#[tokio::test]
async fn test_booking_lookup_with_reserved_characters() {
    let service = setup();
    let mut wizard = wizard();
    search(&mut wizard, &service, 2).await;
    fill_details(&mut wizard, "3").await;
    wizard.confirm_booking(&service).await.unwrap();
    let id = wizard.booking().unwrap().id.clone();

    // A query string inside the id must not select the real booking
    let err = service
        .get_booking(&format!("{}?date=2025-06-10", id))
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(404));
    assert_eq!(err.detail(), Some("Booking not found"));

    for odd in ["a b", "a/b", "50%"] {
        let err = service.get_booking(odd).await.unwrap_err();
        assert_eq!(err.status(), Some(404), "id {:?}", odd);
        assert_eq!(err.detail(), Some("Booking not found"), "id {:?}", odd);
    }

    assert_eq!(service.get_booking(&id).await.unwrap().id, id);
}
