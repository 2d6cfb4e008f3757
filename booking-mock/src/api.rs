//! Booking API routes

use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    routing::{get, post},
};
use chrono::NaiveDate;
use serde::Deserialize;
use shared::{AvailabilityQuery, AvailabilityResponse, BookingCreate, HealthResponse, Table};
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::error::ApiResult;
use crate::state::{AppState, BookingRecord};

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/tables", get(list_tables))
        .route("/api/check-availability", post(check_availability))
        .route("/api/bookings", get(list_bookings).post(create_booking))
        .route("/api/bookings/{id}", get(get_booking))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(TimeoutLayer::with_status_code(
            http::StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(30),
        ))
        .with_state(state)
}

/// GET /api/health
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::healthy("Bar booking API is running"))
}

/// GET /api/tables
async fn list_tables(State(state): State<Arc<AppState>>) -> Json<Vec<Table>> {
    Json(state.tables().await)
}

/// POST /api/check-availability
async fn check_availability(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<AvailabilityQuery>, JsonRejection>,
) -> ApiResult<Json<AvailabilityResponse>> {
    let Json(query) = payload?;
    let tables = state.available_tables(&query).await;
    tracing::debug!(
        date = %query.booking_date,
        time = %query.booking_time,
        party_size = %query.party_size,
        available = tables.len(),
        "Availability checked"
    );
    Ok(Json(AvailabilityResponse::for_query(&query, tables)))
}

/// POST /api/bookings
async fn create_booking(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<BookingCreate>, JsonRejection>,
) -> ApiResult<Json<BookingRecord>> {
    let Json(request) = payload?;
    let record = state.create_booking(request).await?;
    Ok(Json(record))
}

#[derive(Debug, Deserialize)]
struct BookingsFilter {
    date: Option<NaiveDate>,
}

/// GET /api/bookings?date=YYYY-MM-DD
async fn list_bookings(
    State(state): State<Arc<AppState>>,
    filter: Result<Query<BookingsFilter>, QueryRejection>,
) -> ApiResult<Json<Vec<BookingRecord>>> {
    let Query(filter) = filter?;
    Ok(Json(state.bookings(filter.date).await))
}

/// GET /api/bookings/{id}
async fn get_booking(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<BookingRecord>> {
    Ok(Json(state.booking(&id).await?))
}
