use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use time::macros::format_description;
use time::{Date, OffsetDateTime};
use tracing::warn;
use validator::Validate;

use crate::app_state::AppState;
use crate::db::{
    BookingDetails, BookingRepository, DatabaseError, NewBooking, ServiceRepository,
    UpdateBookingStatus,
};
use crate::error::{AppError, AppResult};
use crate::scheduling::{
    self, compute_available_slots, BusyInterval, DEFAULT_SERVICE_DURATION_MINUTES,
};

fn parse_date(value: &str) -> Result<Date, AppError> {
    Date::parse(value, format_description!("[year]-[month]-[day]"))
        .map_err(|_| AppError::BadRequest("Invalid date format. Use YYYY-MM-DD".to_string()))
}

#[derive(Debug, Serialize)]
pub struct CreateBookingResponse {
    pub message: String,
    pub booking: BookingDetails,
}

pub async fn create_booking(
    State(state): State<AppState>,
    Json(payload): Json<NewBooking>,
) -> AppResult<(StatusCode, Json<CreateBookingResponse>)> {
    payload
        .validate()
        .map_err(|err| AppError::Validation(err.to_string()))?;

    ServiceRepository::get_by_id(&state.db, payload.service_id)
        .await?
        .ok_or_else(|| AppError::BadRequest("Invalid service selected".to_string()))?;

    let booking_date = parse_date(&payload.booking_date)?;
    let booking_time = scheduling::parse_hhmm(&payload.booking_time)
        .ok_or_else(|| AppError::BadRequest("Invalid time format. Use HH:MM".to_string()))?;

    let today = OffsetDateTime::now_utc().date();
    if scheduling::is_past_date(booking_date, today) {
        return Err(AppError::BadRequest(
            "Cannot book appointments in the past".to_string(),
        ));
    }

    // Times are stored zero-padded so the per-slot unique index treats
    // "9:30" and "09:30" as the same slot.
    let normalized_time = scheduling::format_hhmm(booking_time);
    let id = BookingRepository::create(&state.db, &payload, booking_date, &normalized_time)
        .await
        .map_err(|err| match err {
            DatabaseError::Duplicate => {
                AppError::Conflict("This time slot is no longer available".to_string())
            }
            other => AppError::from(other),
        })?;

    let booking = BookingRepository::get_details(&state.db, id)
        .await?
        .ok_or_else(|| {
            AppError::InternalServerError("Booking disappeared after insert".to_string())
        })?;

    Ok((
        StatusCode::CREATED,
        Json(CreateBookingResponse {
            message: "Booking created successfully".to_string(),
            booking,
        }),
    ))
}

pub async fn get_booking(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<BookingDetails>> {
    BookingRepository::get_details(&state.db, id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Booking not found".to_string()))
}

pub async fn update_booking_status(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateBookingStatus>,
) -> AppResult<Json<Value>> {
    let status = payload.status.parse().map_err(AppError::BadRequest)?;

    let updated = BookingRepository::update_status(&state.db, id, status).await?;
    if !updated {
        return Err(AppError::NotFound("Booking not found".to_string()));
    }

    Ok(Json(json!({
        "message": "Booking status updated successfully"
    })))
}

#[derive(Debug, Deserialize)]
pub struct AvailableTimesQuery {
    pub date: Option<String>,
    pub service_id: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct AvailableTimesResponse {
    pub date: String,
    pub available_times: Vec<String>,
}

/// Bookable start times for one day. The requested service sets the
/// appointment length; an unknown or omitted service falls back to the
/// default duration rather than erroring.
pub async fn available_times(
    State(state): State<AppState>,
    Query(query): Query<AvailableTimesQuery>,
) -> AppResult<Json<AvailableTimesResponse>> {
    let date_str = query
        .date
        .ok_or_else(|| AppError::BadRequest("Date is required".to_string()))?;
    let date = parse_date(&date_str)?;

    let duration = match query.service_id {
        Some(service_id) => match ServiceRepository::get_by_id(&state.db, service_id).await? {
            Some(service) => u16::try_from(service.duration).map_err(|_| {
                AppError::Validation(format!(
                    "Service duration out of range: {}",
                    service.duration
                ))
            })?,
            None => DEFAULT_SERVICE_DURATION_MINUTES,
        },
        None => DEFAULT_SERVICE_DURATION_MINUTES,
    };

    let booked = BookingRepository::booked_times_for_date(&state.db, date).await?;
    let busy: Vec<BusyInterval> = booked
        .iter()
        .filter_map(|(time, duration)| {
            match (scheduling::parse_hhmm(time), u16::try_from(*duration)) {
                (Some(start), Ok(duration)) => Some(BusyInterval { start, duration }),
                _ => {
                    warn!("Skipping malformed booking entry: {time} ({duration} min)");
                    None
                }
            }
        })
        .collect();

    let slots = compute_available_slots(
        duration,
        state.env.booking.business_hours(),
        state.env.booking.slot_minutes,
        &busy,
    )?;

    Ok(Json(AvailableTimesResponse {
        date: date_str,
        available_times: slots.into_iter().map(scheduling::format_hhmm).collect(),
    }))
}
