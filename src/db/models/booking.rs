use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::{Date, OffsetDateTime};
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type, Serialize, Deserialize)]
#[sqlx(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
}

impl FromStr for BookingStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(BookingStatus::Pending),
            "confirmed" => Ok(BookingStatus::Confirmed),
            "cancelled" => Ok(BookingStatus::Cancelled),
            _ => Err(format!(
                "Invalid status. Must be one of: pending, confirmed, cancelled (got {s})"
            )),
        }
    }
}

/// Booking joined with the service it reserves, as returned to clients.
/// `booking_time` is stored zero-padded 24-hour "HH:MM".
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct BookingDetails {
    pub id: i64,
    pub service_id: i64,
    pub service_name: String,
    pub duration: i64,
    pub price: f64,
    pub client_name: String,
    pub client_email: String,
    pub client_phone: Option<String>,
    pub booking_date: Date,
    pub booking_time: String,
    pub notes: Option<String>,
    pub status: BookingStatus,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// Booking creation payload. The date and time stay strings here so the
/// handler can turn parse failures into 400s with useful messages.
#[derive(Debug, Deserialize, Validate)]
pub struct NewBooking {
    pub service_id: i64,
    #[validate(length(min = 1, message = "Missing required field: client_name"))]
    pub client_name: String,
    #[validate(length(min = 1, message = "Missing required field: client_email"))]
    pub client_email: String,
    pub client_phone: Option<String>,
    #[validate(length(min = 1, message = "Missing required field: booking_date"))]
    pub booking_date: String,
    #[validate(length(min = 1, message = "Missing required field: booking_time"))]
    pub booking_time: String,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateBookingStatus {
    pub status: String,
}
