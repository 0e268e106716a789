use axum::{
    routing::{get, patch, post},
    Router,
};

use super::handlers::{available_times, create_booking, get_booking, update_booking_status};
use crate::app_state::AppState;

pub fn bookings_routes() -> Router<AppState> {
    Router::new()
        .route("/bookings", post(create_booking))
        .route("/bookings/{id}", get(get_booking))
        .route("/bookings/{id}/status", patch(update_booking_status))
        .route("/available-times", get(available_times))
}
