use axum::{
    routing::{get, patch, post},
    Router,
};

use super::handlers::{get_intake_form, list_intake_forms, submit_intake, update_intake_status};
use crate::app_state::AppState;

pub fn intake_routes() -> Router<AppState> {
    Router::new()
        .route("/intake", post(submit_intake).get(list_intake_forms))
        .route("/intake/{id}", get(get_intake_form))
        .route("/intake/{id}/status", patch(update_intake_status))
}
