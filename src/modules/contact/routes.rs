use axum::{
    routing::{get, patch, post},
    Router,
};

use super::handlers::{list_messages, mark_read, submit_contact};
use crate::app_state::AppState;

pub fn contact_routes() -> Router<AppState> {
    Router::new()
        .route("/contact", post(submit_contact))
        .route("/contact/messages", get(list_messages))
        .route("/contact/messages/{id}/read", patch(mark_read))
}
