use axum::{routing::get, Router};

use super::handlers::{get_service, list_categories, list_services};
use crate::app_state::AppState;

pub fn services_routes() -> Router<AppState> {
    Router::new()
        .route("/services", get(list_services))
        .route("/services/categories", get(list_categories))
        .route("/services/{id}", get(get_service))
}
