use axum::{routing::get, Router};

use super::handlers::{featured, list_categories, list_gallery};
use crate::app_state::AppState;

pub fn gallery_routes() -> Router<AppState> {
    Router::new()
        .route("/gallery", get(list_gallery))
        .route("/gallery/featured", get(featured))
        .route("/gallery/categories", get(list_categories))
}
