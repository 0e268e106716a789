use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::app_state::AppState;
use crate::db::{GalleryImage, GalleryRepository};
use crate::error::AppResult;

#[derive(Debug, Deserialize)]
pub struct GalleryQuery {
    pub category: Option<String>,
}

pub async fn list_gallery(
    State(state): State<AppState>,
    Query(query): Query<GalleryQuery>,
) -> AppResult<Json<Vec<GalleryImage>>> {
    let images = match query.category {
        Some(category) => GalleryRepository::get_by_category(&state.db, &category).await?,
        None => GalleryRepository::get_all(&state.db).await?,
    };
    Ok(Json(images))
}

/// Featured images for the homepage strip.
pub async fn featured(State(state): State<AppState>) -> AppResult<Json<Vec<GalleryImage>>> {
    let images = GalleryRepository::get_featured(&state.db).await?;
    Ok(Json(images))
}

pub async fn list_categories(State(state): State<AppState>) -> AppResult<Json<Vec<String>>> {
    let categories = GalleryRepository::categories(&state.db).await?;
    Ok(Json(categories))
}
