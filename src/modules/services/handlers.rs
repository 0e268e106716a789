use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use crate::app_state::AppState;
use crate::db::{Service, ServiceRepository};
use crate::error::{AppError, AppResult};

#[derive(Debug, Deserialize)]
pub struct ServicesQuery {
    pub category: Option<String>,
}

/// All active services, optionally filtered by category.
pub async fn list_services(
    State(state): State<AppState>,
    Query(query): Query<ServicesQuery>,
) -> AppResult<Json<Vec<Service>>> {
    let services = match query.category {
        Some(category) => ServiceRepository::get_by_category(&state.db, &category).await?,
        None => ServiceRepository::get_all(&state.db).await?,
    };
    Ok(Json(services))
}

pub async fn get_service(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Service>> {
    ServiceRepository::get_by_id(&state.db, id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Service not found".to_string()))
}

pub async fn list_categories(State(state): State<AppState>) -> AppResult<Json<Vec<String>>> {
    let categories = ServiceRepository::categories(&state.db).await?;
    Ok(Json(categories))
}
