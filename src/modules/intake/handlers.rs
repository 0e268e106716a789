use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use validator::Validate;

use crate::app_state::AppState;
use crate::db::{IntakeForm, IntakeRepository, NewIntakeForm, UpdateIntakeStatus};
use crate::error::{AppError, AppResult};

#[derive(Debug, Serialize)]
pub struct SubmitIntakeResponse {
    pub success: bool,
    pub message: String,
    pub form_id: i64,
    pub email_sent: bool,
}

pub async fn submit_intake(
    State(state): State<AppState>,
    Json(payload): Json<NewIntakeForm>,
) -> AppResult<(StatusCode, Json<SubmitIntakeResponse>)> {
    payload
        .validate()
        .map_err(|err| AppError::Validation(err.to_string()))?;

    // Conditional field: mobile appointments need somewhere to go.
    if payload.service_location == "mobile"
        && payload
            .address
            .as_deref()
            .map_or(true, |addr| addr.trim().is_empty())
    {
        return Err(AppError::Validation(
            "Address is required for mobile appointments".to_string(),
        ));
    }

    let form_id = IntakeRepository::create(&state.db, &payload).await?;

    let email_sent = state
        .mailer
        .send_intake_notification(&payload, &state.env.business.name)
        .await;

    Ok((
        StatusCode::CREATED,
        Json(SubmitIntakeResponse {
            success: true,
            message:
                "Intake form submitted successfully! We will review your information and contact you soon."
                    .to_string(),
            form_id,
            email_sent,
        }),
    ))
}

#[derive(Debug, Deserialize)]
pub struct IntakeListQuery {
    pub status: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct IntakeListResponse {
    pub success: bool,
    pub forms: Vec<IntakeForm>,
    pub count: usize,
}

/// Admin listing of intake forms, optionally filtered by status.
pub async fn list_intake_forms(
    State(state): State<AppState>,
    Query(query): Query<IntakeListQuery>,
) -> AppResult<Json<IntakeListResponse>> {
    let status = query
        .status
        .map(|value| value.parse())
        .transpose()
        .map_err(AppError::BadRequest)?;

    let forms = IntakeRepository::get_all(&state.db, status).await?;
    let count = forms.len();
    Ok(Json(IntakeListResponse {
        success: true,
        forms,
        count,
    }))
}

#[derive(Debug, Serialize)]
pub struct IntakeFormResponse {
    pub success: bool,
    pub form: IntakeForm,
}

pub async fn get_intake_form(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<IntakeFormResponse>> {
    let form = IntakeRepository::get_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Intake form not found".to_string()))?;
    Ok(Json(IntakeFormResponse {
        success: true,
        form,
    }))
}

pub async fn update_intake_status(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateIntakeStatus>,
) -> AppResult<Json<Value>> {
    let status = payload.status.parse().map_err(AppError::BadRequest)?;

    let updated = IntakeRepository::update_status(&state.db, id, status).await?;
    if !updated {
        return Err(AppError::NotFound("Intake form not found".to_string()));
    }

    Ok(Json(json!({
        "success": true,
        "message": format!("Status updated to {status}"),
    })))
}
