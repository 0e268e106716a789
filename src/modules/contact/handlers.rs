use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use validator::Validate;

use crate::app_state::AppState;
use crate::db::{ContactMessage, ContactRepository, NewContactMessage};
use crate::error::{AppError, AppResult};

#[derive(Debug, Serialize)]
pub struct SubmitContactResponse {
    pub message: String,
    pub id: i64,
}

pub async fn submit_contact(
    State(state): State<AppState>,
    Json(payload): Json<NewContactMessage>,
) -> AppResult<(StatusCode, Json<SubmitContactResponse>)> {
    let payload = payload.trimmed();
    payload
        .validate()
        .map_err(|err| AppError::Validation(err.to_string()))?;

    let id = ContactRepository::create(&state.db, &payload).await?;

    // Best-effort: a failed notification never fails the submission.
    state
        .mailer
        .send_contact_notification(&payload, &state.env.business.name)
        .await;

    Ok((
        StatusCode::CREATED,
        Json(SubmitContactResponse {
            message: "Your message has been sent successfully. We will get back to you soon!"
                .to_string(),
            id,
        }),
    ))
}

#[derive(Debug, Deserialize)]
pub struct MessagesQuery {
    pub unread: Option<String>,
}

/// Admin listing. Unprotected, like the rest of the admin surface.
pub async fn list_messages(
    State(state): State<AppState>,
    Query(query): Query<MessagesQuery>,
) -> AppResult<Json<Vec<ContactMessage>>> {
    let unread_only = query
        .unread
        .map(|value| value.eq_ignore_ascii_case("true"))
        .unwrap_or(false);
    let messages = ContactRepository::get_all(&state.db, unread_only).await?;
    Ok(Json(messages))
}

pub async fn mark_read(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Value>> {
    let updated = ContactRepository::mark_as_read(&state.db, id).await?;
    if !updated {
        return Err(AppError::NotFound("Message not found".to_string()));
    }
    Ok(Json(json!({ "message": "Message marked as read" })))
}
