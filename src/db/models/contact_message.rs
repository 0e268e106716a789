use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use validator::Validate;

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct ContactMessage {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
    pub message: String,
    pub is_read: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewContactMessage {
    #[validate(length(min = 1, message = "Missing required field: name"))]
    pub name: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    pub subject: Option<String>,
    #[validate(length(min = 1, message = "Missing required field: message"))]
    pub message: String,
}

impl NewContactMessage {
    /// Whitespace-only input counts as missing, so trim before validating.
    pub fn trimmed(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            subject: self
                .subject
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            message: self.message.trim().to_string(),
        }
    }
}
