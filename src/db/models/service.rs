use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Service {
    pub id: i64,
    pub category: String,
    pub name: String,
    pub description: Option<String>,
    /// Appointment length in minutes.
    pub duration: i64,
    pub price: f64,
    pub is_active: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}
