use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct GalleryImage {
    pub id: i64,
    pub filename: String,
    pub alt_text: Option<String>,
    pub category: Option<String>,
    pub is_featured: bool,
    pub sort_order: i64,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}
