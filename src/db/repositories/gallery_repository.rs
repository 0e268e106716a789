use sqlx::SqlitePool;

use crate::db::models::GalleryImage;
use crate::db::DatabaseError;

pub struct GalleryRepository;

impl GalleryRepository {
    pub async fn get_all(pool: &SqlitePool) -> Result<Vec<GalleryImage>, DatabaseError> {
        let images =
            sqlx::query_as::<_, GalleryImage>("SELECT * FROM gallery_images ORDER BY sort_order")
                .fetch_all(pool)
                .await?;
        Ok(images)
    }

    pub async fn get_by_category(
        pool: &SqlitePool,
        category: &str,
    ) -> Result<Vec<GalleryImage>, DatabaseError> {
        let images = sqlx::query_as::<_, GalleryImage>(
            "SELECT * FROM gallery_images WHERE category = ? ORDER BY sort_order",
        )
        .bind(category)
        .fetch_all(pool)
        .await?;
        Ok(images)
    }

    pub async fn get_featured(pool: &SqlitePool) -> Result<Vec<GalleryImage>, DatabaseError> {
        let images = sqlx::query_as::<_, GalleryImage>(
            "SELECT * FROM gallery_images WHERE is_featured = 1 ORDER BY sort_order LIMIT 4",
        )
        .fetch_all(pool)
        .await?;
        Ok(images)
    }

    pub async fn categories(pool: &SqlitePool) -> Result<Vec<String>, DatabaseError> {
        let categories = sqlx::query_scalar::<_, String>(
            "SELECT DISTINCT category FROM gallery_images WHERE category IS NOT NULL ORDER BY category",
        )
        .fetch_all(pool)
        .await?;
        Ok(categories)
    }
}
