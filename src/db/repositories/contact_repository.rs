use sqlx::SqlitePool;
use time::OffsetDateTime;

use crate::db::models::{ContactMessage, NewContactMessage};
use crate::db::DatabaseError;

pub struct ContactRepository;

impl ContactRepository {
    pub async fn create(
        pool: &SqlitePool,
        payload: &NewContactMessage,
    ) -> Result<i64, DatabaseError> {
        let result = sqlx::query(
            r#"
            INSERT INTO contact_messages (name, email, subject, message, is_read, created_at)
            VALUES (?, ?, ?, ?, 0, ?)
            "#,
        )
        .bind(&payload.name)
        .bind(&payload.email)
        .bind(&payload.subject)
        .bind(&payload.message)
        .bind(OffsetDateTime::now_utc())
        .execute(pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    pub async fn get_all(
        pool: &SqlitePool,
        unread_only: bool,
    ) -> Result<Vec<ContactMessage>, DatabaseError> {
        let query = if unread_only {
            "SELECT * FROM contact_messages WHERE is_read = 0 ORDER BY created_at DESC"
        } else {
            "SELECT * FROM contact_messages ORDER BY created_at DESC"
        };
        let messages = sqlx::query_as::<_, ContactMessage>(query)
            .fetch_all(pool)
            .await?;
        Ok(messages)
    }

    pub async fn mark_as_read(pool: &SqlitePool, id: i64) -> Result<bool, DatabaseError> {
        let result = sqlx::query("UPDATE contact_messages SET is_read = 1 WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn test_pool() -> SqlitePool {
        let pool = sqlx::sqlite::SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("in-memory pool");
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .expect("migrations");
        pool
    }

    fn message(name: &str) -> NewContactMessage {
        NewContactMessage {
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            subject: Some("Booking question".to_string()),
            message: "Do you have weekend openings?".to_string(),
        }
    }

    #[tokio::test]
    async fn stores_and_lists_messages() {
        let pool = test_pool().await;
        let id = ContactRepository::create(&pool, &message("Dana"))
            .await
            .unwrap();
        assert!(id > 0);

        let all = ContactRepository::get_all(&pool, false).await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].name, "Dana");
        assert!(!all[0].is_read);
    }

    #[tokio::test]
    async fn unread_filter_hides_read_messages() {
        let pool = test_pool().await;
        let first = ContactRepository::create(&pool, &message("Dana"))
            .await
            .unwrap();
        ContactRepository::create(&pool, &message("Noor"))
            .await
            .unwrap();

        assert!(ContactRepository::mark_as_read(&pool, first).await.unwrap());

        let unread = ContactRepository::get_all(&pool, true).await.unwrap();
        assert_eq!(unread.len(), 1);
        assert_eq!(unread[0].name, "Noor");
    }

    #[tokio::test]
    async fn marking_a_missing_message_reports_false() {
        let pool = test_pool().await;
        assert!(!ContactRepository::mark_as_read(&pool, 7).await.unwrap());
    }
}
