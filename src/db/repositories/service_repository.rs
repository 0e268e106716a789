use sqlx::SqlitePool;

use crate::db::models::Service;
use crate::db::DatabaseError;

pub struct ServiceRepository;

impl ServiceRepository {
    pub async fn get_all(pool: &SqlitePool) -> Result<Vec<Service>, DatabaseError> {
        let services = sqlx::query_as::<_, Service>(
            "SELECT * FROM services WHERE is_active = 1 ORDER BY category, name",
        )
        .fetch_all(pool)
        .await?;
        Ok(services)
    }

    pub async fn get_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Service>, DatabaseError> {
        let service = sqlx::query_as::<_, Service>("SELECT * FROM services WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(service)
    }

    pub async fn get_by_category(
        pool: &SqlitePool,
        category: &str,
    ) -> Result<Vec<Service>, DatabaseError> {
        let services = sqlx::query_as::<_, Service>(
            "SELECT * FROM services WHERE category = ? AND is_active = 1 ORDER BY name",
        )
        .bind(category)
        .fetch_all(pool)
        .await?;
        Ok(services)
    }

    pub async fn categories(pool: &SqlitePool) -> Result<Vec<String>, DatabaseError> {
        let categories = sqlx::query_scalar::<_, String>(
            "SELECT DISTINCT category FROM services WHERE is_active = 1 ORDER BY category",
        )
        .fetch_all(pool)
        .await?;
        Ok(categories)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::seed;

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
        seed::seed_database(&pool).await.expect("seed");
        pool
    }

    #[tokio::test]
    async fn lists_only_active_services_in_order() {
        let pool = test_pool().await;
        let services = ServiceRepository::get_all(&pool).await.unwrap();
        assert!(!services.is_empty());
        assert!(services.iter().all(|s| s.is_active));
        let keys: Vec<_> = services
            .iter()
            .map(|s| (s.category.clone(), s.name.clone()))
            .collect();
        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted);
    }

    #[tokio::test]
    async fn looks_up_a_service_by_id() {
        let pool = test_pool().await;
        let service = ServiceRepository::get_by_id(&pool, 1).await.unwrap();
        assert!(service.is_some());
        assert!(ServiceRepository::get_by_id(&pool, 9999)
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn filters_by_category() {
        let pool = test_pool().await;
        let hair = ServiceRepository::get_by_category(&pool, "Hair")
            .await
            .unwrap();
        assert!(!hair.is_empty());
        assert!(hair.iter().all(|s| s.category == "Hair"));
    }

    #[tokio::test]
    async fn categories_are_distinct_and_sorted() {
        let pool = test_pool().await;
        let categories = ServiceRepository::categories(&pool).await.unwrap();
        assert_eq!(
            categories,
            vec!["Body", "Facial", "Hair", "Nailcare"]
                .into_iter()
                .map(String::from)
                .collect::<Vec<_>>()
        );
    }
}
