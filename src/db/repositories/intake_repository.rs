use sqlx::SqlitePool;
use time::OffsetDateTime;

use crate::db::models::{IntakeForm, IntakeStatus, NewIntakeForm};
use crate::db::DatabaseError;

pub struct IntakeRepository;

impl IntakeRepository {
    pub async fn create(pool: &SqlitePool, payload: &NewIntakeForm) -> Result<i64, DatabaseError> {
        let result = sqlx::query(
            r#"
            INSERT INTO intake_forms
                (client_name, email, phone, client_type, service_location, address,
                 service_requested, hair_length, desired_style, desired_style_other, hair_type,
                 sensitive_to_noise, sensitive_to_touch, does_not_like_water, nervous_anxious,
                 enjoys_fidget_toys, needs_weighted_cape, requires_quiet_environment,
                 other_sensory_needs, uses_wheelchair, limited_mobility, has_behaviours,
                 behaviour_notes, additional_notes, status, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, 'new', ?)
            "#,
        )
        .bind(&payload.client_name)
        .bind(&payload.email)
        .bind(&payload.phone)
        .bind(&payload.client_type)
        .bind(&payload.service_location)
        .bind(&payload.address)
        .bind(&payload.service_requested)
        .bind(&payload.hair_length)
        .bind(&payload.desired_style)
        .bind(&payload.desired_style_other)
        .bind(&payload.hair_type)
        .bind(payload.sensitive_to_noise)
        .bind(payload.sensitive_to_touch)
        .bind(payload.does_not_like_water)
        .bind(payload.nervous_anxious)
        .bind(payload.enjoys_fidget_toys)
        .bind(payload.needs_weighted_cape)
        .bind(payload.requires_quiet_environment)
        .bind(&payload.other_sensory_needs)
        .bind(payload.uses_wheelchair)
        .bind(payload.limited_mobility)
        .bind(payload.has_behaviours)
        .bind(&payload.behaviour_notes)
        .bind(&payload.additional_notes)
        .bind(OffsetDateTime::now_utc())
        .execute(pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    pub async fn get_all(
        pool: &SqlitePool,
        status: Option<IntakeStatus>,
    ) -> Result<Vec<IntakeForm>, DatabaseError> {
        let forms = match status {
            Some(status) => {
                sqlx::query_as::<_, IntakeForm>(
                    "SELECT * FROM intake_forms WHERE status = ? ORDER BY created_at DESC",
                )
                .bind(status)
                .fetch_all(pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, IntakeForm>(
                    "SELECT * FROM intake_forms ORDER BY created_at DESC",
                )
                .fetch_all(pool)
                .await?
            }
        };
        Ok(forms)
    }

    pub async fn get_by_id(pool: &SqlitePool, id: i64) -> Result<Option<IntakeForm>, DatabaseError> {
        let form = sqlx::query_as::<_, IntakeForm>("SELECT * FROM intake_forms WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(form)
    }

    pub async fn update_status(
        pool: &SqlitePool,
        id: i64,
        status: IntakeStatus,
    ) -> Result<bool, DatabaseError> {
        let result = sqlx::query("UPDATE intake_forms SET status = ? WHERE id = ?")
            .bind(status)
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

    fn sample_form() -> NewIntakeForm {
        NewIntakeForm {
            client_name: "Jordan Lee".to_string(),
            email: "jordan@example.com".to_string(),
            phone: None,
            client_type: "child".to_string(),
            service_location: "in-salon".to_string(),
            address: None,
            service_requested: Some("First haircut".to_string()),
            hair_length: Some("short".to_string()),
            desired_style: Some("trim".to_string()),
            desired_style_other: None,
            hair_type: Some("curly".to_string()),
            sensitive_to_noise: true,
            sensitive_to_touch: false,
            does_not_like_water: true,
            nervous_anxious: true,
            enjoys_fidget_toys: true,
            needs_weighted_cape: false,
            requires_quiet_environment: true,
            other_sensory_needs: Some("Prefers clippers off".to_string()),
            uses_wheelchair: false,
            limited_mobility: false,
            has_behaviours: false,
            behaviour_notes: None,
            additional_notes: None,
        }
    }

    #[tokio::test]
    async fn new_forms_start_in_the_new_status() {
        let pool = test_pool().await;
        let id = IntakeRepository::create(&pool, &sample_form())
            .await
            .unwrap();

        let form = IntakeRepository::get_by_id(&pool, id)
            .await
            .unwrap()
            .expect("form exists");
        assert_eq!(form.status, IntakeStatus::New);
        assert!(form.sensitive_to_noise);
        assert!(!form.needs_weighted_cape);
        assert_eq!(form.client_type, "child");
    }

    #[tokio::test]
    async fn status_filter_matches_updates() {
        let pool = test_pool().await;
        let first = IntakeRepository::create(&pool, &sample_form())
            .await
            .unwrap();
        IntakeRepository::create(&pool, &sample_form())
            .await
            .unwrap();

        assert!(
            IntakeRepository::update_status(&pool, first, IntakeStatus::Contacted)
                .await
                .unwrap()
        );

        let contacted = IntakeRepository::get_all(&pool, Some(IntakeStatus::Contacted))
            .await
            .unwrap();
        assert_eq!(contacted.len(), 1);
        assert_eq!(contacted[0].id, first);

        let all = IntakeRepository::get_all(&pool, None).await.unwrap();
        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn updating_a_missing_form_reports_false() {
        let pool = test_pool().await;
        assert!(
            !IntakeRepository::update_status(&pool, 12, IntakeStatus::Archived)
                .await
                .unwrap()
        );
    }
}
