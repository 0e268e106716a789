use sqlx::SqlitePool;
use time::{Date, OffsetDateTime};

use crate::db::models::{BookingDetails, BookingStatus, NewBooking};
use crate::db::DatabaseError;

pub struct BookingRepository;

impl BookingRepository {
    /// Inserts a booking and returns its id. `booking_date` and
    /// `booking_time` are the already-validated, normalized values from the
    /// payload. Fails with `Duplicate` when the slot is already held by a
    /// non-cancelled booking.
    pub async fn create(
        pool: &SqlitePool,
        payload: &NewBooking,
        booking_date: Date,
        booking_time: &str,
    ) -> Result<i64, DatabaseError> {
        let result = sqlx::query(
            r#"
            INSERT INTO bookings
                (service_id, client_name, client_email, client_phone,
                 booking_date, booking_time, notes, status, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, 'pending', ?)
            "#,
        )
        .bind(payload.service_id)
        .bind(&payload.client_name)
        .bind(&payload.client_email)
        .bind(&payload.client_phone)
        .bind(booking_date)
        .bind(booking_time)
        .bind(&payload.notes)
        .bind(OffsetDateTime::now_utc())
        .execute(pool)
        .await
        .map_err(DatabaseError::from_sqlx)?;

        Ok(result.last_insert_rowid())
    }

    pub async fn get_details(
        pool: &SqlitePool,
        id: i64,
    ) -> Result<Option<BookingDetails>, DatabaseError> {
        let booking = sqlx::query_as::<_, BookingDetails>(
            r#"
            SELECT b.id, b.service_id, s.name AS service_name, s.duration, s.price,
                   b.client_name, b.client_email, b.client_phone,
                   b.booking_date, b.booking_time, b.notes, b.status, b.created_at
            FROM bookings b
            JOIN services s ON b.service_id = s.id
            WHERE b.id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;
        Ok(booking)
    }

    pub async fn update_status(
        pool: &SqlitePool,
        id: i64,
        status: BookingStatus,
    ) -> Result<bool, DatabaseError> {
        let result = sqlx::query("UPDATE bookings SET status = ? WHERE id = ?")
            .bind(status)
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Occupied `(time, duration)` pairs for a date, excluding cancelled
    /// bookings. This is the busy set the availability computation runs
    /// against, read fresh on every query.
    pub async fn booked_times_for_date(
        pool: &SqlitePool,
        date: Date,
    ) -> Result<Vec<(String, i64)>, DatabaseError> {
        let rows = sqlx::query_as::<_, (String, i64)>(
            r#"
            SELECT b.booking_time, s.duration
            FROM bookings b
            JOIN services s ON b.service_id = s.id
            WHERE b.booking_date = ? AND b.status != 'cancelled'
            "#,
        )
        .bind(date)
        .fetch_all(pool)
        .await?;
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::seed;
    use time::macros::date;

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

    fn sample_booking(time: &str) -> NewBooking {
        NewBooking {
            service_id: 1,
            client_name: "Avery Martin".to_string(),
            client_email: "avery@example.com".to_string(),
            client_phone: Some("613-555-0142".to_string()),
            booking_date: "2030-05-20".to_string(),
            booking_time: time.to_string(),
            notes: None,
        }
    }

    #[tokio::test]
    async fn creates_and_fetches_a_booking_with_service_details() {
        let pool = test_pool().await;
        let payload = sample_booking("15:30");
        let id = BookingRepository::create(&pool, &payload, date!(2030 - 05 - 20), "15:30")
            .await
            .unwrap();

        let details = BookingRepository::get_details(&pool, id)
            .await
            .unwrap()
            .expect("booking exists");
        assert_eq!(details.client_name, "Avery Martin");
        assert_eq!(details.booking_time, "15:30");
        assert_eq!(details.status, BookingStatus::Pending);
        assert_eq!(details.duration, 60); // seeded Haircut & Style
        assert!(details.price > 0.0);
    }

    #[tokio::test]
    async fn missing_booking_is_none() {
        let pool = test_pool().await;
        assert!(BookingRepository::get_details(&pool, 42)
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn double_booking_a_slot_is_a_duplicate() {
        let pool = test_pool().await;
        let payload = sample_booking("16:00");
        let day = date!(2030 - 05 - 20);
        BookingRepository::create(&pool, &payload, day, "16:00")
            .await
            .unwrap();

        let err = BookingRepository::create(&pool, &payload, day, "16:00")
            .await
            .unwrap_err();
        assert!(matches!(err, DatabaseError::Duplicate));
    }

    #[tokio::test]
    async fn cancelling_frees_the_slot() {
        let pool = test_pool().await;
        let payload = sample_booking("17:00");
        let day = date!(2030 - 05 - 20);
        let id = BookingRepository::create(&pool, &payload, day, "17:00")
            .await
            .unwrap();

        let updated = BookingRepository::update_status(&pool, id, BookingStatus::Cancelled)
            .await
            .unwrap();
        assert!(updated);

        // The unique index only covers non-cancelled rows.
        BookingRepository::create(&pool, &payload, day, "17:00")
            .await
            .expect("slot reusable after cancellation");
    }

    #[tokio::test]
    async fn booked_times_exclude_cancelled_bookings() {
        let pool = test_pool().await;
        let day = date!(2030 - 05 - 21);
        let first = sample_booking("15:00");
        let second = sample_booking("16:30");
        let id = BookingRepository::create(&pool, &first, day, "15:00")
            .await
            .unwrap();
        BookingRepository::create(&pool, &second, day, "16:30")
            .await
            .unwrap();
        BookingRepository::update_status(&pool, id, BookingStatus::Cancelled)
            .await
            .unwrap();

        let busy = BookingRepository::booked_times_for_date(&pool, day)
            .await
            .unwrap();
        assert_eq!(busy, vec![("16:30".to_string(), 60)]);
    }

    #[tokio::test]
    async fn update_status_reports_missing_rows() {
        let pool = test_pool().await;
        let updated = BookingRepository::update_status(&pool, 999, BookingStatus::Confirmed)
            .await
            .unwrap();
        assert!(!updated);
    }
}
