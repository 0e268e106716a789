//! Idempotent seed data: the service catalog and gallery placeholders are
//! inserted once, on first boot against an empty database.

use anyhow::Result;
use sqlx::SqlitePool;
use time::OffsetDateTime;
use tracing::info;

/// (category, name, description, duration minutes, price)
const SERVICES: &[(&str, &str, &str, i64, f64)] = &[
    (
        "Hair",
        "Haircut & Style",
        "Precision cut tailored to your face shape and lifestyle, finished with a beautiful style.",
        60,
        75.00,
    ),
    (
        "Hair",
        "Blowout",
        "Professional blow dry and styling for any occasion.",
        45,
        55.00,
    ),
    (
        "Hair",
        "Color - Full",
        "Full head color application with premium products.",
        120,
        150.00,
    ),
    (
        "Hair",
        "Color - Highlights",
        "Dimensional highlights or lowlights for added depth.",
        150,
        180.00,
    ),
    (
        "Hair",
        "Balayage",
        "Hand-painted highlights for a natural, sun-kissed look.",
        180,
        220.00,
    ),
    (
        "Hair",
        "Deep Conditioning Treatment",
        "Intensive moisture treatment for damaged or dry hair.",
        30,
        45.00,
    ),
    (
        "Facial",
        "Classic Facial",
        "Deep cleansing facial with extraction and hydration.",
        60,
        85.00,
    ),
    (
        "Facial",
        "Anti-Aging Facial",
        "Targeted treatment to reduce fine lines and restore radiance.",
        75,
        120.00,
    ),
    (
        "Facial",
        "Hydrating Facial",
        "Intensive moisture boost for dehydrated skin.",
        60,
        95.00,
    ),
    (
        "Facial",
        "Acne Treatment Facial",
        "Specialized treatment for acne-prone skin.",
        60,
        90.00,
    ),
    (
        "Body",
        "Full Body Massage",
        "Relaxing Swedish massage to release tension.",
        60,
        95.00,
    ),
    (
        "Body",
        "Deep Tissue Massage",
        "Targeted pressure to relieve chronic muscle tension.",
        60,
        110.00,
    ),
    (
        "Body",
        "Body Scrub & Wrap",
        "Exfoliation followed by a nourishing body wrap.",
        90,
        130.00,
    ),
    (
        "Body",
        "Back Facial",
        "Deep cleansing and treatment for the back area.",
        45,
        75.00,
    ),
    (
        "Nailcare",
        "Classic Manicure",
        "Nail shaping, cuticle care, and polish application.",
        30,
        35.00,
    ),
    (
        "Nailcare",
        "Gel Manicure",
        "Long-lasting gel polish manicure.",
        45,
        50.00,
    ),
    (
        "Nailcare",
        "Classic Pedicure",
        "Relaxing foot treatment with polish.",
        45,
        45.00,
    ),
    (
        "Nailcare",
        "Spa Pedicure",
        "Luxurious pedicure with extended massage and mask.",
        60,
        65.00,
    ),
    (
        "Nailcare",
        "Nail Art",
        "Custom nail art designs (per nail).",
        15,
        10.00,
    ),
];

/// (filename, alt text, category, is featured, sort order)
const GALLERY_IMAGES: &[(&str, &str, &str, bool, i64)] = &[
    ("gallery-1.jpg", "Elegant updo hairstyle", "Hair", true, 1),
    ("gallery-2.jpg", "Natural balayage highlights", "Hair", true, 2),
    ("gallery-3.jpg", "Bridal makeup and hair", "Hair", false, 3),
    ("gallery-4.jpg", "Relaxing facial treatment", "Facial", true, 4),
    ("gallery-5.jpg", "Glowing skin after facial", "Facial", false, 5),
    ("gallery-6.jpg", "Artistic nail design", "Nailcare", true, 6),
    ("gallery-7.jpg", "French tip manicure", "Nailcare", false, 7),
    ("gallery-8.jpg", "Spa pedicure treatment", "Nailcare", false, 8),
    ("gallery-9.jpg", "Studio interior", "Studio", false, 9),
    ("gallery-10.jpg", "Product display", "Studio", false, 10),
    ("gallery-11.jpg", "Color transformation", "Hair", false, 11),
    ("gallery-12.jpg", "Massage therapy session", "Body", false, 12),
];

pub async fn seed_database(pool: &SqlitePool) -> Result<()> {
    seed_services(pool).await?;
    seed_gallery(pool).await?;
    Ok(())
}

async fn seed_services(pool: &SqlitePool) -> Result<()> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM services")
        .fetch_one(pool)
        .await?;
    if count > 0 {
        return Ok(());
    }

    let now = OffsetDateTime::now_utc();
    for (category, name, description, duration, price) in SERVICES {
        sqlx::query(
            r#"
            INSERT INTO services (category, name, description, duration, price, is_active, created_at)
            VALUES (?, ?, ?, ?, ?, 1, ?)
            "#,
        )
        .bind(category)
        .bind(name)
        .bind(description)
        .bind(duration)
        .bind(price)
        .bind(now)
        .execute(pool)
        .await?;
    }

    info!("Seeded {} services", SERVICES.len());
    Ok(())
}

async fn seed_gallery(pool: &SqlitePool) -> Result<()> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM gallery_images")
        .fetch_one(pool)
        .await?;
    if count > 0 {
        return Ok(());
    }

    let now = OffsetDateTime::now_utc();
    for (filename, alt_text, category, is_featured, sort_order) in GALLERY_IMAGES {
        sqlx::query(
            r#"
            INSERT INTO gallery_images (filename, alt_text, category, is_featured, sort_order, created_at)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(filename)
        .bind(alt_text)
        .bind(category)
        .bind(is_featured)
        .bind(sort_order)
        .bind(now)
        .execute(pool)
        .await?;
    }

    info!("Seeded {} gallery images", GALLERY_IMAGES.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn seeding_twice_does_not_duplicate_rows() {
        let pool = sqlx::sqlite::SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        sqlx::migrate!("./migrations").run(&pool).await.unwrap();

        seed_database(&pool).await.unwrap();
        seed_database(&pool).await.unwrap();

        let services: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM services")
            .fetch_one(&pool)
            .await
            .unwrap();
        let images: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM gallery_images")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(services, SERVICES.len() as i64);
        assert_eq!(images, GALLERY_IMAGES.len() as i64);
    }
}
