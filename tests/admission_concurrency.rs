//! Prueba de concurrencia de la admisión contra Postgres
//!
//! Requiere `DATABASE_URL` apuntando a una base con el schema de
//! `migrations/` aplicado, por eso va marcada con `#[ignore]`:
//!
//! ```text
//! cargo test --test admission_concurrency -- --ignored
//! ```

use chrono::{Duration, Utc};
use rust_decimal_macros::dec;
use uuid::Uuid;

use gallipark_backend::config::EnvironmentConfig;
use gallipark_backend::controllers::booking_controller::BookingController;
use gallipark_backend::database::create_pool;
use gallipark_backend::dto::booking_dto::CreateBookingRequest;
use gallipark_backend::models::vehicle::VehicleType;
use gallipark_backend::utils::errors::AppError;

#[tokio::test]
#[ignore]
async fn concurrent_submissions_for_last_unit_admit_exactly_one() {
    dotenvy::dotenv().ok();
    let pool = create_pool(None).await.expect("DATABASE_URL con schema aplicado");

    let owner_id = Uuid::new_v4();
    let driver_id = Uuid::new_v4();
    for id in [owner_id, driver_id] {
        sqlx::query("INSERT INTO users (id, phone_number) VALUES ($1, $2)")
            .bind(id)
            .bind(format!("+977-{}", &id.simple().to_string()[..12]))
            .execute(&pool)
            .await
            .unwrap();
    }

    // spot con una única unidad para two_wheeler
    let spot_id = Uuid::new_v4();
    sqlx::query(
        r#"
        INSERT INTO parking_spots
            (id, owner_id, latitude, longitude, address, city,
             capacity_two_wheeler, capacity_four_wheeler,
             price_per_hour_two_wheeler, price_per_hour_four_wheeler)
        VALUES ($1, $2, 27.7172, 85.3240, 'Thamel Marg 29', 'Kathmandu', 1, 0, $3, 0)
        "#,
    )
    .bind(spot_id)
    .bind(owner_id)
    .bind(dec!(50))
    .execute(&pool)
    .await
    .unwrap();

    let controller = BookingController::new(pool.clone(), EnvironmentConfig::default());
    let start = Utc::now() + Duration::hours(1);
    let request = |notes: &str| CreateBookingRequest {
        spot_id,
        utsav_event_id: None,
        vehicle_type: VehicleType::TwoWheeler,
        start_time: start,
        end_time: start + Duration::hours(2),
        notes: Some(notes.to_string()),
    };

    let (first, second) = tokio::join!(
        controller.submit(driver_id, request("primera")),
        controller.submit(driver_id, request("segunda")),
    );

    let admitted = [first.is_ok(), second.is_ok()]
        .iter()
        .filter(|ok| **ok)
        .count();
    assert_eq!(admitted, 1, "exactamente una admisión debe ganar la última unidad");

    let rejected = [first, second].into_iter().find_map(Result::err).unwrap();
    assert!(matches!(rejected, AppError::CapacityExceeded { available: 0 }));

    sqlx::query("DELETE FROM bookings WHERE spot_id = $1")
        .bind(spot_id)
        .execute(&pool)
        .await
        .unwrap();
    sqlx::query("DELETE FROM parking_spots WHERE id = $1")
        .bind(spot_id)
        .execute(&pool)
        .await
        .unwrap();
    sqlx::query("DELETE FROM users WHERE id = ANY($1)")
        .bind(vec![owner_id, driver_id])
        .execute(&pool)
        .await
        .unwrap();
}
