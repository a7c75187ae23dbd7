use chrono::Utc;
use rust_decimal::Decimal;
use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use crate::models::spot::ParkingSpot;
use crate::utils::errors::AppError;

pub struct SpotRepository {
    pool: PgPool,
}

impl SpotRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        owner_id: Uuid,
        latitude: f64,
        longitude: f64,
        address: String,
        city: String,
        description: Option<String>,
        capacity_two_wheeler: i32,
        capacity_four_wheeler: i32,
        price_per_hour_two_wheeler: Decimal,
        price_per_hour_four_wheeler: Decimal,
    ) -> Result<ParkingSpot, AppError> {
        let now = Utc::now();
        let spot = sqlx::query_as::<_, ParkingSpot>(
            r#"
            INSERT INTO parking_spots
                (id, owner_id, latitude, longitude, address, city, description,
                 capacity_two_wheeler, capacity_four_wheeler,
                 price_per_hour_two_wheeler, price_per_hour_four_wheeler,
                 is_active, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, TRUE, $12, $12)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(owner_id)
        .bind(latitude)
        .bind(longitude)
        .bind(address)
        .bind(city)
        .bind(description)
        .bind(capacity_two_wheeler)
        .bind(capacity_four_wheeler)
        .bind(price_per_hour_two_wheeler)
        .bind(price_per_hour_four_wheeler)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(spot)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<ParkingSpot>, AppError> {
        let spot = sqlx::query_as::<_, ParkingSpot>("SELECT * FROM parking_spots WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(spot)
    }

    pub async fn find_by_owner(&self, owner_id: Uuid) -> Result<Vec<ParkingSpot>, AppError> {
        let spots = sqlx::query_as::<_, ParkingSpot>(
            "SELECT * FROM parking_spots WHERE owner_id = $1 ORDER BY created_at DESC",
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(spots)
    }

    pub async fn deactivate(&self, id: Uuid) -> Result<ParkingSpot, AppError> {
        let spot = sqlx::query_as::<_, ParkingSpot>(
            "UPDATE parking_spots SET is_active = FALSE, updated_at = $2 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(spot)
    }

    /// Leer y bloquear la fila del spot dentro de una transacción.
    ///
    /// El lock de fila serializa la sección crítica de admisión por spot:
    /// dos submissions concurrentes sobre el mismo spot se ejecutan en orden,
    /// mientras que spots distintos avanzan en paralelo.
    pub async fn find_by_id_for_update(
        conn: &mut PgConnection,
        id: Uuid,
    ) -> Result<Option<ParkingSpot>, AppError> {
        let spot =
            sqlx::query_as::<_, ParkingSpot>("SELECT * FROM parking_spots WHERE id = $1 FOR UPDATE")
                .bind(id)
                .fetch_optional(conn)
                .await?;

        Ok(spot)
    }
}
