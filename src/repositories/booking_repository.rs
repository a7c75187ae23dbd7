use chrono::Utc;
use rust_decimal::Decimal;
use sqlx::{PgConnection, PgExecutor, PgPool};
use uuid::Uuid;

use crate::models::booking::{Booking, BookingStatus};
use crate::models::time_range::TimeRange;
use crate::models::vehicle::VehicleType;
use crate::utils::errors::AppError;

pub struct BookingRepository {
    pool: PgPool,
}

impl BookingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Booking>, AppError> {
        let booking = sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(booking)
    }

    pub async fn find_by_driver(&self, driver_id: Uuid) -> Result<Vec<Booking>, AppError> {
        let bookings = sqlx::query_as::<_, Booking>(
            "SELECT * FROM bookings WHERE driver_id = $1 ORDER BY created_at DESC",
        )
        .bind(driver_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(bookings)
    }

    /// Unidades consumidas: reservas pending/active del mismo spot y tipo de
    /// vehículo cuya ventana solapa estrictamente la pedida.
    ///
    /// Mismo test de solapamiento semiabierto que el resolver de eventos:
    /// `start_time < $end AND end_time > $start`.
    pub async fn count_overlapping<'e>(
        executor: impl PgExecutor<'e>,
        spot_id: Uuid,
        vehicle_type: VehicleType,
        window: &TimeRange,
        exclude_booking: Option<Uuid>,
    ) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM bookings
            WHERE spot_id = $1
              AND vehicle_type = $2
              AND status IN ('pending', 'active')
              AND start_time < $3
              AND end_time > $4
              AND ($5::uuid IS NULL OR id <> $5)
            "#,
        )
        .bind(spot_id)
        .bind(vehicle_type)
        .bind(window.end())
        .bind(window.start())
        .bind(exclude_booking)
        .fetch_one(executor)
        .await?;

        Ok(count)
    }

    /// Insertar la reserva con su snapshot de precios. Solo se llama dentro
    /// de la transacción de admisión, después del chequeo de capacidad.
    #[allow(clippy::too_many_arguments)]
    pub async fn insert(
        conn: &mut PgConnection,
        driver_id: Uuid,
        spot_id: Uuid,
        utsav_event_id: Option<Uuid>,
        vehicle_type: VehicleType,
        window: &TimeRange,
        base_price: Decimal,
        event_surcharge_amount: Decimal,
        total_price: Decimal,
        notes: Option<String>,
    ) -> Result<Booking, AppError> {
        let now = Utc::now();
        let booking = sqlx::query_as::<_, Booking>(
            r#"
            INSERT INTO bookings
                (id, driver_id, spot_id, utsav_event_id, vehicle_type,
                 start_time, end_time, base_price, event_surcharge_amount,
                 total_price, status, notes, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, 'pending', $11, $12, $12)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(driver_id)
        .bind(spot_id)
        .bind(utsav_event_id)
        .bind(vehicle_type)
        .bind(window.start())
        .bind(window.end())
        .bind(base_price)
        .bind(event_surcharge_amount)
        .bind(total_price)
        .bind(notes)
        .bind(now)
        .fetch_one(conn)
        .await?;

        Ok(booking)
    }

    /// Leer y bloquear la fila de la reserva para una transición de estado
    pub async fn find_by_id_for_update(
        conn: &mut PgConnection,
        id: Uuid,
    ) -> Result<Option<Booking>, AppError> {
        let booking = sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE id = $1 FOR UPDATE")
            .bind(id)
            .fetch_optional(conn)
            .await?;

        Ok(booking)
    }

    /// Escribir el nuevo estado; la legalidad de la transición ya fue
    /// verificada bajo el lock de fila
    pub async fn update_status(
        conn: &mut PgConnection,
        id: Uuid,
        status: BookingStatus,
    ) -> Result<Booking, AppError> {
        let booking = sqlx::query_as::<_, Booking>(
            "UPDATE bookings SET status = $2, updated_at = $3 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(status)
        .bind(Utc::now())
        .fetch_one(conn)
        .await?;

        Ok(booking)
    }
}
