use chrono::{NaiveDate, NaiveTime, Utc};
use rust_decimal::Decimal;
use sqlx::{PgExecutor, PgPool};
use uuid::Uuid;

use crate::models::event::UtsavEvent;
use crate::utils::errors::AppError;

pub struct EventRepository {
    pool: PgPool,
}

impl EventRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        spot_id: Uuid,
        event_name: String,
        event_date: NaiveDate,
        start_time: NaiveTime,
        end_time: NaiveTime,
        capacity_two_wheeler: i32,
        capacity_four_wheeler: i32,
        price_two_wheeler: Decimal,
        price_four_wheeler: Decimal,
        description: Option<String>,
    ) -> Result<UtsavEvent, AppError> {
        let event = sqlx::query_as::<_, UtsavEvent>(
            r#"
            INSERT INTO utsav_events
                (id, spot_id, event_name, event_date, start_time, end_time,
                 capacity_two_wheeler, capacity_four_wheeler,
                 price_two_wheeler, price_four_wheeler,
                 description, is_active, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, TRUE, $12)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(spot_id)
        .bind(event_name)
        .bind(event_date)
        .bind(start_time)
        .bind(end_time)
        .bind(capacity_two_wheeler)
        .bind(capacity_four_wheeler)
        .bind(price_two_wheeler)
        .bind(price_four_wheeler)
        .bind(description)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db) = &e {
                if db.is_unique_violation() {
                    return AppError::Conflict(
                        "An event already exists for this spot on that date".to_string(),
                    );
                }
            }
            AppError::Database(e)
        })?;

        Ok(event)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<UtsavEvent>, AppError> {
        let event = sqlx::query_as::<_, UtsavEvent>("SELECT * FROM utsav_events WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(event)
    }

    /// Eventos activos de un spot ordenados por fecha
    pub async fn active_for_spot(&self, spot_id: Uuid) -> Result<Vec<UtsavEvent>, AppError> {
        let events = sqlx::query_as::<_, UtsavEvent>(
            r#"
            SELECT * FROM utsav_events
            WHERE spot_id = $1 AND is_active = TRUE
            ORDER BY event_date, created_at
            "#,
        )
        .bind(spot_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(events)
    }

    /// Candidatos del resolver de solapamiento: eventos activos del spot
    /// cuya fecha cae dentro de las fechas que toca la ventana.
    ///
    /// Toma un executor para poder ejecutarse dentro de la transacción de
    /// admisión (la frescura del snapshot es requisito de corrección).
    pub async fn active_for_spot_between<'e>(
        executor: impl PgExecutor<'e>,
        spot_id: Uuid,
        from_date: NaiveDate,
        to_date: NaiveDate,
    ) -> Result<Vec<UtsavEvent>, AppError> {
        let events = sqlx::query_as::<_, UtsavEvent>(
            r#"
            SELECT * FROM utsav_events
            WHERE spot_id = $1
              AND is_active = TRUE
              AND event_date BETWEEN $2 AND $3
            ORDER BY event_date, created_at
            "#,
        )
        .bind(spot_id)
        .bind(from_date)
        .bind(to_date)
        .fetch_all(executor)
        .await?;

        Ok(events)
    }
}
