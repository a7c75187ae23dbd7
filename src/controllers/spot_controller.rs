//! Controlador de spots
//!
//! Superficie colaboradora mínima alrededor del motor: alta, consulta,
//! desactivación suave y el reporte de disponibilidad del ledger.

use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::common::ApiResponse;
use crate::dto::spot_dto::{AvailabilityQuery, AvailabilityResponse, CreateSpotRequest, SpotResponse};
use crate::dto::event_dto::EventResponse;
use crate::models::time_range::TimeRange;
use crate::repositories::event_repository::EventRepository;
use crate::repositories::spot_repository::SpotRepository;
use crate::services::capacity_service;
use crate::utils::errors::AppError;
use crate::utils::validation::validate_datetime;

pub struct SpotController {
    pool: PgPool,
    spots: SpotRepository,
    events: EventRepository,
}

impl SpotController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            spots: SpotRepository::new(pool.clone()),
            events: EventRepository::new(pool.clone()),
            pool,
        }
    }

    pub async fn create(
        &self,
        owner_id: Uuid,
        request: CreateSpotRequest,
    ) -> Result<ApiResponse<SpotResponse>, AppError> {
        request.validate()?;

        if request.price_per_hour_two_wheeler < Decimal::ZERO
            || request.price_per_hour_four_wheeler.unwrap_or(Decimal::ZERO) < Decimal::ZERO
        {
            return Err(AppError::BadRequest(
                "Hourly prices cannot be negative".to_string(),
            ));
        }

        let spot = self
            .spots
            .create(
                owner_id,
                request.latitude,
                request.longitude,
                request.address,
                request.city.unwrap_or_else(|| "Kathmandu".to_string()),
                request.description,
                request.capacity_two_wheeler,
                request.capacity_four_wheeler.unwrap_or(0),
                request.price_per_hour_two_wheeler,
                request.price_per_hour_four_wheeler.unwrap_or(Decimal::ZERO),
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            spot.into(),
            "Parking spot created".to_string(),
        ))
    }

    pub async fn get(&self, id: Uuid) -> Result<ApiResponse<SpotResponse>, AppError> {
        let spot = self
            .spots
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Parking spot not found".to_string()))?;

        Ok(ApiResponse::success(spot.into()))
    }

    pub async fn my_spots(&self, owner_id: Uuid) -> Result<ApiResponse<Vec<SpotResponse>>, AppError> {
        let spots = self.spots.find_by_owner(owner_id).await?;
        Ok(ApiResponse::success(
            spots.into_iter().map(SpotResponse::from).collect(),
        ))
    }

    /// Desactivación suave: el spot deja de aceptar reservas pero nunca se
    /// borra mientras existan reservas que lo referencien
    pub async fn deactivate(
        &self,
        owner_id: Uuid,
        id: Uuid,
    ) -> Result<ApiResponse<SpotResponse>, AppError> {
        let spot = self
            .spots
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Parking spot not found".to_string()))?;

        if spot.owner_id != owner_id {
            return Err(AppError::PermissionDenied(
                "Only the spot owner can deactivate it".to_string(),
            ));
        }

        let spot = self.spots.deactivate(id).await?;

        Ok(ApiResponse::success_with_message(
            spot.into(),
            "Parking spot deactivated".to_string(),
        ))
    }

    /// Eventos activos del spot
    pub async fn events(&self, id: Uuid) -> Result<ApiResponse<Vec<EventResponse>>, AppError> {
        // el spot debe existir aunque no tenga eventos
        self.spots
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Parking spot not found".to_string()))?;

        let events = self.events.active_for_spot(id).await?;
        Ok(ApiResponse::success(
            events.into_iter().map(EventResponse::from).collect(),
        ))
    }

    /// Reporte de disponibilidad del Capacity Ledger para una ventana
    pub async fn availability(
        &self,
        id: Uuid,
        query: AvailabilityQuery,
    ) -> Result<ApiResponse<AvailabilityResponse>, AppError> {
        let start = validate_datetime(&query.start).map_err(|_| {
            AppError::InvalidTimeRange(
                "Invalid start, expected RFC3339 (e.g. 2026-01-25T10:00:00Z)".to_string(),
            )
        })?;
        let end = validate_datetime(&query.end).map_err(|_| {
            AppError::InvalidTimeRange(
                "Invalid end, expected RFC3339 (e.g. 2026-01-25T13:00:00Z)".to_string(),
            )
        })?;
        let window = TimeRange::new(start, end)?;

        let spot = self
            .spots
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Parking spot not found".to_string()))?;

        let mut conn = self.pool.acquire().await?;
        let report =
            capacity_service::available_units(&mut conn, &spot, query.vehicle_type, &window, None)
                .await?;

        let message = if report.is_available() {
            "Spot is available".to_string()
        } else {
            format!(
                "No available {} units for the requested time period",
                query.vehicle_type
            )
        };

        Ok(ApiResponse::success(AvailabilityResponse {
            spot_id: spot.id,
            vehicle_type: query.vehicle_type,
            is_available: report.is_available(),
            available_units: report.available_units,
            total_units: report.total_units,
            consumed_units: report.consumed_units,
            message,
        }))
    }
}
