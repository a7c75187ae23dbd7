//! Controlador de eventos Utsav

use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::common::ApiResponse;
use crate::dto::event_dto::{CreateEventRequest, EventResponse};
use crate::repositories::event_repository::EventRepository;
use crate::repositories::spot_repository::SpotRepository;
use crate::utils::errors::AppError;
use crate::utils::validation::{validate_date, validate_time};

pub struct EventController {
    events: EventRepository,
    spots: SpotRepository,
}

impl EventController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            events: EventRepository::new(pool.clone()),
            spots: SpotRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        actor_id: Uuid,
        request: CreateEventRequest,
    ) -> Result<ApiResponse<EventResponse>, AppError> {
        request.validate()?;

        let event_date = validate_date(&request.event_date)
            .map_err(|_| AppError::BadRequest("Invalid event_date, expected YYYY-MM-DD".to_string()))?;
        let start_time = validate_time(&request.start_time)
            .map_err(|_| AppError::BadRequest("Invalid start_time, expected HH:MM:SS".to_string()))?;
        let end_time = validate_time(&request.end_time)
            .map_err(|_| AppError::BadRequest("Invalid end_time, expected HH:MM:SS".to_string()))?;

        // los eventos no cruzan medianoche
        if end_time <= start_time {
            return Err(AppError::InvalidTimeRange(
                "Event end time must be after start time".to_string(),
            ));
        }

        if request.price_two_wheeler < Decimal::ZERO
            || request.price_four_wheeler.unwrap_or(Decimal::ZERO) < Decimal::ZERO
        {
            return Err(AppError::BadRequest(
                "Event prices cannot be negative".to_string(),
            ));
        }

        let spot = self
            .spots
            .find_by_id(request.spot_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Parking spot not found".to_string()))?;

        if spot.owner_id != actor_id {
            return Err(AppError::PermissionDenied(
                "Only the spot owner can declare events on it".to_string(),
            ));
        }

        let event = self
            .events
            .create(
                spot.id,
                request.event_name,
                event_date,
                start_time,
                end_time,
                request.capacity_two_wheeler,
                request.capacity_four_wheeler.unwrap_or(0),
                request.price_two_wheeler,
                request.price_four_wheeler.unwrap_or(Decimal::ZERO),
                request.description,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            event.into(),
            "Utsav event created".to_string(),
        ))
    }

    pub async fn get(&self, id: Uuid) -> Result<ApiResponse<EventResponse>, AppError> {
        let event = self
            .events
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::EventNotFound("Utsav event not found".to_string()))?;

        Ok(ApiResponse::success(event.into()))
    }
}
