//! Controlador de admisión de reservas
//!
//! Orquesta la admisión (validación de ventana, chequeo de capacidad,
//! cálculo de precio, inserción) y las transiciones de estado del ciclo
//! de vida. Los pasos 3-5 de la admisión corren dentro de una única
//! transacción con lock de fila sobre el spot: dos submissions por la
//! última unidad se serializan y la segunda falla con CAPACITY_EXCEEDED.

use chrono::Utc;
use rust_decimal::Decimal;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::config::EnvironmentConfig;
use crate::dto::booking_dto::{
    BookingResponse, BookingWithPricingResponse, CreateBookingRequest, PricingAuditResponse,
};
use crate::dto::common::ApiResponse;
use crate::models::booking::{Booking, BookingStatus};
use crate::models::event::UtsavEvent;
use crate::models::spot::ParkingSpot;
use crate::models::time_range::TimeRange;
use crate::repositories::booking_repository::BookingRepository;
use crate::repositories::event_repository::EventRepository;
use crate::repositories::spot_repository::SpotRepository;
use crate::services::{capacity_service, pricing_service};
use crate::utils::errors::AppError;

pub struct BookingController {
    pool: PgPool,
    config: EnvironmentConfig,
    bookings: BookingRepository,
    spots: SpotRepository,
    events: EventRepository,
}

impl BookingController {
    pub fn new(pool: PgPool, config: EnvironmentConfig) -> Self {
        Self {
            bookings: BookingRepository::new(pool.clone()),
            spots: SpotRepository::new(pool.clone()),
            events: EventRepository::new(pool.clone()),
            pool,
            config,
        }
    }

    /// Paso 1 de la admisión: ventana válida, no en el pasado, dentro de
    /// la política de duración configurada
    fn validate_window(&self, request: &CreateBookingRequest) -> Result<TimeRange, AppError> {
        let window = TimeRange::new(request.start_time, request.end_time)?;

        if window.start() < Utc::now() {
            return Err(AppError::InvalidTimeRange(
                "Start time cannot be in the past".to_string(),
            ));
        }

        let duration = window.duration_hours();
        if duration < Decimal::from(self.config.min_booking_hours) {
            return Err(AppError::InvalidTimeRange(format!(
                "Minimum booking duration is {} hour(s)",
                self.config.min_booking_hours
            )));
        }
        if duration > Decimal::from(self.config.max_booking_hours) {
            return Err(AppError::InvalidTimeRange(format!(
                "Maximum booking duration is {} hour(s)",
                self.config.max_booking_hours
            )));
        }

        Ok(window)
    }

    /// Validar la referencia opcional a evento: debe existir, estar activo
    /// y pertenecer al spot de la reserva
    async fn resolve_linked_event(
        &self,
        spot: &ParkingSpot,
        utsav_event_id: Option<Uuid>,
    ) -> Result<Option<UtsavEvent>, AppError> {
        let Some(event_id) = utsav_event_id else {
            return Ok(None);
        };

        let event = self
            .events
            .find_by_id(event_id)
            .await?
            .ok_or_else(|| AppError::EventNotFound("Utsav event not found".to_string()))?;

        if event.spot_id != spot.id || !event.is_active {
            return Err(AppError::EventNotFound(
                "Utsav event is not active for this parking spot".to_string(),
            ));
        }

        Ok(Some(event))
    }

    /// `submitBooking`: admisión todo-o-nada con desglose de precios
    pub async fn submit(
        &self,
        driver_id: Uuid,
        request: CreateBookingRequest,
    ) -> Result<ApiResponse<BookingWithPricingResponse>, AppError> {
        let window = self.validate_window(&request)?;

        let spot = self
            .spots
            .find_by_id(request.spot_id)
            .await?
            .ok_or_else(|| AppError::SpotUnavailable("Parking spot not found".to_string()))?;

        if !spot.is_active {
            return Err(AppError::SpotUnavailable(
                "Parking spot is not accepting bookings".to_string(),
            ));
        }

        let linked_event = self.resolve_linked_event(&spot, request.utsav_event_id).await?;

        // Sección crítica: lock del spot + chequeo de capacidad + precio +
        // inserción en una sola transacción. El rollback es implícito si
        // cualquier paso falla.
        let mut tx = self.pool.begin().await?;

        let spot = SpotRepository::find_by_id_for_update(&mut tx, spot.id)
            .await?
            .ok_or_else(|| AppError::SpotUnavailable("Parking spot not found".to_string()))?;

        if !spot.is_active {
            return Err(AppError::SpotUnavailable(
                "Parking spot is not accepting bookings".to_string(),
            ));
        }

        let report = capacity_service::available_units(
            &mut tx,
            &spot,
            request.vehicle_type,
            &window,
            None,
        )
        .await?;

        if !report.is_available() {
            return Err(AppError::CapacityExceeded {
                available: report.available_units,
            });
        }

        let pricing = pricing_service::calculate_price(
            &mut tx,
            &spot,
            request.vehicle_type,
            &window,
            linked_event.as_ref(),
        )
        .await?;

        let booking = BookingRepository::insert(
            &mut tx,
            driver_id,
            spot.id,
            linked_event.as_ref().map(|e| e.id),
            request.vehicle_type,
            &window,
            // el snapshot se cuantiza a 2 decimales al persistir, igual que
            // la frontera de presentación
            pricing.base_price.round_dp(2),
            pricing.event_surcharge_amount.round_dp(2),
            pricing.total_price.round_dp(2),
            request.notes.clone(),
        )
        .await?;

        tx.commit().await?;

        info!(
            booking_id = %booking.id,
            spot_id = %spot.id,
            vehicle_type = %booking.vehicle_type,
            total_price = %booking.total_price,
            "Reserva admitida"
        );

        Ok(ApiResponse::success_with_message(
            BookingWithPricingResponse {
                booking: booking.into(),
                pricing: pricing.into(),
            },
            "Booking created".to_string(),
        ))
    }

    pub async fn get(
        &self,
        actor_id: Uuid,
        id: Uuid,
    ) -> Result<ApiResponse<BookingResponse>, AppError> {
        let booking = self.load_authorized(actor_id, id).await?.0;
        Ok(ApiResponse::success(booking.into()))
    }

    pub async fn my_bookings(
        &self,
        driver_id: Uuid,
    ) -> Result<ApiResponse<Vec<BookingResponse>>, AppError> {
        let bookings = self.bookings.find_by_driver(driver_id).await?;
        Ok(ApiResponse::success(
            bookings.into_iter().map(BookingResponse::from).collect(),
        ))
    }

    pub async fn activate(
        &self,
        actor_id: Uuid,
        id: Uuid,
    ) -> Result<ApiResponse<BookingResponse>, AppError> {
        self.transition(actor_id, id, BookingStatus::Active).await
    }

    pub async fn complete(
        &self,
        actor_id: Uuid,
        id: Uuid,
    ) -> Result<ApiResponse<BookingResponse>, AppError> {
        self.transition(actor_id, id, BookingStatus::Completed).await
    }

    pub async fn cancel(
        &self,
        actor_id: Uuid,
        id: Uuid,
    ) -> Result<ApiResponse<BookingResponse>, AppError> {
        self.transition(actor_id, id, BookingStatus::Cancelled).await
    }

    /// Transición de estado bajo lock de fila: leer-verificar-escribir en
    /// una transacción para que dos transiciones concurrentes no compitan
    async fn transition(
        &self,
        actor_id: Uuid,
        id: Uuid,
        target: BookingStatus,
    ) -> Result<ApiResponse<BookingResponse>, AppError> {
        let mut tx = self.pool.begin().await?;

        let booking = BookingRepository::find_by_id_for_update(&mut tx, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Booking not found".to_string()))?;

        self.check_actor(actor_id, &booking).await?;

        booking.check_transition(target, Utc::now())?;

        let updated = BookingRepository::update_status(&mut tx, id, target).await?;
        tx.commit().await?;

        info!(booking_id = %id, previous = %booking.status, next = %target, "Transición de estado");

        Ok(ApiResponse::success_with_message(
            updated.into(),
            format!("Booking {}", target),
        ))
    }

    /// `getPricingBreakdown`: recomputa para display; el precio autoritativo
    /// sigue siendo el snapshot almacenado y nunca se sobrescribe
    pub async fn pricing_breakdown(
        &self,
        actor_id: Uuid,
        id: Uuid,
    ) -> Result<ApiResponse<PricingAuditResponse>, AppError> {
        let (booking, spot) = self.load_authorized(actor_id, id).await?;

        let window = booking.window()?;
        let linked_event = match booking.utsav_event_id {
            Some(event_id) => self.events.find_by_id(event_id).await?,
            None => None,
        };

        let mut conn = self.pool.acquire().await?;
        let pricing = pricing_service::calculate_price(
            &mut conn,
            &spot,
            booking.vehicle_type,
            &window,
            linked_event.as_ref(),
        )
        .await?;

        Ok(ApiResponse::success(PricingAuditResponse {
            booking_id: booking.id,
            vehicle_type: booking.vehicle_type,
            recomputed: pricing.into(),
            stored_base_price: booking.base_price.round_dp(2),
            stored_event_surcharge_amount: booking.event_surcharge_amount.round_dp(2),
            stored_total_price: booking.total_price.round_dp(2),
        }))
    }

    /// Cargar la reserva y su spot verificando que el actor es el conductor
    /// o el dueño del spot
    async fn load_authorized(
        &self,
        actor_id: Uuid,
        id: Uuid,
    ) -> Result<(Booking, ParkingSpot), AppError> {
        let booking = self
            .bookings
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Booking not found".to_string()))?;

        let spot = self
            .spots
            .find_by_id(booking.spot_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Parking spot not found".to_string()))?;

        if actor_id != booking.driver_id && actor_id != spot.owner_id {
            return Err(AppError::PermissionDenied(
                "Only the booking driver or the spot owner can access this booking".to_string(),
            ));
        }

        Ok((booking, spot))
    }

    async fn check_actor(&self, actor_id: Uuid, booking: &Booking) -> Result<(), AppError> {
        let spot = self
            .spots
            .find_by_id(booking.spot_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Parking spot not found".to_string()))?;

        if actor_id != booking.driver_id && actor_id != spot.owner_id {
            return Err(AppError::PermissionDenied(
                "Only the booking driver or the spot owner can modify this booking".to_string(),
            ));
        }

        Ok(())
    }
}
