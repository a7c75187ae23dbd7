use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::booking::{Booking, BookingStatus};
use crate::models::event::UtsavEvent;
use crate::models::pricing::PriceBreakdown;
use crate::models::vehicle::VehicleType;

// Request para crear una reserva. El precio nunca viene del cliente.
#[derive(Debug, Deserialize)]
pub struct CreateBookingRequest {
    pub spot_id: Uuid,
    pub utsav_event_id: Option<Uuid>,
    pub vehicle_type: VehicleType,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub notes: Option<String>,
}

// Response de reserva - montos redondeados a 2 decimales en la frontera
#[derive(Debug, Serialize)]
pub struct BookingResponse {
    pub id: Uuid,
    pub driver_id: Uuid,
    pub spot_id: Uuid,
    pub utsav_event_id: Option<Uuid>,
    pub vehicle_type: VehicleType,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub base_price: Decimal,
    pub event_surcharge_amount: Decimal,
    pub total_price: Decimal,
    pub status: BookingStatus,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Booking> for BookingResponse {
    fn from(booking: Booking) -> Self {
        Self {
            id: booking.id,
            driver_id: booking.driver_id,
            spot_id: booking.spot_id,
            utsav_event_id: booking.utsav_event_id,
            vehicle_type: booking.vehicle_type,
            start_time: booking.start_time,
            end_time: booking.end_time,
            base_price: booking.base_price.round_dp(2),
            event_surcharge_amount: booking.event_surcharge_amount.round_dp(2),
            total_price: booking.total_price.round_dp(2),
            status: booking.status,
            notes: booking.notes,
            created_at: booking.created_at,
        }
    }
}

// Resumen de evento embebido en los desgloses
#[derive(Debug, Serialize)]
pub struct EventSummary {
    pub id: Uuid,
    pub event_name: String,
    pub event_date: NaiveDate,
}

impl From<&UtsavEvent> for EventSummary {
    fn from(event: &UtsavEvent) -> Self {
        Self {
            id: event.id,
            event_name: event.event_name.clone(),
            event_date: event.event_date,
        }
    }
}

// Desglose de precios para presentación
#[derive(Debug, Serialize)]
pub struct PricingBreakdownResponse {
    pub hourly_rate: Decimal,
    pub duration_hours: Decimal,
    pub base_price: Decimal,
    pub event_surcharge_percent: Decimal,
    pub event_surcharge_amount: Decimal,
    pub total_price: Decimal,
    pub overlapping_event: Option<EventSummary>,
}

impl From<PriceBreakdown> for PricingBreakdownResponse {
    fn from(breakdown: PriceBreakdown) -> Self {
        Self {
            hourly_rate: breakdown.hourly_rate,
            duration_hours: breakdown.duration_hours,
            base_price: breakdown.base_price.round_dp(2),
            event_surcharge_percent: breakdown.event_surcharge_percent,
            event_surcharge_amount: breakdown.event_surcharge_amount.round_dp(2),
            total_price: breakdown.total_price.round_dp(2),
            overlapping_event: breakdown.overlapping_event.as_ref().map(EventSummary::from),
        }
    }
}

// Reserva creada junto con su desglose de admisión
#[derive(Debug, Serialize)]
pub struct BookingWithPricingResponse {
    pub booking: BookingResponse,
    pub pricing: PricingBreakdownResponse,
}

// Desglose de auditoría: recomputado para display, con el snapshot
// almacenado como valor autoritativo
#[derive(Debug, Serialize)]
pub struct PricingAuditResponse {
    pub booking_id: Uuid,
    pub vehicle_type: VehicleType,
    pub recomputed: PricingBreakdownResponse,
    pub stored_base_price: Decimal,
    pub stored_event_surcharge_amount: Decimal,
    /// Precio autoritativo fijado en la admisión
    pub stored_total_price: Decimal,
}
