//! Calculadora de precios
//!
//! Resuelve la tarifa por hora y delega la aritmética pura a
//! `PriceBreakdown::compute`. La tarifa del evento solo aplica cuando la
//! reserva está explícitamente ligada al evento; el mero solapamiento
//! temporal dispara el recargo del 20% pero no cambia la tarifa.
//!
//! Función pura del estado actual de spot/eventos y de la ventana: no
//! cachea resultados entre llamadas.

use sqlx::PgConnection;

use crate::models::event::UtsavEvent;
use crate::models::pricing::PriceBreakdown;
use crate::models::spot::ParkingSpot;
use crate::models::time_range::TimeRange;
use crate::models::vehicle::VehicleType;
use crate::services::event_service;
use crate::utils::errors::AppError;

/// `calculatePrice(spot, vehicleType, window, linkedEvent?)`
pub async fn calculate_price(
    conn: &mut PgConnection,
    spot: &ParkingSpot,
    vehicle_type: VehicleType,
    window: &TimeRange,
    linked_event: Option<&UtsavEvent>,
) -> Result<PriceBreakdown, AppError> {
    let overlapping = event_service::find_overlapping_event(&mut *conn, spot.id, window).await?;

    let hourly_rate = match linked_event {
        Some(event) => event.price_for(vehicle_type),
        None => spot.price_for(vehicle_type),
    };

    Ok(PriceBreakdown::compute(hourly_rate, window, overlapping))
}
