//! Ledger de capacidad
//!
//! Calcula las unidades disponibles de un spot para un tipo de vehículo
//! sobre una ventana: capacidad total (override del evento si uno solapa,
//! capacidad base del spot si no) menos reservas pending/active que solapan.
//!
//! Lectura pura del snapshot actual del store; se ejecuta con la conexión
//! que le pase el llamador para poder correr dentro de la transacción de
//! admisión.

use serde::Serialize;
use sqlx::PgConnection;
use uuid::Uuid;

use crate::models::spot::ParkingSpot;
use crate::models::time_range::TimeRange;
use crate::models::vehicle::VehicleType;
use crate::repositories::booking_repository::BookingRepository;
use crate::services::event_service;
use crate::utils::errors::AppError;

/// Resultado del ledger: aritmética cruda conservada para diagnóstico
#[derive(Debug, Clone, Serialize)]
pub struct CapacityReport {
    pub total_units: i64,
    pub consumed_units: i64,
    /// `total - consumed` sin clamp, puede ser negativo
    pub available_raw: i64,
    /// `max(0, total - consumed)`
    pub available_units: i64,
}

impl CapacityReport {
    pub fn new(total_units: i64, consumed_units: i64) -> Self {
        let available_raw = total_units - consumed_units;
        Self {
            total_units,
            consumed_units,
            available_raw,
            available_units: available_raw.max(0),
        }
    }

    pub fn is_available(&self) -> bool {
        self.available_units > 0
    }
}

/// `availableUnits(spot, vehicleType, window, excludeBooking?)`
pub async fn available_units(
    conn: &mut PgConnection,
    spot: &ParkingSpot,
    vehicle_type: VehicleType,
    window: &TimeRange,
    exclude_booking: Option<Uuid>,
) -> Result<CapacityReport, AppError> {
    let overlapping = event_service::find_overlapping_event(&mut *conn, spot.id, window).await?;

    let total = match &overlapping {
        Some(event) => event.capacity_for(vehicle_type),
        None => spot.capacity_for(vehicle_type),
    } as i64;

    let consumed = BookingRepository::count_overlapping(
        &mut *conn,
        spot.id,
        vehicle_type,
        window,
        exclude_booking,
    )
    .await?;

    Ok(CapacityReport::new(total, consumed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_available_is_total_minus_consumed() {
        let report = CapacityReport::new(10, 4);
        assert_eq!(report.available_units, 6);
        assert_eq!(report.available_raw, 6);
        assert!(report.is_available());
    }

    #[test]
    fn test_full_capacity_leaves_zero_available() {
        let report = CapacityReport::new(10, 10);
        assert_eq!(report.available_units, 0);
        assert!(!report.is_available());
    }

    #[test]
    fn test_oversubscription_clamps_but_keeps_raw() {
        // capacidad reducida por un evento mientras existen reservas previas
        let report = CapacityReport::new(5, 8);
        assert_eq!(report.available_units, 0);
        assert_eq!(report.available_raw, -3);
        assert!(!report.is_available());
    }
}
