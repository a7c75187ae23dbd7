//! Modelo de Booking
//!
//! Reserva de un conductor sobre un spot, con snapshot de precios
//! calculado por el backend y máquina de estados del ciclo de vida.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use uuid::Uuid;

use super::time_range::TimeRange;
use super::vehicle::VehicleType;
use crate::utils::errors::AppError;

/// Estado de la reserva - mapea al ENUM booking_status
///
/// Transiciones permitidas:
/// `pending -> active | cancelled`, `active -> completed | cancelled`.
/// `completed` y `cancelled` son terminales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type)]
#[sqlx(type_name = "booking_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    Pending,
    Active,
    Completed,
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Active => "active",
            BookingStatus::Completed => "completed",
            BookingStatus::Cancelled => "cancelled",
        }
    }

    /// Regla pura de la máquina de estados
    pub fn can_transition_to(&self, target: BookingStatus) -> bool {
        use BookingStatus::*;
        matches!(
            (self, target),
            (Pending, Active) | (Pending, Cancelled) | (Active, Completed) | (Active, Cancelled)
        )
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Booking principal - mapea a la tabla bookings
///
/// Los campos de precio son un snapshot inmutable calculado en la admisión;
/// cambios posteriores de tarifas nunca los alteran.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Booking {
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
    pub updated_at: DateTime<Utc>,
}

impl Booking {
    /// Ventana reservada como TimeRange (las filas persistidas cumplen
    /// `end_time > start_time` por constraint)
    pub fn window(&self) -> Result<TimeRange, AppError> {
        TimeRange::new(self.start_time, self.end_time)
    }

    /// Verificación completa de una transición: legalidad de la máquina de
    /// estados más la regla temporal de `pending -> active` (una reserva no
    /// puede activarse antes de su start_time)
    pub fn check_transition(
        &self,
        target: BookingStatus,
        now: DateTime<Utc>,
    ) -> Result<(), AppError> {
        if !self.status.can_transition_to(target)
            || (target == BookingStatus::Active && now < self.start_time)
        {
            return Err(AppError::InvalidStateTransition {
                from: self.status.to_string(),
                to: target.to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::BookingStatus::*;
    use super::*;
    use chrono::Duration;
    use rust_decimal_macros::dec;

    fn booking_with(status: BookingStatus, start_time: DateTime<Utc>) -> Booking {
        Booking {
            id: Uuid::new_v4(),
            driver_id: Uuid::new_v4(),
            spot_id: Uuid::new_v4(),
            utsav_event_id: None,
            vehicle_type: VehicleType::TwoWheeler,
            start_time,
            end_time: start_time + Duration::hours(2),
            base_price: dec!(100.00),
            event_surcharge_amount: dec!(0.00),
            total_price: dec!(100.00),
            status,
            notes: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_pending_transitions() {
        assert!(Pending.can_transition_to(Active));
        assert!(Pending.can_transition_to(Cancelled));
        assert!(!Pending.can_transition_to(Completed));
        assert!(!Pending.can_transition_to(Pending));
    }

    #[test]
    fn test_active_transitions() {
        assert!(Active.can_transition_to(Completed));
        assert!(Active.can_transition_to(Cancelled));
        assert!(!Active.can_transition_to(Pending));
    }

    #[test]
    fn test_terminal_states_are_immutable() {
        for target in [Pending, Active, Completed, Cancelled] {
            assert!(!Completed.can_transition_to(target));
            assert!(!Cancelled.can_transition_to(target));
        }
    }

    #[test]
    fn test_early_activation_is_an_invalid_transition() {
        let now = Utc::now();
        let booking = booking_with(Pending, now + Duration::hours(1));

        let err = booking.check_transition(Active, now).unwrap_err();
        assert!(matches!(err, AppError::InvalidStateTransition { .. }));
    }

    #[test]
    fn test_activation_from_start_time_onwards_is_allowed() {
        let now = Utc::now();
        let booking = booking_with(Pending, now - Duration::minutes(5));

        assert!(booking.check_transition(Active, now).is_ok());
    }

    #[test]
    fn test_cancellation_is_not_time_gated() {
        let now = Utc::now();
        let booking = booking_with(Pending, now + Duration::hours(1));

        assert!(booking.check_transition(Cancelled, now).is_ok());
    }
}
