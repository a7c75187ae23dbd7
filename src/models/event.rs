//! Modelo de UtsavEvent
//!
//! Evento temporal (festival) ligado a un ParkingSpot: una fecha de
//! calendario, horario propio, y capacidad/precio propios por tipo de
//! vehículo. Los eventos no cruzan medianoche.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::time_range::TimeRange;
use super::vehicle::VehicleType;
use crate::utils::errors::AppError;

/// UtsavEvent principal - mapea a la tabla utsav_events
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct UtsavEvent {
    pub id: Uuid,
    pub spot_id: Uuid,
    pub event_name: String,
    pub event_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub capacity_two_wheeler: i32,
    pub capacity_four_wheeler: i32,
    pub price_two_wheeler: Decimal,
    pub price_four_wheeler: Decimal,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl UtsavEvent {
    /// Combinar fecha + horario del evento en un TimeRange concreto en UTC
    pub fn concrete_range(&self) -> Result<TimeRange, AppError> {
        let start = self.event_date.and_time(self.start_time).and_utc();
        let end = self.event_date.and_time(self.end_time).and_utc();
        TimeRange::new(start, end)
    }

    /// Capacidad temporal del evento para un tipo de vehículo
    pub fn capacity_for(&self, vehicle_type: VehicleType) -> i32 {
        match vehicle_type {
            VehicleType::TwoWheeler => self.capacity_two_wheeler,
            VehicleType::FourWheeler => self.capacity_four_wheeler,
        }
    }

    /// Tarifa especial por hora durante el evento (NPR)
    pub fn price_for(&self, vehicle_type: VehicleType) -> Decimal {
        match vehicle_type {
            VehicleType::TwoWheeler => self.price_two_wheeler,
            VehicleType::FourWheeler => self.price_four_wheeler,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample_event(
        date: NaiveDate,
        start: NaiveTime,
        end: NaiveTime,
    ) -> UtsavEvent {
        UtsavEvent {
            id: Uuid::new_v4(),
            spot_id: Uuid::new_v4(),
            event_name: "Gai Jatra 2026".to_string(),
            event_date: date,
            start_time: start,
            end_time: end,
            capacity_two_wheeler: 20,
            capacity_four_wheeler: 5,
            price_two_wheeler: dec!(60),
            price_four_wheeler: dec!(120),
            description: None,
            is_active: true,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_concrete_range_combines_date_and_times() {
        let event = sample_event(
            NaiveDate::from_ymd_opt(2026, 1, 25).unwrap(),
            NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
        );
        let range = event.concrete_range().unwrap();
        assert_eq!(range.start().to_rfc3339(), "2026-01-25T09:00:00+00:00");
        assert_eq!(range.end().to_rfc3339(), "2026-01-25T18:00:00+00:00");
    }

    #[test]
    fn test_concrete_range_rejects_inverted_times() {
        let event = sample_event(
            NaiveDate::from_ymd_opt(2026, 1, 25).unwrap(),
            NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
        );
        assert!(event.concrete_range().is_err());
    }
}
