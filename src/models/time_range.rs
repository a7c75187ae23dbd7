//! Rango de tiempo validado
//!
//! Par (start, end) en UTC con el invariante `end > start`. Todo el motor
//! de reservas opera sobre este tipo; la duración se mantiene como Decimal
//! exacto para facturación.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

use crate::utils::errors::AppError;

const SECONDS_PER_HOUR: Decimal = dec!(3600);

/// Intervalo semiabierto `[start, end)` en UTC.
/// La construcción valida el invariante, por eso los campos son privados.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeRange {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl TimeRange {
    /// Construir un rango validando `end > start`
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, AppError> {
        if end <= start {
            return Err(AppError::InvalidTimeRange(
                "End time must be after start time".to_string(),
            ));
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Fechas de calendario que toca el rango (inicio y fin)
    pub fn start_date(&self) -> NaiveDate {
        self.start.date_naive()
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end.date_naive()
    }

    /// Duración en horas como fracción exacta, sin redondear
    pub fn duration_hours(&self) -> Decimal {
        let seconds = (self.end - self.start).num_seconds();
        Decimal::from(seconds) / SECONDS_PER_HOUR
    }

    /// Test de solapamiento estricto entre intervalos semiabiertos:
    /// tocar el borde no cuenta como solapamiento
    pub fn overlaps(&self, other: &TimeRange) -> bool {
        self.start < other.end && other.start < self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 25, h, m, 0).unwrap()
    }

    #[test]
    fn test_rejects_inverted_and_empty_ranges() {
        assert!(TimeRange::new(at(12, 0), at(10, 0)).is_err());
        assert!(TimeRange::new(at(10, 0), at(10, 0)).is_err());
        assert!(TimeRange::new(at(10, 0), at(12, 0)).is_ok());
    }

    #[test]
    fn test_duration_is_exact_fraction() {
        let three_hours = TimeRange::new(at(10, 0), at(13, 0)).unwrap();
        assert_eq!(three_hours.duration_hours(), dec!(3));

        let ninety_minutes = TimeRange::new(at(10, 0), at(11, 30)).unwrap();
        assert_eq!(ninety_minutes.duration_hours(), dec!(1.5));
    }

    #[test]
    fn test_strict_overlap() {
        let a = TimeRange::new(at(10, 0), at(12, 0)).unwrap();
        let b = TimeRange::new(at(11, 0), at(13, 0)).unwrap();
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));

        let contained = TimeRange::new(at(10, 30), at(11, 0)).unwrap();
        assert!(a.overlaps(&contained));
    }

    #[test]
    fn test_touching_endpoints_do_not_overlap() {
        let a = TimeRange::new(at(10, 0), at(12, 0)).unwrap();
        let b = TimeRange::new(at(12, 0), at(14, 0)).unwrap();
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn test_disjoint_ranges_do_not_overlap() {
        let a = TimeRange::new(at(8, 0), at(9, 0)).unwrap();
        let b = TimeRange::new(at(12, 0), at(14, 0)).unwrap();
        assert!(!a.overlaps(&b));
    }
}
