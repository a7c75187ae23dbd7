//! Resolver de solapamiento de eventos
//!
//! Dado un spot y una ventana, encuentra el UtsavEvent activo aplicable.
//! Los candidatos se restringen por fecha de calendario (una ventana puede
//! tocar como mucho el día siguiente) y después se comparan con el test de
//! solapamiento estricto sobre su rango concreto.

use sqlx::PgExecutor;
use uuid::Uuid;

use crate::models::event::UtsavEvent;
use crate::models::time_range::TimeRange;
use crate::repositories::event_repository::EventRepository;
use crate::utils::errors::AppError;

/// Primer candidato cuyo rango concreto solapa la ventana.
///
/// Política de empate: primer match en orden (event_date, created_at).
/// El constraint UNIQUE(spot_id, event_date) hace imposible la simultaneidad
/// real de eventos de un mismo spot.
pub fn overlapping_event(candidates: Vec<UtsavEvent>, window: &TimeRange) -> Option<UtsavEvent> {
    candidates.into_iter().find(|event| {
        event
            .concrete_range()
            .map(|range| range.overlaps(window))
            .unwrap_or(false)
    })
}

/// `findOverlappingEvent(spot, window)`: consulta los candidatos y aplica
/// el scan puro. Función de solo lectura del snapshot actual; no cachea.
pub async fn find_overlapping_event<'e>(
    executor: impl PgExecutor<'e>,
    spot_id: Uuid,
    window: &TimeRange,
) -> Result<Option<UtsavEvent>, AppError> {
    let candidates = EventRepository::active_for_spot_between(
        executor,
        spot_id,
        window.start_date(),
        window.end_date(),
    )
    .await?;

    Ok(overlapping_event(candidates, window))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime, TimeZone, Utc};
    use rust_decimal_macros::dec;

    fn event(start: (u32, u32), end: (u32, u32)) -> UtsavEvent {
        UtsavEvent {
            id: Uuid::new_v4(),
            spot_id: Uuid::new_v4(),
            event_name: "Bisket Jatra".to_string(),
            event_date: NaiveDate::from_ymd_opt(2026, 4, 10).unwrap(),
            start_time: NaiveTime::from_hms_opt(start.0, start.1, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(end.0, end.1, 0).unwrap(),
            capacity_two_wheeler: 30,
            capacity_four_wheeler: 10,
            price_two_wheeler: dec!(60),
            price_four_wheeler: dec!(150),
            description: None,
            is_active: true,
            created_at: Utc::now(),
        }
    }

    fn window(start_h: u32, end_h: u32) -> TimeRange {
        TimeRange::new(
            Utc.with_ymd_and_hms(2026, 4, 10, start_h, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2026, 4, 10, end_h, 0, 0).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_overlapping_candidate_is_found() {
        let found = overlapping_event(vec![event((9, 0), (18, 0))], &window(10, 13));
        assert!(found.is_some());
    }

    #[test]
    fn test_window_ending_at_event_start_is_not_overlap() {
        // tocar el borde no cuenta: ventana 8-10, evento 10-18
        let found = overlapping_event(vec![event((10, 0), (18, 0))], &window(8, 10));
        assert!(found.is_none());
    }

    #[test]
    fn test_window_starting_at_event_end_is_not_overlap() {
        let found = overlapping_event(vec![event((6, 0), (10, 0))], &window(10, 12));
        assert!(found.is_none());
    }

    #[test]
    fn test_no_candidates_yields_none() {
        let found = overlapping_event(vec![], &window(10, 13));
        assert!(found.is_none());
    }

    #[test]
    fn test_first_match_policy() {
        let first = event((9, 0), (12, 0));
        let second = event((11, 0), (14, 0));
        let first_id = first.id;
        let found = overlapping_event(vec![first, second], &window(11, 12)).unwrap();
        assert_eq!(found.id, first_id);
    }

    #[test]
    fn test_overlap_presence_invariant_under_candidate_order() {
        let a = event((9, 0), (12, 0));
        let b = event((11, 0), (14, 0));
        let forward = overlapping_event(vec![a.clone(), b.clone()], &window(11, 12));
        let reversed = overlapping_event(vec![b, a], &window(11, 12));
        // el evento concreto puede diferir, la existencia de solapamiento no
        assert_eq!(forward.is_some(), reversed.is_some());
    }
}
