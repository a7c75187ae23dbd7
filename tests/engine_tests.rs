//! Tests del motor de admisión y pricing sobre su API pura

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use uuid::Uuid;

use gallipark_backend::models::booking::BookingStatus;
use gallipark_backend::models::event::UtsavEvent;
use gallipark_backend::models::pricing::PriceBreakdown;
use gallipark_backend::models::time_range::TimeRange;
use gallipark_backend::services::capacity_service::CapacityReport;
use gallipark_backend::services::event_service::overlapping_event;

fn ts(day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, day, hour, minute, 0).unwrap()
}

fn window(day: u32, start_h: u32, end_h: u32) -> TimeRange {
    TimeRange::new(ts(day, start_h, 0), ts(day, end_h, 0)).unwrap()
}

fn event_on(day: u32, start: (u32, u32), end: (u32, u32)) -> UtsavEvent {
    UtsavEvent {
        id: Uuid::new_v4(),
        spot_id: Uuid::new_v4(),
        event_name: "Gai Jatra".to_string(),
        event_date: NaiveDate::from_ymd_opt(2026, 1, day).unwrap(),
        start_time: NaiveTime::from_hms_opt(start.0, start.1, 0).unwrap(),
        end_time: NaiveTime::from_hms_opt(end.0, end.1, 0).unwrap(),
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
fn booking_ending_at_event_start_gets_no_surcharge() {
    // evento 13:00-18:00, reserva 10:00-13:00: tocar el borde no solapa
    let candidates = vec![event_on(25, (13, 0), (18, 0))];
    let booking_window = window(25, 10, 13);

    let found = overlapping_event(candidates, &booking_window);
    assert!(found.is_none());

    let breakdown = PriceBreakdown::compute(dec!(50), &booking_window, found);
    assert_eq!(breakdown.event_surcharge_amount, Decimal::ZERO);
    assert_eq!(breakdown.total_price, dec!(150));
}

#[test]
fn partial_event_overlap_applies_surcharge_on_base_rate() {
    // evento 10:00-12:00, reserva 10:00-14:00 a tarifa base 50:
    // el solapamiento parcial dispara el recargo del 20%
    let candidates = vec![event_on(25, (10, 0), (12, 0))];
    let booking_window = window(25, 10, 14);

    let found = overlapping_event(candidates, &booking_window);
    assert!(found.is_some());

    let breakdown = PriceBreakdown::compute(dec!(50), &booking_window, found);
    assert_eq!(breakdown.base_price, dec!(200));
    assert_eq!(breakdown.event_surcharge_amount, dec!(40));
    assert_eq!(breakdown.total_price, dec!(240));
}

#[test]
fn window_spanning_midnight_matches_next_day_event() {
    // reserva 23:00 del 25 a 01:00 del 26; evento el 26 de 00:00 a 02:00
    let booking_window = TimeRange::new(ts(25, 23, 0), ts(26, 1, 0)).unwrap();
    let candidates = vec![event_on(26, (0, 0), (2, 0))];

    assert!(overlapping_event(candidates, &booking_window).is_some());
}

#[test]
fn pricing_is_a_pure_function_of_its_inputs() {
    let booking_window = window(25, 10, 13);
    let first = PriceBreakdown::compute(dec!(60), &booking_window, Some(event_on(25, (9, 0), (18, 0))));
    let second = PriceBreakdown::compute(dec!(60), &booking_window, Some(event_on(25, (9, 0), (18, 0))));

    assert_eq!(first.total_price, second.total_price);
    assert_eq!(first.total_price, dec!(216.00));
}

#[test]
fn surcharge_presence_is_invariant_under_candidate_order() {
    let a = event_on(25, (9, 0), (12, 0));
    let b = event_on(25, (11, 0), (14, 0));
    let booking_window = window(25, 11, 12);

    let forward = overlapping_event(vec![a.clone(), b.clone()], &booking_window);
    let reversed = overlapping_event(vec![b, a], &booking_window);
    assert_eq!(forward.is_some(), reversed.is_some());

    let total_forward = PriceBreakdown::compute(dec!(50), &booking_window, forward).total_price;
    let total_reversed = PriceBreakdown::compute(dec!(50), &booking_window, reversed).total_price;
    assert_eq!(total_forward, total_reversed);
}

#[test]
fn rounded_snapshot_round_trips_through_recomputation() {
    // el desglose recomputado, redondeado en la frontera, coincide con el
    // snapshot persistido en la admisión
    let booking_window = TimeRange::new(ts(25, 10, 0), ts(25, 11, 30)).unwrap();
    let admission = PriceBreakdown::compute(dec!(33.33), &booking_window, None);
    let stored_total = admission.total_price.round_dp(2);

    let recomputed = PriceBreakdown::compute(dec!(33.33), &booking_window, None);
    assert_eq!(recomputed.total_price.round_dp(2), stored_total);
}

#[test]
fn full_capacity_yields_zero_available_units() {
    // capacidad 10, 10 reservas pending/active solapadas
    let report = CapacityReport::new(10, 10);
    assert_eq!(report.available_units, 0);
    assert!(!report.is_available());
}

#[test]
fn capacity_never_reports_negative_availability() {
    let report = CapacityReport::new(10, 12);
    assert_eq!(report.available_units, 0);
    assert_eq!(report.available_raw, -2);
}

#[test]
fn booking_lifecycle_happy_path() {
    let mut status = BookingStatus::Pending;
    for next in [BookingStatus::Active, BookingStatus::Completed] {
        assert!(status.can_transition_to(next));
        status = next;
    }
    assert!(!status.can_transition_to(BookingStatus::Cancelled));
}

#[test]
fn cancelled_booking_is_terminal() {
    assert!(BookingStatus::Pending.can_transition_to(BookingStatus::Cancelled));
    for target in [
        BookingStatus::Pending,
        BookingStatus::Active,
        BookingStatus::Completed,
    ] {
        assert!(!BookingStatus::Cancelled.can_transition_to(target));
    }
}
