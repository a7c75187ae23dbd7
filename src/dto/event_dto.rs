use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::event::UtsavEvent;

// Request para declarar un UtsavEvent sobre un spot.
// Fecha y horas llegan como strings (YYYY-MM-DD / HH:MM:SS) y se parsean
// con los helpers de validación.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateEventRequest {
    pub spot_id: Uuid,

    #[validate(length(min = 1, max = 255))]
    pub event_name: String,

    pub event_date: String,
    pub start_time: String,
    pub end_time: String,

    #[validate(range(min = 1))]
    pub capacity_two_wheeler: i32,

    #[validate(range(min = 0))]
    pub capacity_four_wheeler: Option<i32>,

    pub price_two_wheeler: Decimal,

    pub price_four_wheeler: Option<Decimal>,

    pub description: Option<String>,
}

// Response de evento
#[derive(Debug, Serialize)]
pub struct EventResponse {
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

impl From<UtsavEvent> for EventResponse {
    fn from(event: UtsavEvent) -> Self {
        Self {
            id: event.id,
            spot_id: event.spot_id,
            event_name: event.event_name,
            event_date: event.event_date,
            start_time: event.start_time,
            end_time: event.end_time,
            capacity_two_wheeler: event.capacity_two_wheeler,
            capacity_four_wheeler: event.capacity_four_wheeler,
            price_two_wheeler: event.price_two_wheeler.round_dp(2),
            price_four_wheeler: event.price_four_wheeler.round_dp(2),
            description: event.description,
            is_active: event.is_active,
            created_at: event.created_at,
        }
    }
}
