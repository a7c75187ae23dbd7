use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::spot::ParkingSpot;
use crate::models::vehicle::VehicleType;

// Request para crear un spot
#[derive(Debug, Deserialize, Validate)]
pub struct CreateSpotRequest {
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,

    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,

    #[validate(length(min = 5, max = 500))]
    pub address: String,

    #[validate(length(min = 2, max = 100))]
    pub city: Option<String>,

    pub description: Option<String>,

    #[validate(range(min = 1))]
    pub capacity_two_wheeler: i32,

    #[validate(range(min = 0))]
    pub capacity_four_wheeler: Option<i32>,

    pub price_per_hour_two_wheeler: Decimal,

    pub price_per_hour_four_wheeler: Option<Decimal>,
}

// Response de spot
#[derive(Debug, Serialize)]
pub struct SpotResponse {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub latitude: f64,
    pub longitude: f64,
    pub address: String,
    pub city: String,
    pub description: Option<String>,
    pub capacity_two_wheeler: i32,
    pub capacity_four_wheeler: i32,
    pub price_per_hour_two_wheeler: Decimal,
    pub price_per_hour_four_wheeler: Decimal,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ParkingSpot> for SpotResponse {
    fn from(spot: ParkingSpot) -> Self {
        Self {
            id: spot.id,
            owner_id: spot.owner_id,
            latitude: spot.latitude,
            longitude: spot.longitude,
            address: spot.address,
            city: spot.city,
            description: spot.description,
            capacity_two_wheeler: spot.capacity_two_wheeler,
            capacity_four_wheeler: spot.capacity_four_wheeler,
            price_per_hour_two_wheeler: spot.price_per_hour_two_wheeler.round_dp(2),
            price_per_hour_four_wheeler: spot.price_per_hour_four_wheeler.round_dp(2),
            is_active: spot.is_active,
            created_at: spot.created_at,
            updated_at: spot.updated_at,
        }
    }
}

// Query de disponibilidad (`?start&end&vehicle_type`): timestamps RFC3339
// como strings, se parsean con los helpers de validación para responder 400
// con formato esperado
#[derive(Debug, Deserialize)]
pub struct AvailabilityQuery {
    pub start: String,
    pub end: String,
    pub vehicle_type: VehicleType,
}

// Response de disponibilidad
#[derive(Debug, Serialize)]
pub struct AvailabilityResponse {
    pub spot_id: Uuid,
    pub vehicle_type: VehicleType,
    pub is_available: bool,
    pub available_units: i64,
    pub total_units: i64,
    pub consumed_units: i64,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_availability_query_parameter_names() {
        let query: AvailabilityQuery = serde_json::from_value(json!({
            "start": "2026-01-25T10:00:00Z",
            "end": "2026-01-25T13:00:00Z",
            "vehicle_type": "two_wheeler",
        }))
        .unwrap();

        assert_eq!(query.start, "2026-01-25T10:00:00Z");
        assert_eq!(query.vehicle_type, VehicleType::TwoWheeler);
    }
}
