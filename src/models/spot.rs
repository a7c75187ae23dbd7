//! Modelo de ParkingSpot
//!
//! Este módulo contiene el struct ParkingSpot que mapea exactamente
//! a la tabla parking_spots del schema.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::vehicle::VehicleType;

/// ParkingSpot principal - mapea a la tabla parking_spots
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ParkingSpot {
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

impl ParkingSpot {
    /// Capacidad base del spot para un tipo de vehículo
    pub fn capacity_for(&self, vehicle_type: VehicleType) -> i32 {
        match vehicle_type {
            VehicleType::TwoWheeler => self.capacity_two_wheeler,
            VehicleType::FourWheeler => self.capacity_four_wheeler,
        }
    }

    /// Tarifa base por hora para un tipo de vehículo (NPR)
    pub fn price_for(&self, vehicle_type: VehicleType) -> Decimal {
        match vehicle_type {
            VehicleType::TwoWheeler => self.price_per_hour_two_wheeler,
            VehicleType::FourWheeler => self.price_per_hour_four_wheeler,
        }
    }
}
