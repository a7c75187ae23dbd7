//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno y las políticas
//! de reserva configurables.

use std::env;

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub port: u16,
    pub host: String,
    pub cors_origins: Vec<String>,
    /// Duración mínima de una reserva, en horas
    pub min_booking_hours: i64,
    /// Duración máxima de una reserva, en horas
    pub max_booking_hours: i64,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            cors_origins: env::var("CORS_ORIGINS")
                .map(|v| v.split(',').map(|s| s.trim().to_string()).collect())
                .unwrap_or_default(),
            min_booking_hours: env::var("MIN_BOOKING_HOURS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1),
            max_booking_hours: env::var("MAX_BOOKING_HOURS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(72),
        }
    }
}

impl EnvironmentConfig {
    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Verificar si estamos en modo producción
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}
