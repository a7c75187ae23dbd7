//! Modelos del sistema
//!
//! Este módulo contiene todos los modelos de datos que mapean exactamente
//! al schema PostgreSQL, más los tipos de valor del motor de reservas.

pub mod booking;
pub mod event;
pub mod pricing;
pub mod spot;
pub mod time_range;
pub mod vehicle;
