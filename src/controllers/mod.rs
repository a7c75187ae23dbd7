//! Controladores de la API
//!
//! Orquestación entre DTOs, servicios y repositorios.

pub mod booking_controller;
pub mod event_controller;
pub mod spot_controller;
