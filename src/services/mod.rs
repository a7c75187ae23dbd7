//! Services module
//!
//! Este módulo contiene la lógica de negocio del motor de reservas:
//! resolver de eventos, ledger de capacidad y calculadora de precios.
//! Los tres son lecturas puras del snapshot actual del store.

pub mod capacity_service;
pub mod event_service;
pub mod pricing_service;
