//! Tipos de request/response de la API

pub mod booking_dto;
pub mod common;
pub mod event_dto;
pub mod spot_dto;
