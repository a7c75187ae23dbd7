//! GalliPark - marketplace de micro-parking
//!
//! Motor de admisión y pricing de reservas: conductores descubren spots,
//! reservan por tipo de vehículo y ventana de tiempo, y pagan un precio
//! calculado siempre en el servidor.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;
