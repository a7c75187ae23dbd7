//! Repositorios de acceso a datos
//!
//! Cada repositorio encapsula el SQL de una tabla. Las operaciones que
//! deben ejecutarse dentro de la transacción de admisión toman un
//! `&mut PgConnection` o un executor en lugar del pool.

pub mod booking_repository;
pub mod event_repository;
pub mod spot_repository;
