//! Repositorios
//!
//! Consultas SQL por entidad. Reciben la conexión (o transacción) del
//! llamador para que las comprobaciones y el INSERT de un alta compartan
//! la misma transacción.

pub mod address_repository;
pub mod fee_repository;
pub mod inspection_repository;
pub mod owner_repository;
pub mod stats_repository;
pub mod user_repository;
pub mod vehicle_repository;
