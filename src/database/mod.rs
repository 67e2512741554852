//! Módulo de base de datos
//!
//! Maneja la conexión y el schema de PostgreSQL

pub mod connection;
pub mod schema;

pub use connection::{create_pool, mask_database_url};
pub use schema::create_all_tables;
