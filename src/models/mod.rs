//! Modelos del sistema
//!
//! Este módulo contiene todos los modelos de datos que mapean exactamente
//! al schema PostgreSQL creado por `database::schema`.

pub mod address;
pub mod fee;
pub mod inspection;
pub mod menu;
pub mod owner;
pub mod user;
pub mod vehicle;

/// Texto de una columna opcional para las líneas de listado
pub(crate) fn or_empty(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("")
}
