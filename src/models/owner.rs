//! Modelo de Owner
//!
//! Propietarios de vehículos. email y phone son UNIQUE en la tabla; la
//! pareja (first_name, last_name) sólo se comprueba en la aplicación.

use serde::Serialize;
use sqlx::FromRow;

use super::or_empty;

/// Owner - mapea exactamente a la tabla owners
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Owner {
    pub owner_id: i32,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl Owner {
    /// Línea del listado: "First Last - email - phone"
    pub fn display_line(&self) -> String {
        format!(
            "{} - {} - {}",
            self.full_name(),
            or_empty(&self.email),
            or_empty(&self.phone)
        )
    }

    /// Etiqueta usada en los selectores de propietario
    pub fn full_name(&self) -> String {
        format!("{} {}", or_empty(&self.first_name), or_empty(&self.last_name))
    }
}

/// Datos validados para insertar un owner
#[derive(Debug, Clone, PartialEq)]
pub struct NewOwner {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
}
