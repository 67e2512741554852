//! Modelo de Vehicle
//!
//! Este módulo contiene el struct Vehicle y sus variantes para CRUD operations.
//! Mapea exactamente al schema PostgreSQL con primary key 'vehicle_id'.

use serde::Serialize;
use sqlx::FromRow;

use super::or_empty;

/// Vehicle principal - mapea exactamente a la tabla vehicles
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Vehicle {
    pub vehicle_id: i32,
    pub owner_id: i32,
    pub make: Option<String>,
    pub model: Option<String>,
    pub year: Option<i32>,
    pub plate_number: Option<String>,
}

impl Vehicle {
    /// Línea del listado: "Make Model (Year) - Owner ID: n"
    pub fn display_line(&self) -> String {
        format!("{} - Owner ID: {}", self.label(), self.owner_id)
    }

    /// Etiqueta usada en los selectores de vehículo: "Make Model (Year)"
    pub fn label(&self) -> String {
        let year = self.year.map(|y| y.to_string()).unwrap_or_default();
        format!("{} {} ({})", or_empty(&self.make), or_empty(&self.model), year)
    }
}

/// Datos validados para insertar un vehículo
#[derive(Debug, Clone, PartialEq)]
pub struct NewVehicle {
    pub owner_id: i32,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub plate_number: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vehicle() -> Vehicle {
        Vehicle {
            vehicle_id: 4,
            owner_id: 2,
            make: Some("Toyota".to_string()),
            model: Some("Corolla".to_string()),
            year: Some(2019),
            plate_number: Some("ABC123".to_string()),
        }
    }

    #[test]
    fn test_display_line() {
        assert_eq!(vehicle().display_line(), "Toyota Corolla (2019) - Owner ID: 2");
    }

    #[test]
    fn test_label() {
        assert_eq!(vehicle().label(), "Toyota Corolla (2019)");
    }
}
