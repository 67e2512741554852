//! Modelo de Address

use serde::Serialize;
use sqlx::FromRow;

use super::or_empty;

/// Address - mapea exactamente a la tabla addresses
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Address {
    pub address_id: i32,
    pub owner_id: i32,
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
}

impl Address {
    /// Línea del listado: "street, city, state, zip - Owner ID: n"
    pub fn display_line(&self) -> String {
        format!(
            "{}, {}, {}, {} - Owner ID: {}",
            or_empty(&self.street),
            or_empty(&self.city),
            or_empty(&self.state),
            or_empty(&self.zip),
            self.owner_id
        )
    }
}

/// Datos validados para insertar una dirección
#[derive(Debug, Clone, PartialEq)]
pub struct NewAddress {
    pub owner_id: i32,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_line() {
        let address = Address {
            address_id: 3,
            owner_id: 1,
            street: Some("1 Main St".to_string()),
            city: Some("Springfield".to_string()),
            state: Some("IL".to_string()),
            zip: Some("62701".to_string()),
        };
        assert_eq!(
            address.display_line(),
            "1 Main St, Springfield, IL, 62701 - Owner ID: 1"
        );
    }
}
