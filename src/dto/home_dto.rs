use serde::Serialize;

pub const WELCOME_MESSAGE: &str = "Welcome to the Vehicle Registration System! This application allows you to manage vehicle registrations, inspections, fees, and owner information efficiently.";
pub const SUPPORT_CONTACT: &str = "support@vehicle-registration.com";

// Estadísticas de la pantalla de inicio
#[derive(Debug, Clone, Default, Serialize, PartialEq, sqlx::FromRow)]
pub struct HomeStats {
    pub total_owners: i64,
    pub total_vehicles: i64,
    pub total_inspections: i64,
    pub total_fees: i64,
}

#[derive(Debug, Serialize)]
pub struct HomeResponse {
    pub welcome: &'static str,
    pub contact: &'static str,
    pub stats: HomeStats,
}

impl HomeResponse {
    pub fn new(stats: HomeStats) -> Self {
        Self {
            welcome: WELCOME_MESSAGE,
            contact: SUPPORT_CONTACT,
            stats,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_response_shape() {
        let stats = HomeStats {
            total_owners: 3,
            total_vehicles: 5,
            total_inspections: 2,
            total_fees: 4,
        };
        let json = serde_json::to_value(HomeResponse::new(stats)).unwrap();

        assert!(json["welcome"]
            .as_str()
            .unwrap()
            .starts_with("Welcome to the Vehicle Registration System!"));
        assert_eq!(json["contact"], SUPPORT_CONTACT);
        assert_eq!(json["stats"]["total_vehicles"], 5);
    }
}
