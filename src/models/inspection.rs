//! Modelo de Inspection

use chrono::NaiveDate;
use serde::Serialize;
use sqlx::FromRow;

use super::or_empty;

/// Inspection - mapea exactamente a la tabla inspections
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Inspection {
    pub inspection_id: i32,
    pub vehicle_id: i32,
    pub inspection_date: Option<NaiveDate>,
    pub result: Option<String>,
}

impl Inspection {
    /// Línea del listado: "Date: d, Result: r - Vehicle ID: n"
    pub fn display_line(&self) -> String {
        let date = self.inspection_date.map(|d| d.to_string()).unwrap_or_default();
        format!(
            "Date: {}, Result: {} - Vehicle ID: {}",
            date,
            or_empty(&self.result),
            self.vehicle_id
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewInspection {
    pub vehicle_id: i32,
    pub inspection_date: NaiveDate,
    pub result: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_line() {
        let inspection = Inspection {
            inspection_id: 1,
            vehicle_id: 9,
            inspection_date: NaiveDate::from_ymd_opt(2024, 3, 5),
            result: Some("Passed".to_string()),
        };
        assert_eq!(
            inspection.display_line(),
            "Date: 2024-03-05, Result: Passed - Vehicle ID: 9"
        );
    }
}
