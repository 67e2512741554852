use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

use crate::models::inspection::NewInspection;
use crate::utils::errors::AppError;
use crate::utils::validation::is_blank;

pub const INSPECTION_REQUIRED: &str = "Inspection Date and Result are required.";
pub const INSPECTION_ADDED: &str = "Inspection added successfully!";

// Formulario "Add Inspection"
#[derive(Debug, Default, Deserialize, Validate)]
pub struct CreateInspectionRequest {
    pub vehicle_id: Option<i32>,

    pub inspection_date: Option<NaiveDate>,

    #[serde(default)]
    #[validate(length(max = 50))]
    pub result: String,
}

impl CreateInspectionRequest {
    pub fn into_new_inspection(self) -> Result<NewInspection, AppError> {
        let request = Self {
            result: self.result.trim().to_string(),
            ..self
        };

        let (vehicle_id, inspection_date) = match (request.vehicle_id, request.inspection_date) {
            (Some(vehicle_id), Some(date)) if !is_blank(&request.result) => (vehicle_id, date),
            _ => return Err(AppError::MissingFields(INSPECTION_REQUIRED.to_string())),
        };
        request.validate()?;

        Ok(NewInspection {
            vehicle_id,
            inspection_date,
            result: request.result,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_inspection() {
        let r = CreateInspectionRequest {
            vehicle_id: Some(1),
            inspection_date: NaiveDate::from_ymd_opt(2024, 3, 5),
            result: " Passed ".to_string(),
        };
        let inspection = r.into_new_inspection().unwrap();
        assert_eq!(inspection.result, "Passed");
    }

    #[test]
    fn test_missing_result() {
        let r = CreateInspectionRequest {
            vehicle_id: Some(1),
            inspection_date: NaiveDate::from_ymd_opt(2024, 3, 5),
            result: String::new(),
        };
        assert!(matches!(
            r.into_new_inspection(),
            Err(AppError::MissingFields(m)) if m == INSPECTION_REQUIRED
        ));
    }

    #[test]
    fn test_missing_date() {
        let r = CreateInspectionRequest {
            vehicle_id: Some(1),
            inspection_date: None,
            result: "Passed".to_string(),
        };
        assert!(r.into_new_inspection().is_err());
    }
}
