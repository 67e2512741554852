use serde::Deserialize;
use validator::Validate;

use crate::models::vehicle::NewVehicle;
use crate::utils::errors::AppError;
use crate::utils::validation::any_blank;

use super::owner_dto::ALL_FIELDS_REQUIRED;

pub const VEHICLE_ADDED: &str = "Vehicle added successfully!";
pub const VEHICLE_NOT_FOUND: &str = "Vehicle not found.";

// Formulario "Add Vehicle"
#[derive(Debug, Default, Deserialize, Validate)]
pub struct CreateVehicleRequest {
    pub owner_id: Option<i32>,

    #[serde(default)]
    #[validate(length(max = 50))]
    pub make: String,

    #[serde(default)]
    #[validate(length(max = 50))]
    pub model: String,

    #[validate(range(min = 1886, max = 2100))]
    pub year: Option<i32>,

    #[serde(default)]
    #[validate(length(max = 20))]
    pub plate_number: String,
}

impl CreateVehicleRequest {
    pub fn into_new_vehicle(self) -> Result<NewVehicle, AppError> {
        let request = Self {
            owner_id: self.owner_id,
            make: self.make.trim().to_string(),
            model: self.model.trim().to_string(),
            year: self.year,
            plate_number: self.plate_number.trim().to_string(),
        };

        let (owner_id, year) = match (request.owner_id, request.year) {
            (Some(owner_id), Some(year))
                if !any_blank(&[&request.make, &request.model, &request.plate_number]) =>
            {
                (owner_id, year)
            }
            _ => return Err(AppError::MissingFields(ALL_FIELDS_REQUIRED.to_string())),
        };
        request.validate()?;

        Ok(NewVehicle {
            owner_id,
            make: request.make,
            model: request.model,
            year,
            plate_number: request.plate_number,
        })
    }
}
