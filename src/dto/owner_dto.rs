use serde::Deserialize;
use validator::Validate;

use crate::models::owner::NewOwner;
use crate::utils::errors::AppError;
use crate::utils::validation::{any_blank, validate_email, validate_phone};

pub const ALL_FIELDS_REQUIRED: &str = "All fields are required.";
pub const INVALID_EMAIL: &str =
    "Invalid email format. Please use a valid email address (e.g., example@example.com).";
pub const INVALID_PHONE: &str = "Phone number must contain only digits.";
pub const DUPLICATE_EMAIL: &str = "An owner with this email already exists.";
pub const DUPLICATE_PHONE: &str = "An owner with this phone number already exists.";
pub const DUPLICATE_NAME: &str = "An owner with this name already exists.";
pub const OWNER_ADDED: &str = "Owner added successfully!";
pub const OWNER_NOT_FOUND: &str = "Owner not found.";

// Formulario "Add Owner"
#[derive(Debug, Default, Deserialize, Validate)]
pub struct CreateOwnerRequest {
    #[serde(default)]
    #[validate(length(max = 50))]
    pub first_name: String,

    #[serde(default)]
    #[validate(length(max = 50))]
    pub last_name: String,

    #[serde(default)]
    #[validate(length(max = 100))]
    pub email: String,

    #[serde(default)]
    #[validate(length(max = 15))]
    pub phone: String,
}

impl CreateOwnerRequest {
    /// Comprobaciones sin base de datos, en orden: presencia, email,
    /// teléfono, anchos de columna.
    pub fn into_new_owner(self) -> Result<NewOwner, AppError> {
        let request = Self {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
        };

        if any_blank(&[
            &request.first_name,
            &request.last_name,
            &request.email,
            &request.phone,
        ]) {
            return Err(AppError::MissingFields(ALL_FIELDS_REQUIRED.to_string()));
        }
        if !validate_email(&request.email) {
            return Err(AppError::InvalidFormat(INVALID_EMAIL.to_string()));
        }
        if !validate_phone(&request.phone) {
            return Err(AppError::InvalidFormat(INVALID_PHONE.to_string()));
        }
        request.validate()?;

        Ok(NewOwner {
            first_name: request.first_name,
            last_name: request.last_name,
            email: request.email,
            phone: request.phone,
        })
    }
}
