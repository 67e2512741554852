use serde::Deserialize;
use validator::Validate;

use crate::models::address::NewAddress;
use crate::utils::errors::AppError;
use crate::utils::validation::any_blank;

use super::owner_dto::ALL_FIELDS_REQUIRED;

pub const ADDRESS_ADDED: &str = "Address added successfully!";

// Formulario "Add Address"
#[derive(Debug, Default, Deserialize, Validate)]
pub struct CreateAddressRequest {
    pub owner_id: Option<i32>,

    #[serde(default)]
    #[validate(length(max = 100))]
    pub street: String,

    #[serde(default)]
    #[validate(length(max = 50))]
    pub city: String,

    #[serde(default)]
    #[validate(length(max = 50))]
    pub state: String,

    #[serde(default)]
    #[validate(length(max = 10))]
    pub zip: String,
}

impl CreateAddressRequest {
    pub fn into_new_address(self) -> Result<NewAddress, AppError> {
        let request = Self {
            owner_id: self.owner_id,
            street: self.street.trim().to_string(),
            city: self.city.trim().to_string(),
            state: self.state.trim().to_string(),
            zip: self.zip.trim().to_string(),
        };

        let owner_id = match request.owner_id {
            Some(id)
                if !any_blank(&[&request.street, &request.city, &request.state, &request.zip]) =>
            {
                id
            }
            _ => return Err(AppError::MissingFields(ALL_FIELDS_REQUIRED.to_string())),
        };
        request.validate()?;

        Ok(NewAddress {
            owner_id,
            street: request.street,
            city: request.city,
            state: request.state,
            zip: request.zip,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> CreateAddressRequest {
        CreateAddressRequest {
            owner_id: Some(2),
            street: "1 Main St".to_string(),
            city: "Springfield".to_string(),
            state: "IL".to_string(),
            zip: "62701".to_string(),
        }
    }

    #[test]
    fn test_valid_address() {
        let address = request().into_new_address().unwrap();
        assert_eq!(address.owner_id, 2);
        assert_eq!(address.zip, "62701");
    }

    #[test]
    fn test_missing_zip() {
        let mut r = request();
        r.zip.clear();
        assert!(matches!(r.into_new_address(), Err(AppError::MissingFields(m)) if m == ALL_FIELDS_REQUIRED));
    }

    #[test]
    fn test_zip_wider_than_column() {
        let mut r = request();
        r.zip = "12345-67890".to_string();
        assert!(matches!(r.into_new_address(), Err(AppError::Validation(_))));
    }
}
