use serde::{Deserialize, Serialize};

use crate::models::user::UserResponse;
use crate::utils::errors::AppError;
use crate::utils::validation::any_blank;

pub const CREDENTIALS_REQUIRED: &str = "Username and Password are required.";

// Credenciales de login o de registro
#[derive(Debug, Default, Deserialize)]
pub struct CredentialsRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

impl CredentialsRequest {
    /// Ambos campos son obligatorios
    pub fn check_required(&self) -> Result<(), AppError> {
        if any_blank(&[&self.username, &self.password]) {
            return Err(AppError::MissingFields(CREDENTIALS_REQUIRED.to_string()));
        }
        Ok(())
    }
}

pub type LoginRequest = CredentialsRequest;
pub type SignupRequest = CredentialsRequest;

// Login response
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub token: String,
    pub token_type: &'static str,
    pub expires_in: u64,
    pub user: UserResponse,
}

impl LoginResponse {
    pub fn new(token: String, expires_in: u64, user: UserResponse) -> Self {
        Self {
            success: true,
            token,
            token_type: "Bearer",
            expires_in,
            user,
        }
    }
}
