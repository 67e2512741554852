//! Modelo de User
//!
//! Cuentas de acceso a la aplicación. `is_admin` se guarda pero ninguna
//! ruta lo exige.

use serde::Serialize;
use sqlx::FromRow;

/// User - mapea exactamente a la tabla users
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub password: String,
    pub is_admin: bool,
}

/// Response de usuario para la API (sin password)
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: i32,
    pub username: String,
    pub is_admin: bool,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            is_admin: user.is_admin,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_drops_password() {
        let user = User {
            id: 1,
            username: "alice".to_string(),
            password: "secret".to_string(),
            is_admin: false,
        };
        let json = serde_json::to_value(UserResponse::from(user)).unwrap();
        assert_eq!(json["username"], "alice");
        assert!(json.get("password").is_none());
    }
}
