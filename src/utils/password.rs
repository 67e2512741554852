//! Esquemas de credenciales
//!
//! `Plaintext` compara la contraseña tal cual está almacenada (comportamiento
//! heredado). `Bcrypt` guarda hashes con sal y verifica con bcrypt.

use bcrypt::{hash, verify, DEFAULT_COST};
use std::fmt;
use std::str::FromStr;

use crate::utils::errors::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PasswordScheme {
    #[default]
    Plaintext,
    Bcrypt,
}

impl PasswordScheme {
    /// Valor a guardar en la columna `password`
    pub fn hash(&self, raw: &str) -> Result<String, AppError> {
        match self {
            PasswordScheme::Plaintext => Ok(raw.to_string()),
            PasswordScheme::Bcrypt => hash(raw, DEFAULT_COST)
                .map_err(|e| AppError::Hash(format!("Error hashing password: {}", e))),
        }
    }

    /// Comprobar una contraseña contra el valor almacenado
    pub fn verify(&self, raw: &str, stored: &str) -> Result<bool, AppError> {
        match self {
            PasswordScheme::Plaintext => Ok(raw == stored),
            PasswordScheme::Bcrypt => verify(raw, stored)
                .map_err(|e| AppError::Hash(format!("Error verifying password: {}", e))),
        }
    }
}

impl FromStr for PasswordScheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "plaintext" | "plain" => Ok(PasswordScheme::Plaintext),
            "bcrypt" => Ok(PasswordScheme::Bcrypt),
            other => Err(format!(
                "PASSWORD_SCHEME must be 'plaintext' or 'bcrypt', got '{}'",
                other
            )),
        }
    }
}

impl fmt::Display for PasswordScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PasswordScheme::Plaintext => write!(f, "plaintext"),
            PasswordScheme::Bcrypt => write!(f, "bcrypt"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plaintext_round_trip() {
        let scheme = PasswordScheme::Plaintext;
        let stored = scheme.hash("hunter2").unwrap();
        assert_eq!(stored, "hunter2");
        assert!(scheme.verify("hunter2", &stored).unwrap());
        assert!(!scheme.verify("Hunter2", &stored).unwrap());
    }

    #[test]
    fn test_bcrypt_round_trip() {
        let scheme = PasswordScheme::Bcrypt;
        let stored = scheme.hash("hunter2").unwrap();
        assert_ne!(stored, "hunter2");
        assert!(stored.len() <= 150);
        assert!(scheme.verify("hunter2", &stored).unwrap());
        assert!(!scheme.verify("wrong", &stored).unwrap());
    }

    #[test]
    fn test_bcrypt_rejects_plaintext_row() {
        // Una fila guardada en texto plano no es un hash bcrypt válido
        assert!(PasswordScheme::Bcrypt.verify("hunter2", "hunter2").is_err());
    }

    #[test]
    fn test_parse_scheme() {
        assert_eq!("plaintext".parse::<PasswordScheme>(), Ok(PasswordScheme::Plaintext));
        assert_eq!("BCRYPT".parse::<PasswordScheme>(), Ok(PasswordScheme::Bcrypt));
        assert!("md5".parse::<PasswordScheme>().is_err());
    }
}
