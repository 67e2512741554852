//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno y variables de configuración.

use anyhow::{anyhow, Context, Result};
use std::env;
use std::str::FromStr;

use crate::utils::password::PasswordScheme;

/// Duración máxima de un token de sesión, en segundos
pub const MAX_JWT_EXPIRATION: u64 = i64::MAX as u64 / 1000;

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub port: u16,
    pub host: String,
    pub database_url: String,
    pub jwt_secret: String,
    pub jwt_expiration: u64,
    pub cors_origins: Vec<String>,
    pub password_scheme: PasswordScheme,
    pub bootstrap_schema: bool,
    pub log_level: tracing::Level,
}

impl EnvironmentConfig {
    /// Cargar la configuración desde las variables de entorno
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Cargar la configuración desde una fuente arbitraria de claves
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get_or = |key: &str, default: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let database_url = lookup("DATABASE_URL")
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| anyhow!("DATABASE_URL must be set"))?;
        let jwt_secret = lookup("JWT_SECRET")
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| anyhow!("JWT_SECRET must be set"))?;

        let port = get_or("PORT", "3000")
            .parse::<u16>()
            .context("PORT must be a valid number")?;
        let jwt_expiration = get_or("JWT_EXPIRATION", "86400")
            .parse::<u64>()
            .context("JWT_EXPIRATION must be a valid number")?;
        if !(1..=MAX_JWT_EXPIRATION).contains(&jwt_expiration) {
            return Err(anyhow!(
                "JWT_EXPIRATION must be between 1 and {} seconds",
                MAX_JWT_EXPIRATION
            ));
        }
        let password_scheme = PasswordScheme::from_str(&get_or("PASSWORD_SCHEME", "plaintext"))
            .map_err(|e| anyhow!(e))?;
        let bootstrap_schema = parse_bool(&get_or("BOOTSTRAP_SCHEMA", "true"))
            .ok_or_else(|| anyhow!("BOOTSTRAP_SCHEMA must be true or false"))?;
        let log_level = tracing::Level::from_str(&get_or("LOG_LEVEL", "info"))
            .map_err(|_| anyhow!("LOG_LEVEL must be one of trace, debug, info, warn, error"))?;

        let cors_origins = get_or("CORS_ORIGINS", "")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Ok(Self {
            environment: get_or("ENVIRONMENT", "development"),
            port,
            host: get_or("HOST", "0.0.0.0"),
            database_url,
            jwt_secret,
            jwt_expiration,
            cors_origins,
            password_scheme,
            bootstrap_schema,
            log_level,
        })
    }

    /// Obtener la URL del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
