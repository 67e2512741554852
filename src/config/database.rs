//! Configuración de base de datos
//!
//! Este módulo maneja la configuración del pool de PostgreSQL con SQLx.

use anyhow::{Context, Result};
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::env;
use std::time::Duration;

/// Configuración de la base de datos
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout: Duration,
    pub idle_timeout: Duration,
    pub max_lifetime: Duration,
}

impl DatabaseConfig {
    /// Configuración por defecto para una URL dada
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: 10,
            min_connections: 1,
            acquire_timeout: Duration::from_secs(30),
            idle_timeout: Duration::from_secs(300),
            max_lifetime: Duration::from_secs(3600),
        }
    }

    /// Leer el tamaño del pool de DB_MAX_CONNECTIONS / DB_MIN_CONNECTIONS
    pub fn from_env(url: impl Into<String>) -> Result<Self> {
        let mut config = Self::new(url);
        if let Ok(value) = env::var("DB_MAX_CONNECTIONS") {
            config.max_connections = value
                .parse()
                .context("DB_MAX_CONNECTIONS must be a valid number")?;
        }
        if let Ok(value) = env::var("DB_MIN_CONNECTIONS") {
            config.min_connections = value
                .parse()
                .context("DB_MIN_CONNECTIONS must be a valid number")?;
        }
        config.min_connections = config.min_connections.min(config.max_connections);
        Ok(config)
    }

    fn pool_options(&self) -> PgPoolOptions {
        PgPoolOptions::new()
            .max_connections(self.max_connections)
            .min_connections(self.min_connections)
            .acquire_timeout(self.acquire_timeout)
            .idle_timeout(self.idle_timeout)
            .max_lifetime(self.max_lifetime)
    }

    /// Crear un nuevo pool de conexiones
    pub async fn create_pool(&self) -> Result<PgPool, sqlx::Error> {
        self.pool_options().connect(&self.url).await
    }

    /// Crear un pool que no conecta hasta el primer uso
    pub fn create_lazy_pool(&self) -> Result<PgPool, sqlx::Error> {
        self.pool_options().min_connections(0).connect_lazy(&self.url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_config_new() {
        let config = DatabaseConfig::new("postgres://u:p@localhost/db");
        assert_eq!(config.max_connections, 10);
        assert_eq!(config.min_connections, 1);
        assert_eq!(config.url, "postgres://u:p@localhost/db");
    }

    #[tokio::test]
    async fn test_lazy_pool_does_not_connect() {
        let config = DatabaseConfig::new("postgres://u:p@127.0.0.1:1/unreachable");
        let pool = config.create_lazy_pool().unwrap();
        assert_eq!(pool.size(), 0);
    }
}
