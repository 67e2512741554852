//! Bootstrap del schema
//!
//! Crea las seis tablas si no existen, en orden de claves foráneas y dentro
//! de una sola transacción.

use sqlx::PgPool;
use tracing::info;

/// Sentencias DDL en orden de dependencia
pub const CREATE_TABLE_STATEMENTS: [(&str, &str); 6] = [
    (
        "users",
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id SERIAL PRIMARY KEY,
            username VARCHAR(150) NOT NULL UNIQUE,
            password VARCHAR(150) NOT NULL,
            is_admin BOOLEAN NOT NULL DEFAULT FALSE
        )
        "#,
    ),
    (
        "owners",
        r#"
        CREATE TABLE IF NOT EXISTS owners (
            owner_id SERIAL PRIMARY KEY,
            first_name VARCHAR(50),
            last_name VARCHAR(50),
            email VARCHAR(100) UNIQUE,
            phone VARCHAR(15) UNIQUE
        )
        "#,
    ),
    (
        "addresses",
        r#"
        CREATE TABLE IF NOT EXISTS addresses (
            address_id SERIAL PRIMARY KEY,
            owner_id INTEGER NOT NULL REFERENCES owners (owner_id),
            street VARCHAR(100),
            city VARCHAR(50),
            state VARCHAR(50),
            zip VARCHAR(10)
        )
        "#,
    ),
    (
        "vehicles",
        r#"
        CREATE TABLE IF NOT EXISTS vehicles (
            vehicle_id SERIAL PRIMARY KEY,
            owner_id INTEGER NOT NULL REFERENCES owners (owner_id),
            make VARCHAR(50),
            model VARCHAR(50),
            year INTEGER,
            plate_number VARCHAR(20)
        )
        "#,
    ),
    (
        "inspections",
        r#"
        CREATE TABLE IF NOT EXISTS inspections (
            inspection_id SERIAL PRIMARY KEY,
            vehicle_id INTEGER NOT NULL REFERENCES vehicles (vehicle_id),
            inspection_date DATE,
            result VARCHAR(50)
        )
        "#,
    ),
    (
        "fees",
        r#"
        CREATE TABLE IF NOT EXISTS fees (
            fee_id SERIAL PRIMARY KEY,
            vehicle_id INTEGER NOT NULL REFERENCES vehicles (vehicle_id),
            amount NUMERIC(10, 2),
            due_date DATE,
            paid BOOLEAN
        )
        "#,
    ),
];

/// Crear todas las tablas si no existen
pub async fn create_all_tables(pool: &PgPool) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;

    for (table, statement) in CREATE_TABLE_STATEMENTS {
        sqlx::query(statement).execute(&mut *tx).await?;
        info!("🗄️ Tabla '{}' verificada", table);
    }

    tx.commit().await?;
    info!("✅ Schema listo");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn position(table: &str) -> usize {
        CREATE_TABLE_STATEMENTS
            .iter()
            .position(|(name, _)| *name == table)
            .unwrap()
    }

    #[test]
    fn test_tables_created_after_their_references() {
        assert!(position("owners") < position("addresses"));
        assert!(position("owners") < position("vehicles"));
        assert!(position("vehicles") < position("inspections"));
        assert!(position("vehicles") < position("fees"));
    }

    #[test]
    fn test_statements_are_idempotent() {
        for (table, statement) in CREATE_TABLE_STATEMENTS {
            assert!(statement.contains("IF NOT EXISTS"), "{} is not idempotent", table);
            assert!(statement.contains(table));
        }
    }
}
