use crate::dto::owner_dto::{DUPLICATE_EMAIL, DUPLICATE_PHONE};
use crate::models::owner::{NewOwner, Owner};
use crate::utils::errors::{map_unique_violation, AppError};
use sqlx::PgConnection;

const OWNER_COLUMNS: &str = "owner_id, first_name, last_name, email, phone";

pub struct OwnerRepository;

impl OwnerRepository {
    pub async fn create(conn: &mut PgConnection, owner: &NewOwner) -> Result<Owner, AppError> {
        let query = format!(
            r#"
            INSERT INTO owners (first_name, last_name, email, phone)
            VALUES ($1, $2, $3, $4)
            RETURNING {}
            "#,
            OWNER_COLUMNS
        );

        sqlx::query_as::<_, Owner>(&query)
            .bind(&owner.first_name)
            .bind(&owner.last_name)
            .bind(&owner.email)
            .bind(&owner.phone)
            .fetch_one(&mut *conn)
            .await
            .map_err(|e| {
                // Una carrera entre la comprobación y el INSERT cae aquí
                let phone_clash = matches!(
                    &e,
                    sqlx::Error::Database(db) if db.constraint().is_some_and(|c| c.contains("phone"))
                );
                map_unique_violation(e, if phone_clash { DUPLICATE_PHONE } else { DUPLICATE_EMAIL })
            })
    }

    pub async fn list_all(conn: &mut PgConnection) -> Result<Vec<Owner>, AppError> {
        let query = format!("SELECT {} FROM owners ORDER BY owner_id", OWNER_COLUMNS);
        let owners = sqlx::query_as::<_, Owner>(&query)
            .fetch_all(&mut *conn)
            .await?;

        Ok(owners)
    }

    pub async fn exists(conn: &mut PgConnection, owner_id: i32) -> Result<bool, AppError> {
        let result: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM owners WHERE owner_id = $1)")
                .bind(owner_id)
                .fetch_one(&mut *conn)
                .await?;

        Ok(result.0)
    }

    pub async fn email_exists(conn: &mut PgConnection, email: &str) -> Result<bool, AppError> {
        let result: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM owners WHERE email = $1)")
            .bind(email)
            .fetch_one(&mut *conn)
            .await?;

        Ok(result.0)
    }

    pub async fn phone_exists(conn: &mut PgConnection, phone: &str) -> Result<bool, AppError> {
        let result: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM owners WHERE phone = $1)")
            .bind(phone)
            .fetch_one(&mut *conn)
            .await?;

        Ok(result.0)
    }

    pub async fn name_exists(
        conn: &mut PgConnection,
        first_name: &str,
        last_name: &str,
    ) -> Result<bool, AppError> {
        let result: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM owners WHERE first_name = $1 AND last_name = $2)",
        )
        .bind(first_name)
        .bind(last_name)
        .fetch_one(&mut *conn)
        .await?;

        Ok(result.0)
    }
}
