use crate::models::user::User;
use crate::utils::errors::{map_unique_violation, AppError};
use sqlx::PgConnection;

pub const USERNAME_TAKEN: &str = "Username already exists!";

pub struct UserRepository;

impl UserRepository {
    pub async fn create(
        conn: &mut PgConnection,
        username: &str,
        stored_password: &str,
    ) -> Result<User, AppError> {
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username, password, is_admin)
            VALUES ($1, $2, FALSE)
            RETURNING id, username, password, is_admin
            "#,
        )
        .bind(username)
        .bind(stored_password)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| map_unique_violation(e, USERNAME_TAKEN))
    }

    pub async fn find_by_id(conn: &mut PgConnection, id: i32) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, username, password, is_admin FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;

        Ok(user)
    }

    pub async fn find_by_username(
        conn: &mut PgConnection,
        username: &str,
    ) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, username, password, is_admin FROM users WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(&mut *conn)
        .await?;

        Ok(user)
    }

    pub async fn username_exists(conn: &mut PgConnection, username: &str) -> Result<bool, AppError> {
        let result: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM users WHERE username = $1)")
                .bind(username)
                .fetch_one(&mut *conn)
                .await?;

        Ok(result.0)
    }
}
