use crate::models::address::{Address, NewAddress};
use crate::utils::errors::AppError;
use sqlx::PgConnection;

pub struct AddressRepository;

impl AddressRepository {
    pub async fn create(conn: &mut PgConnection, address: &NewAddress) -> Result<Address, AppError> {
        let created = sqlx::query_as::<_, Address>(
            r#"
            INSERT INTO addresses (owner_id, street, city, state, zip)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING address_id, owner_id, street, city, state, zip
            "#,
        )
        .bind(address.owner_id)
        .bind(&address.street)
        .bind(&address.city)
        .bind(&address.state)
        .bind(&address.zip)
        .fetch_one(&mut *conn)
        .await?;

        Ok(created)
    }

    pub async fn list_all(conn: &mut PgConnection) -> Result<Vec<Address>, AppError> {
        let addresses = sqlx::query_as::<_, Address>(
            "SELECT address_id, owner_id, street, city, state, zip FROM addresses ORDER BY address_id",
        )
        .fetch_all(&mut *conn)
        .await?;

        Ok(addresses)
    }
}
