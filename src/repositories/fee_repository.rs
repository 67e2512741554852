use crate::models::fee::{Fee, NewFee};
use crate::utils::errors::AppError;
use sqlx::PgConnection;

pub struct FeeRepository;

impl FeeRepository {
    pub async fn create(conn: &mut PgConnection, fee: &NewFee) -> Result<Fee, AppError> {
        let created = sqlx::query_as::<_, Fee>(
            r#"
            INSERT INTO fees (vehicle_id, amount, due_date, paid)
            VALUES ($1, $2, $3, $4)
            RETURNING fee_id, vehicle_id, amount, due_date, paid
            "#,
        )
        .bind(fee.vehicle_id)
        .bind(fee.amount)
        .bind(fee.due_date)
        .bind(fee.paid)
        .fetch_one(&mut *conn)
        .await?;

        Ok(created)
    }

    pub async fn list_all(conn: &mut PgConnection) -> Result<Vec<Fee>, AppError> {
        let fees = sqlx::query_as::<_, Fee>(
            "SELECT fee_id, vehicle_id, amount, due_date, paid FROM fees ORDER BY fee_id",
        )
        .fetch_all(&mut *conn)
        .await?;

        Ok(fees)
    }
}
