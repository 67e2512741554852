use crate::models::inspection::{Inspection, NewInspection};
use crate::utils::errors::AppError;
use sqlx::PgConnection;

pub struct InspectionRepository;

impl InspectionRepository {
    pub async fn create(
        conn: &mut PgConnection,
        inspection: &NewInspection,
    ) -> Result<Inspection, AppError> {
        let created = sqlx::query_as::<_, Inspection>(
            r#"
            INSERT INTO inspections (vehicle_id, inspection_date, result)
            VALUES ($1, $2, $3)
            RETURNING inspection_id, vehicle_id, inspection_date, result
            "#,
        )
        .bind(inspection.vehicle_id)
        .bind(inspection.inspection_date)
        .bind(&inspection.result)
        .fetch_one(&mut *conn)
        .await?;

        Ok(created)
    }

    pub async fn list_all(conn: &mut PgConnection) -> Result<Vec<Inspection>, AppError> {
        let inspections = sqlx::query_as::<_, Inspection>(
            "SELECT inspection_id, vehicle_id, inspection_date, result FROM inspections ORDER BY inspection_id",
        )
        .fetch_all(&mut *conn)
        .await?;

        Ok(inspections)
    }
}
