use crate::dto::home_dto::HomeStats;
use crate::utils::errors::AppError;
use sqlx::PgConnection;

pub struct StatsRepository;

impl StatsRepository {
    /// Totales de la pantalla de inicio en una sola consulta
    pub async fn home_stats(conn: &mut PgConnection) -> Result<HomeStats, AppError> {
        let stats = sqlx::query_as::<_, HomeStats>(
            r#"
            SELECT
                (SELECT COUNT(*) FROM owners) AS total_owners,
                (SELECT COUNT(*) FROM vehicles) AS total_vehicles,
                (SELECT COUNT(*) FROM inspections) AS total_inspections,
                (SELECT COUNT(*) FROM fees) AS total_fees
            "#,
        )
        .fetch_one(&mut *conn)
        .await?;

        Ok(stats)
    }
}
