use crate::models::vehicle::{NewVehicle, Vehicle};
use crate::utils::errors::AppError;
use sqlx::PgConnection;

pub struct VehicleRepository;

impl VehicleRepository {
    pub async fn create(conn: &mut PgConnection, vehicle: &NewVehicle) -> Result<Vehicle, AppError> {
        let created = sqlx::query_as::<_, Vehicle>(
            r#"
            INSERT INTO vehicles (owner_id, make, model, year, plate_number)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING vehicle_id, owner_id, make, model, year, plate_number
            "#,
        )
        .bind(vehicle.owner_id)
        .bind(&vehicle.make)
        .bind(&vehicle.model)
        .bind(vehicle.year)
        .bind(&vehicle.plate_number)
        .fetch_one(&mut *conn)
        .await?;

        Ok(created)
    }

    pub async fn list_all(conn: &mut PgConnection) -> Result<Vec<Vehicle>, AppError> {
        let vehicles = sqlx::query_as::<_, Vehicle>(
            "SELECT vehicle_id, owner_id, make, model, year, plate_number FROM vehicles ORDER BY vehicle_id",
        )
        .fetch_all(&mut *conn)
        .await?;

        Ok(vehicles)
    }

    pub async fn exists(conn: &mut PgConnection, vehicle_id: i32) -> Result<bool, AppError> {
        let result: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM vehicles WHERE vehicle_id = $1)")
                .bind(vehicle_id)
                .fetch_one(&mut *conn)
                .await?;

        Ok(result.0)
    }
}
