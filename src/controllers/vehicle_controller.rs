use crate::dto::api_response::{ApiResponse, ListResponse, SelectOption};
use crate::dto::owner_dto::OWNER_NOT_FOUND;
use crate::dto::vehicle_dto::{CreateVehicleRequest, VEHICLE_ADDED};
use crate::models::vehicle::Vehicle;
use crate::repositories::owner_repository::OwnerRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::AppError;
use sqlx::PgPool;
use tracing::info;

pub struct VehicleController {
    pool: PgPool,
}

impl VehicleController {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, request: CreateVehicleRequest) -> Result<ApiResponse<Vehicle>, AppError> {
        let new_vehicle = request.into_new_vehicle()?;

        let mut tx = self.pool.begin().await?;
        if !OwnerRepository::exists(&mut tx, new_vehicle.owner_id).await? {
            return Err(AppError::NotFound(OWNER_NOT_FOUND.to_string()));
        }

        let vehicle = VehicleRepository::create(&mut tx, &new_vehicle).await?;
        tx.commit().await?;

        info!("🚗 Vehículo {} creado para owner {}", vehicle.vehicle_id, vehicle.owner_id);
        Ok(ApiResponse::success_with_message(vehicle, VEHICLE_ADDED))
    }

    pub async fn list(&self) -> Result<ListResponse<Vehicle>, AppError> {
        let mut conn = self.pool.acquire().await?;
        let vehicles = VehicleRepository::list_all(&mut conn).await?;

        Ok(ListResponse::from_records(vehicles, Vehicle::display_line))
    }

    /// Opciones del selector de vehículo
    pub async fn options(&self) -> Result<Vec<SelectOption>, AppError> {
        let mut conn = self.pool.acquire().await?;
        let vehicles = VehicleRepository::list_all(&mut conn).await?;

        Ok(vehicles
            .iter()
            .map(|vehicle| SelectOption {
                id: vehicle.vehicle_id,
                label: vehicle.label(),
            })
            .collect())
    }
}
