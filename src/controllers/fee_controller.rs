use crate::dto::api_response::{ApiResponse, ListResponse};
use crate::dto::fee_dto::{CreateFeeRequest, FEE_ADDED};
use crate::dto::vehicle_dto::VEHICLE_NOT_FOUND;
use crate::models::fee::Fee;
use crate::repositories::fee_repository::FeeRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::AppError;
use sqlx::PgPool;
use tracing::info;

pub struct FeeController {
    pool: PgPool,
}

impl FeeController {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, request: CreateFeeRequest) -> Result<ApiResponse<Fee>, AppError> {
        let new_fee = request.into_new_fee()?;

        let mut tx = self.pool.begin().await?;
        if !VehicleRepository::exists(&mut tx, new_fee.vehicle_id).await? {
            return Err(AppError::NotFound(VEHICLE_NOT_FOUND.to_string()));
        }

        let fee = FeeRepository::create(&mut tx, &new_fee).await?;
        tx.commit().await?;

        info!("💵 Tasa {} creada para vehículo {}", fee.fee_id, fee.vehicle_id);
        Ok(ApiResponse::success_with_message(fee, FEE_ADDED))
    }

    pub async fn list(&self) -> Result<ListResponse<Fee>, AppError> {
        let mut conn = self.pool.acquire().await?;
        let fees = FeeRepository::list_all(&mut conn).await?;

        Ok(ListResponse::from_records(fees, Fee::display_line))
    }
}
