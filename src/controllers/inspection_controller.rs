use crate::dto::api_response::{ApiResponse, ListResponse};
use crate::dto::inspection_dto::{CreateInspectionRequest, INSPECTION_ADDED};
use crate::dto::vehicle_dto::VEHICLE_NOT_FOUND;
use crate::models::inspection::Inspection;
use crate::repositories::inspection_repository::InspectionRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::AppError;
use sqlx::PgPool;
use tracing::info;

pub struct InspectionController {
    pool: PgPool,
}

impl InspectionController {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        request: CreateInspectionRequest,
    ) -> Result<ApiResponse<Inspection>, AppError> {
        let new_inspection = request.into_new_inspection()?;

        let mut tx = self.pool.begin().await?;
        if !VehicleRepository::exists(&mut tx, new_inspection.vehicle_id).await? {
            return Err(AppError::NotFound(VEHICLE_NOT_FOUND.to_string()));
        }

        let inspection = InspectionRepository::create(&mut tx, &new_inspection).await?;
        tx.commit().await?;

        info!(
            "🔍 Inspección {} creada para vehículo {}",
            inspection.inspection_id, inspection.vehicle_id
        );
        Ok(ApiResponse::success_with_message(inspection, INSPECTION_ADDED))
    }

    pub async fn list(&self) -> Result<ListResponse<Inspection>, AppError> {
        let mut conn = self.pool.acquire().await?;
        let inspections = InspectionRepository::list_all(&mut conn).await?;

        Ok(ListResponse::from_records(inspections, Inspection::display_line))
    }
}
