use axum::{extract::State, routing::get, Json, Router};
use crate::controllers::inspection_controller::InspectionController;
use crate::dto::api_response::{ApiResponse, ListResponse};
use crate::dto::inspection_dto::CreateInspectionRequest;
use crate::models::inspection::Inspection;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_inspection_router() -> Router<AppState> {
    Router::new().route("/api/inspections", get(list_inspections).post(create_inspection))
}

async fn create_inspection(
    State(state): State<AppState>,
    Json(request): Json<CreateInspectionRequest>,
) -> Result<Json<ApiResponse<Inspection>>, AppError> {
    let controller = InspectionController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn list_inspections(
    State(state): State<AppState>,
) -> Result<Json<ListResponse<Inspection>>, AppError> {
    let controller = InspectionController::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}
