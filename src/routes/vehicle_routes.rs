use axum::{extract::State, routing::get, Json, Router};
use crate::controllers::vehicle_controller::VehicleController;
use crate::dto::api_response::{ApiResponse, ListResponse, SelectOption};
use crate::dto::vehicle_dto::CreateVehicleRequest;
use crate::models::vehicle::Vehicle;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_vehicle_router() -> Router<AppState> {
    Router::new()
        .route("/api/vehicles", get(list_vehicles).post(create_vehicle))
        .route("/api/vehicles/options", get(vehicle_options))
}

async fn create_vehicle(
    State(state): State<AppState>,
    Json(request): Json<CreateVehicleRequest>,
) -> Result<Json<ApiResponse<Vehicle>>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn list_vehicles(
    State(state): State<AppState>,
) -> Result<Json<ListResponse<Vehicle>>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn vehicle_options(
    State(state): State<AppState>,
) -> Result<Json<Vec<SelectOption>>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.options().await?;
    Ok(Json(response))
}
