use axum::{extract::State, routing::get, Json, Router};
use crate::controllers::fee_controller::FeeController;
use crate::dto::api_response::{ApiResponse, ListResponse};
use crate::dto::fee_dto::CreateFeeRequest;
use crate::models::fee::Fee;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_fee_router() -> Router<AppState> {
    Router::new().route("/api/fees", get(list_fees).post(create_fee))
}

async fn create_fee(
    State(state): State<AppState>,
    Json(request): Json<CreateFeeRequest>,
) -> Result<Json<ApiResponse<Fee>>, AppError> {
    let controller = FeeController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn list_fees(State(state): State<AppState>) -> Result<Json<ListResponse<Fee>>, AppError> {
    let controller = FeeController::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}
