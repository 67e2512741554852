use axum::{extract::State, routing::get, Json, Router};
use crate::controllers::address_controller::AddressController;
use crate::dto::address_dto::CreateAddressRequest;
use crate::dto::api_response::{ApiResponse, ListResponse};
use crate::models::address::Address;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_address_router() -> Router<AppState> {
    Router::new().route("/api/addresses", get(list_addresses).post(create_address))
}

async fn create_address(
    State(state): State<AppState>,
    Json(request): Json<CreateAddressRequest>,
) -> Result<Json<ApiResponse<Address>>, AppError> {
    let controller = AddressController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn list_addresses(
    State(state): State<AppState>,
) -> Result<Json<ListResponse<Address>>, AppError> {
    let controller = AddressController::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}
