use axum::{extract::State, routing::get, Json, Router};
use crate::controllers::owner_controller::OwnerController;
use crate::dto::api_response::{ApiResponse, ListResponse, SelectOption};
use crate::dto::owner_dto::CreateOwnerRequest;
use crate::models::owner::Owner;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_owner_router() -> Router<AppState> {
    Router::new()
        .route("/api/owners", get(list_owners).post(create_owner))
        .route("/api/owners/options", get(owner_options))
}

async fn create_owner(
    State(state): State<AppState>,
    Json(request): Json<CreateOwnerRequest>,
) -> Result<Json<ApiResponse<Owner>>, AppError> {
    let controller = OwnerController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn list_owners(
    State(state): State<AppState>,
) -> Result<Json<ListResponse<Owner>>, AppError> {
    let controller = OwnerController::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn owner_options(
    State(state): State<AppState>,
) -> Result<Json<Vec<SelectOption>>, AppError> {
    let controller = OwnerController::new(state.pool.clone());
    let response = controller.options().await?;
    Ok(Json(response))
}
