use axum::{extract::State, routing::get, Json, Router};
use crate::controllers::home_controller::HomeController;
use crate::dto::home_dto::HomeResponse;
use crate::models::menu::MenuEntry;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_home_router() -> Router<AppState> {
    Router::new()
        .route("/api/home", get(home))
        .route("/api/menu", get(menu))
}

async fn home(State(state): State<AppState>) -> Result<Json<HomeResponse>, AppError> {
    let controller = HomeController::new(state.pool.clone());
    let response = controller.home().await?;
    Ok(Json(response))
}

async fn menu() -> Json<Vec<MenuEntry>> {
    Json(HomeController::menu())
}
