//! Router principal
//!
//! Rutas públicas (health, login, signup) y rutas protegidas por la sesión.

use axum::{middleware, response::Json, routing::get, Router};
use serde_json::{json, Value};
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

use crate::middleware::{cors_layer, require_session};
use crate::routes::{
    address_routes, auth_routes, fee_routes, home_routes, inspection_routes, owner_routes,
    vehicle_routes,
};
use crate::state::AppState;

pub fn create_router(state: AppState) -> Router {
    let protected = Router::new()
        .merge(auth_routes::session_routes())
        .merge(home_routes::create_home_router())
        .merge(owner_routes::create_owner_router())
        .merge(vehicle_routes::create_vehicle_router())
        .merge(address_routes::create_address_router())
        .merge(fee_routes::create_fee_router())
        .merge(inspection_routes::create_inspection_router())
        .route_layer(middleware::from_fn_with_state(state.clone(), require_session));

    let public = Router::new()
        .route("/health", get(health))
        .merge(auth_routes::public_routes());

    Router::new()
        .merge(public)
        .merge(protected)
        .layer(CompressionLayer::new())
        .layer(cors_layer(&state.config.cors_origins))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Endpoint de salud
async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "vehicle-registration",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
