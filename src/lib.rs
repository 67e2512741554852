//! Vehicle registration service
//!
//! API JSON para registrar propietarios, direcciones, vehículos, tasas e
//! inspecciones, detrás de un login.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod router;
pub mod routes;
pub mod state;
pub mod utils;

pub use router::create_router;
pub use state::AppState;
pub use utils::errors::{AppError, AppResult};
