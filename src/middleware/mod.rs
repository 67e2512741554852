//! Middleware del sistema
//!
//! Este módulo contiene el middleware de sesión y de CORS.

pub mod auth;
pub mod cors;

pub use auth::{require_session, AuthenticatedUser};
pub use cors::cors_layer;
