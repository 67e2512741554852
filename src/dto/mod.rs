//! DTOs de la API
//!
//! Formularios de entrada (con sus comprobaciones puras) y respuestas.

pub mod address_dto;
pub mod api_response;
pub mod auth_dto;
pub mod fee_dto;
pub mod home_dto;
pub mod inspection_dto;
pub mod owner_dto;
pub mod vehicle_dto;
