//! Controladores
//!
//! Lógica de cada vista: comprobaciones del formulario, comprobaciones en
//! base de datos y escritura. Cada alta corre en su propia transacción,
//! que se revierte al soltarse si no llega al commit.

pub mod address_controller;
pub mod auth_controller;
pub mod fee_controller;
pub mod home_controller;
pub mod inspection_controller;
pub mod owner_controller;
pub mod vehicle_controller;
