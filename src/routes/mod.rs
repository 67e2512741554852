pub mod address_routes;
pub mod auth_routes;
pub mod fee_routes;
pub mod home_routes;
pub mod inspection_routes;
pub mod owner_routes;
pub mod vehicle_routes;
