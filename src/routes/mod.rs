pub mod auth_routes;
pub mod document_routes;
pub mod driver_routes;
pub mod fleet_routes;
pub mod fuel_routes;
pub mod maintenance_routes;
pub mod trip_routes;
pub mod vehicle_routes;
