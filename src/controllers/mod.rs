pub mod auth_controller;
pub mod document_controller;
pub mod driver_controller;
pub mod fleet_stats_controller;
pub mod fuel_controller;
pub mod maintenance_controller;
pub mod trip_controller;
pub mod vehicle_controller;
