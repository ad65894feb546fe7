//! Database repositories, one per entity

pub mod document_repository;
pub mod driver_repository;
pub mod fuel_repository;
pub mod maintenance_repository;
pub mod trip_repository;
pub mod user_repository;
pub mod vehicle_repository;
