//! Request/response shapes for the API
//!
//! All JSON fields are camelCase to match the dashboard client.

pub mod auth_dto;
pub mod common_dto;
pub mod document_dto;
pub mod driver_dto;
pub mod fuel_dto;
pub mod maintenance_dto;
pub mod trip_dto;
pub mod vehicle_dto;
