use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::vehicle::Vehicle;
use crate::utils::validation::validate_license_plate;

// Request to create a vehicle
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateVehicleRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,

    #[validate(length(min = 2, max = 30))]
    pub vehicle_type: String,

    #[validate(custom = "validate_license_plate")]
    pub license_plate: String,

    #[validate(length(min = 2, max = 100))]
    pub make: String,

    #[validate(length(min = 1, max = 100))]
    pub model: String,

    #[validate(range(min = 1950, max = 2030))]
    pub year: i32,

    /// Defaults to "active" when omitted.
    pub status: Option<String>,

    pub current_driver_id: Option<Uuid>,
}

// Request to update a vehicle
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateVehicleRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,

    pub status: Option<String>,

    pub last_latitude: Option<Decimal>,
    pub last_longitude: Option<Decimal>,

    pub current_driver_id: Option<Uuid>,

    /// Set to unassign the current driver; `current_driver_id` wins when
    /// both are present.
    #[serde(default)]
    pub clear_driver: bool,
}

// Vehicle response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleResponse {
    pub id: Uuid,
    pub name: String,
    pub vehicle_type: String,
    pub license_plate: String,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub status: String,
    pub last_latitude: Option<Decimal>,
    pub last_longitude: Option<Decimal>,
    pub last_location_update: Option<DateTime<Utc>>,
    pub current_driver_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl From<Vehicle> for VehicleResponse {
    fn from(vehicle: Vehicle) -> Self {
        Self {
            id: vehicle.id,
            name: vehicle.name,
            vehicle_type: vehicle.vehicle_type,
            license_plate: vehicle.license_plate,
            make: vehicle.make,
            model: vehicle.model,
            year: vehicle.year,
            status: vehicle.status,
            last_latitude: vehicle.last_latitude,
            last_longitude: vehicle.last_longitude,
            last_location_update: vehicle.last_location_update,
            current_driver_id: vehicle.current_driver_id,
            created_at: vehicle.created_at,
        }
    }
}
