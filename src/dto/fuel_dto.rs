use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// Request to report a fuel level
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFuelReadingRequest {
    pub vehicle_id: Uuid,
    /// Percentage, 0-100. Range-checked in the controller.
    pub level: Decimal,
}

// Latest level for one vehicle
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FuelLevelResponse {
    pub vehicle_id: Uuid,
    pub level: Decimal,
    pub recorded_at: chrono::DateTime<chrono::Utc>,
}

impl From<crate::models::fuel::FuelReading> for FuelLevelResponse {
    fn from(reading: crate::models::fuel::FuelReading) -> Self {
        Self {
            vehicle_id: reading.vehicle_id,
            level: reading.level,
            recorded_at: reading.recorded_at,
        }
    }
}
