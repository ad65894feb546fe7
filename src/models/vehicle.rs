//! Vehicle model
//!
//! Maps exactly to the `vehicles` table. The status column is stored as
//! text and parsed into `VehicleStatus` wherever the value matters.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Vehicle lifecycle status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum VehicleStatus {
    Active,
    Maintenance,
    Offline,
}

impl VehicleStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleStatus::Active => "active",
            VehicleStatus::Maintenance => "maintenance",
            VehicleStatus::Offline => "offline",
        }
    }

    /// Parse the stored text representation. Returns `None` for anything
    /// outside the enumerated set so callers can reject it explicitly.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "active" => Some(VehicleStatus::Active),
            "maintenance" => Some(VehicleStatus::Maintenance),
            "offline" => Some(VehicleStatus::Offline),
            _ => None,
        }
    }
}

/// Vehicle row. A vehicle with no recorded location carries NULL
/// coordinates, never sentinel zeros.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Vehicle {
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
