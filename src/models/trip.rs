//! Trip model
//!
//! Trips reference their vehicle and driver by id. Referential integrity
//! is the storage layer's job (`ON DELETE RESTRICT`); the application
//! never cascades deletes.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Trip lifecycle status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TripStatus {
    Planned,
    InProgress,
    Completed,
    Delayed,
    Cancelled,
}

impl TripStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TripStatus::Planned => "planned",
            TripStatus::InProgress => "in_progress",
            TripStatus::Completed => "completed",
            TripStatus::Delayed => "delayed",
            TripStatus::Cancelled => "cancelled",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "planned" => Some(TripStatus::Planned),
            "in_progress" => Some(TripStatus::InProgress),
            "completed" => Some(TripStatus::Completed),
            "delayed" => Some(TripStatus::Delayed),
            "cancelled" => Some(TripStatus::Cancelled),
            _ => None,
        }
    }
}

/// Trip row. Invariants: `end_time`, when present, is >= `start_time`;
/// `distance`, when present, is >= 0. Both are checked on write.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Trip {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub driver_id: Uuid,
    pub start_latitude: Decimal,
    pub start_longitude: Decimal,
    pub end_latitude: Option<Decimal>,
    pub end_longitude: Option<Decimal>,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub distance: Option<Decimal>,
    pub status: String,
    pub purpose: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}
