//! Fuel reading model
//!
//! Fuel levels come from outside the fleet core (sensors in production,
//! the demo provider in demos). The aggregator only ever sees the latest
//! level per vehicle.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// A single fuel level report for a vehicle, as a percentage 0-100.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct FuelReading {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub level: Decimal,
    pub recorded_at: DateTime<Utc>,
}
