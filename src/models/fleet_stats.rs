//! Fleet statistics
//!
//! Aggregate counts and averages over the current vehicle/trip snapshot.
//! Always recomputed at call time; never persisted or cached as a source
//! of truth.

use rust_decimal::Decimal;
use serde::Serialize;

/// The aggregate endpoint's output shape.
///
/// `avg_fuel_level` and `low_fuel_alerts` are an explicit zero state when
/// no vehicle reports a fuel level; callers that need to distinguish
/// "no data" from "data shows zero" must inspect their fuel source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FleetStats {
    pub total_vehicles: usize,
    pub active_vehicles: usize,
    pub maintenance_vehicles: usize,
    pub offline_vehicles: usize,
    pub active_trips: usize,
    pub planned_trips: usize,
    pub completed_trips_today: usize,
    pub avg_fuel_level: Decimal,
    pub low_fuel_alerts: usize,
    pub total_distance: Decimal,
}

impl FleetStats {
    /// The all-zero stats returned for an empty snapshot.
    pub fn zero() -> Self {
        Self {
            total_vehicles: 0,
            active_vehicles: 0,
            maintenance_vehicles: 0,
            offline_vehicles: 0,
            active_trips: 0,
            planned_trips: 0,
            completed_trips_today: 0,
            avg_fuel_level: Decimal::ZERO,
            low_fuel_alerts: 0,
            total_distance: Decimal::ZERO,
        }
    }
}
