//! Fleet-wide statistics aggregation
//!
//! Combines a vehicle/trip snapshot into the dashboard's aggregate
//! counts. Pure and deterministic: identical input (including the same
//! `now` and timezone) produces identical output, and the function never
//! mutates the snapshot it is given.

use std::collections::HashMap;

use chrono::{DateTime, FixedOffset, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::models::fleet_stats::FleetStats;
use crate::models::trip::{Trip, TripStatus};
use crate::models::vehicle::{Vehicle, VehicleStatus};
use crate::services::status_classifier::LOW_FUEL_THRESHOLD;
use crate::services::StatsError;

/// Compute the fleet statistics for one snapshot.
///
/// `fuel_levels` maps vehicle id to the latest reported fuel percentage;
/// vehicles absent from the map simply do not report. When no vehicle
/// reports, the average and alert count are an explicit zero state.
///
/// `tz` is the caller's reference timezone for the "completed today"
/// bucket; a completed trip counts when its completion time (falling back
/// to its creation time) lands on today's calendar date in that zone.
///
/// Empty input is not an error and yields all-zero stats. A status value
/// outside the enumerated set is.
pub fn compute_fleet_stats(
    vehicles: &[Vehicle],
    trips: &[Trip],
    fuel_levels: &HashMap<Uuid, Decimal>,
    now: DateTime<Utc>,
    tz: FixedOffset,
) -> Result<FleetStats, StatsError> {
    let mut stats = FleetStats::zero();
    stats.total_vehicles = vehicles.len();

    for vehicle in vehicles {
        let status = VehicleStatus::parse(&vehicle.status)
            .ok_or_else(|| StatsError::InvalidVehicleStatus(vehicle.status.clone()))?;
        match status {
            VehicleStatus::Active => stats.active_vehicles += 1,
            VehicleStatus::Maintenance => stats.maintenance_vehicles += 1,
            VehicleStatus::Offline => stats.offline_vehicles += 1,
        }
    }

    let today = now.with_timezone(&tz).date_naive();

    for trip in trips {
        let status = TripStatus::parse(&trip.status)
            .ok_or_else(|| StatsError::InvalidTripStatus(trip.status.clone()))?;

        match status {
            TripStatus::InProgress => stats.active_trips += 1,
            TripStatus::Planned => stats.planned_trips += 1,
            TripStatus::Completed => {
                let completed_at = trip.end_time.unwrap_or(trip.created_at);
                if completed_at.with_timezone(&tz).date_naive() == today {
                    stats.completed_trips_today += 1;
                }
            }
            TripStatus::Delayed | TripStatus::Cancelled => {}
        }

        stats.total_distance += trip.distance.unwrap_or(Decimal::ZERO);
    }

    let mut reported = 0u32;
    let mut fuel_sum = Decimal::ZERO;
    let low_fuel = Decimal::from(LOW_FUEL_THRESHOLD);
    for vehicle in vehicles {
        if let Some(level) = fuel_levels.get(&vehicle.id) {
            reported += 1;
            fuel_sum += *level;
            if *level < low_fuel {
                stats.low_fuel_alerts += 1;
            }
        }
    }
    if reported > 0 {
        stats.avg_fuel_level = (fuel_sum / Decimal::from(reported)).round_dp(2);
    }

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    fn utc() -> FixedOffset {
        FixedOffset::east_opt(0).unwrap()
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 23, 0, 0).unwrap()
    }

    fn vehicle(status: &str) -> Vehicle {
        Vehicle {
            id: Uuid::new_v4(),
            name: "Fleet Truck".to_string(),
            vehicle_type: "truck".to_string(),
            license_plate: "TRK-001-ZW".to_string(),
            make: "Mercedes".to_string(),
            model: "Actros".to_string(),
            year: 2022,
            status: status.to_string(),
            last_latitude: None,
            last_longitude: None,
            last_location_update: None,
            current_driver_id: None,
            created_at: now(),
        }
    }

    fn trip(status: &str, distance: Option<Decimal>) -> Trip {
        Trip {
            id: Uuid::new_v4(),
            vehicle_id: Uuid::new_v4(),
            driver_id: Uuid::new_v4(),
            start_latitude: dec!(-17.8292),
            start_longitude: dec!(31.0522),
            end_latitude: None,
            end_longitude: None,
            start_time: now(),
            end_time: None,
            distance,
            status: status.to_string(),
            purpose: None,
            notes: None,
            created_at: now(),
        }
    }

    #[test]
    fn test_empty_snapshot_is_all_zero() {
        let stats = compute_fleet_stats(&[], &[], &HashMap::new(), now(), utc()).unwrap();
        assert_eq!(stats, FleetStats::zero());
    }

    #[test]
    fn test_dashboard_example() {
        let vehicles = vec![vehicle("active"), vehicle("active"), vehicle("maintenance")];
        let trips = vec![
            trip("in_progress", Some(dec!(100.0))),
            trip("planned", None),
        ];

        let stats =
            compute_fleet_stats(&vehicles, &trips, &HashMap::new(), now(), utc()).unwrap();

        assert_eq!(stats.total_vehicles, 3);
        assert_eq!(stats.active_vehicles, 2);
        assert_eq!(stats.maintenance_vehicles, 1);
        assert_eq!(stats.offline_vehicles, 0);
        assert_eq!(stats.active_trips, 1);
        assert_eq!(stats.planned_trips, 1);
        assert_eq!(stats.total_distance, dec!(100.0));
        assert_eq!(stats.avg_fuel_level, Decimal::ZERO);
        assert_eq!(stats.low_fuel_alerts, 0);
    }

    #[test]
    fn test_vehicle_partition_is_complete() {
        let vehicles = vec![
            vehicle("active"),
            vehicle("offline"),
            vehicle("maintenance"),
            vehicle("active"),
            vehicle("offline"),
        ];
        let stats =
            compute_fleet_stats(&vehicles, &[], &HashMap::new(), now(), utc()).unwrap();
        assert_eq!(
            stats.active_vehicles + stats.maintenance_vehicles + stats.offline_vehicles,
            stats.total_vehicles
        );
    }

    #[test]
    fn test_malformed_status_is_rejected_not_miscounted() {
        let vehicles = vec![vehicle("active"), vehicle("unknown_state")];
        let err = compute_fleet_stats(&vehicles, &[], &HashMap::new(), now(), utc())
            .unwrap_err();
        assert_eq!(
            err,
            StatsError::InvalidVehicleStatus("unknown_state".to_string())
        );

        let trips = vec![trip("driving", None)];
        let err =
            compute_fleet_stats(&[], &trips, &HashMap::new(), now(), utc()).unwrap_err();
        assert_eq!(err, StatsError::InvalidTripStatus("driving".to_string()));
    }

    #[test]
    fn test_idempotent_over_identical_input() {
        let vehicles = vec![vehicle("active"), vehicle("maintenance")];
        let trips = vec![trip("completed", Some(dec!(42.5))), trip("delayed", None)];
        let mut fuel = HashMap::new();
        fuel.insert(vehicles[0].id, dec!(55));

        let a = compute_fleet_stats(&vehicles, &trips, &fuel, now(), utc()).unwrap();
        let b = compute_fleet_stats(&vehicles, &trips, &fuel, now(), utc()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_fuel_average_and_alerts() {
        let vehicles = vec![vehicle("active"), vehicle("active"), vehicle("offline")];
        let mut fuel = HashMap::new();
        fuel.insert(vehicles[0].id, dec!(10));
        fuel.insert(vehicles[1].id, dec!(40));
        // vehicles[2] does not report

        let stats = compute_fleet_stats(&vehicles, &[], &fuel, now(), utc()).unwrap();
        assert_eq!(stats.avg_fuel_level, dec!(25));
        assert_eq!(stats.low_fuel_alerts, 1);
    }

    #[test]
    fn test_fuel_level_at_threshold_is_not_an_alert() {
        let vehicles = vec![vehicle("active")];
        let mut fuel = HashMap::new();
        fuel.insert(vehicles[0].id, dec!(25));
        let stats = compute_fleet_stats(&vehicles, &[], &fuel, now(), utc()).unwrap();
        assert_eq!(stats.low_fuel_alerts, 0);
    }

    #[test]
    fn test_completed_today_respects_reference_timezone() {
        let mut completed = trip("completed", None);
        completed.end_time = Some(Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap());
        let trips = vec![completed];

        // In UTC both the completion and `now` fall on June 15th.
        let stats = compute_fleet_stats(&[], &trips, &HashMap::new(), now(), utc()).unwrap();
        assert_eq!(stats.completed_trips_today, 1);

        // At UTC+3, `now` (23:00Z) is already June 16th while the trip
        // completed on the 15th local time.
        let plus_three = FixedOffset::east_opt(3 * 3600).unwrap();
        let stats =
            compute_fleet_stats(&[], &trips, &HashMap::new(), now(), plus_three).unwrap();
        assert_eq!(stats.completed_trips_today, 0);
    }

    #[test]
    fn test_distance_sums_across_all_statuses() {
        let trips = vec![
            trip("completed", Some(dec!(10.5))),
            trip("cancelled", Some(dec!(4.5))),
            trip("in_progress", None),
        ];
        let stats = compute_fleet_stats(&[], &trips, &HashMap::new(), now(), utc()).unwrap();
        assert_eq!(stats.total_distance, dec!(15.0));
    }
}
