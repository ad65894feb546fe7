//! Entity snapshot providers
//!
//! The aggregation core consumes immutable, point-in-time snapshots and
//! knows nothing about where they come from. This module is the seam:
//! an async trait plus a Postgres-backed implementation and a demo
//! implementation that fabricates fuel levels.

use std::collections::HashMap;

use async_trait::async_trait;
use rand::Rng;
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::trip::Trip;
use crate::models::vehicle::Vehicle;
use crate::repositories::fuel_repository::FuelRepository;
use crate::repositories::trip_repository::TripRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::AppError;

/// One computation's worth of input: vehicles, trips and the latest fuel
/// level per vehicle. The core never mutates it.
#[derive(Debug)]
pub struct FleetSnapshot {
    pub vehicles: Vec<Vehicle>,
    pub trips: Vec<Trip>,
    pub fuel_levels: HashMap<Uuid, Decimal>,
}

#[async_trait]
pub trait SnapshotProvider: Send + Sync {
    async fn fleet_snapshot(&self) -> Result<FleetSnapshot, AppError>;
}

/// Production provider: reads the snapshot from Postgres. The three
/// queries run concurrently; each call produces a fresh snapshot.
pub struct PgSnapshotProvider {
    vehicles: VehicleRepository,
    trips: TripRepository,
    fuel: FuelRepository,
}

impl PgSnapshotProvider {
    pub fn new(pool: PgPool) -> Self {
        Self {
            vehicles: VehicleRepository::new(pool.clone()),
            trips: TripRepository::new(pool.clone()),
            fuel: FuelRepository::new(pool),
        }
    }
}

#[async_trait]
impl SnapshotProvider for PgSnapshotProvider {
    async fn fleet_snapshot(&self) -> Result<FleetSnapshot, AppError> {
        let (vehicles, trips, readings) = futures::try_join!(
            self.vehicles.find_all(),
            self.trips.find_all(),
            self.fuel.find_latest_per_vehicle(),
        )?;

        let fuel_levels = readings
            .into_iter()
            .map(|r| (r.vehicle_id, r.level))
            .collect();

        Ok(FleetSnapshot {
            vehicles,
            trips,
            fuel_levels,
        })
    }
}

/// Demo provider: real vehicles and trips from the database, fake fuel
/// levels. This is the only place in the system where fuel data may be
/// random; the aggregator itself stays deterministic over whatever
/// snapshot it receives.
pub struct DemoSnapshotProvider {
    vehicles: VehicleRepository,
    trips: TripRepository,
}

impl DemoSnapshotProvider {
    pub fn new(pool: PgPool) -> Self {
        Self {
            vehicles: VehicleRepository::new(pool.clone()),
            trips: TripRepository::new(pool),
        }
    }
}

#[async_trait]
impl SnapshotProvider for DemoSnapshotProvider {
    async fn fleet_snapshot(&self) -> Result<FleetSnapshot, AppError> {
        let (vehicles, trips) =
            futures::try_join!(self.vehicles.find_all(), self.trips.find_all())?;

        let mut rng = rand::thread_rng();
        let fuel_levels = vehicles
            .iter()
            .map(|v| (v.id, Decimal::from(rng.gen_range(5u32..=100))))
            .collect();

        Ok(FleetSnapshot {
            vehicles,
            trips,
            fuel_levels,
        })
    }
}
