use chrono::Utc;
use sqlx::PgPool;

use crate::config::environment::EnvironmentConfig;
use crate::models::fleet_stats::FleetStats;
use crate::services::fleet_aggregator::compute_fleet_stats;
use crate::services::snapshot_provider::{
    DemoSnapshotProvider, PgSnapshotProvider, SnapshotProvider,
};
use crate::utils::errors::AppError;

/// Orchestrates one statistics computation: obtain a snapshot, run the
/// pure aggregator over it. The aggregator never caches and never fails
/// on an empty fleet.
pub struct FleetStatsController {
    provider: Box<dyn SnapshotProvider>,
    config: EnvironmentConfig,
}

impl FleetStatsController {
    pub fn new(pool: PgPool, config: EnvironmentConfig) -> Self {
        let provider: Box<dyn SnapshotProvider> = if config.demo_fuel_data {
            Box::new(DemoSnapshotProvider::new(pool))
        } else {
            Box::new(PgSnapshotProvider::new(pool))
        };
        Self { provider, config }
    }

    pub async fn get_stats(&self) -> Result<FleetStats, AppError> {
        let snapshot = self.provider.fleet_snapshot().await?;

        let stats = compute_fleet_stats(
            &snapshot.vehicles,
            &snapshot.trips,
            &snapshot.fuel_levels,
            Utc::now(),
            self.config.fleet_timezone(),
        )?;

        Ok(stats)
    }
}
