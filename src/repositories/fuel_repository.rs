use chrono::Utc;
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::fuel::FuelReading;
use crate::utils::errors::AppError;

pub struct FuelRepository {
    pool: PgPool,
}

impl FuelRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, vehicle_id: Uuid, level: Decimal) -> Result<FuelReading, AppError> {
        let reading = sqlx::query_as::<_, FuelReading>(
            r#"
            INSERT INTO fuel_readings (id, vehicle_id, level, recorded_at)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(vehicle_id)
        .bind(level)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(reading)
    }

    /// Latest reading per vehicle. Vehicles with no reading at all are
    /// simply absent from the result.
    pub async fn find_latest_per_vehicle(&self) -> Result<Vec<FuelReading>, AppError> {
        let readings = sqlx::query_as::<_, FuelReading>(
            r#"
            SELECT DISTINCT ON (vehicle_id) *
            FROM fuel_readings
            ORDER BY vehicle_id, recorded_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(readings)
    }
}
