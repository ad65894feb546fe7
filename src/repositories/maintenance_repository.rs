use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::maintenance::MaintenanceRecord;
use crate::utils::errors::AppError;

pub struct MaintenanceRepository {
    pool: PgPool,
}

impl MaintenanceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        vehicle_id: Uuid,
        maintenance_type: String,
        description: String,
        cost: Option<Decimal>,
        performed_at: DateTime<Utc>,
        next_due_date: Option<DateTime<Utc>>,
        performed_by: Option<String>,
    ) -> Result<MaintenanceRecord, AppError> {
        let record = sqlx::query_as::<_, MaintenanceRecord>(
            r#"
            INSERT INTO maintenance_records (id, vehicle_id, maintenance_type, description, cost, performed_at, next_due_date, performed_by, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(vehicle_id)
        .bind(maintenance_type)
        .bind(description)
        .bind(cost)
        .bind(performed_at)
        .bind(next_due_date)
        .bind(performed_by)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(record)
    }

    /// List records, optionally for a single vehicle.
    pub async fn find_filtered(
        &self,
        vehicle_id: Option<Uuid>,
    ) -> Result<Vec<MaintenanceRecord>, AppError> {
        let records = sqlx::query_as::<_, MaintenanceRecord>(
            r#"
            SELECT * FROM maintenance_records
            WHERE ($1::uuid IS NULL OR vehicle_id = $1)
            ORDER BY created_at DESC
            "#,
        )
        .bind(vehicle_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }
}
