use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::trip::Trip;
use crate::utils::errors::AppError;

pub struct TripRepository {
    pool: PgPool,
}

impl TripRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        vehicle_id: Uuid,
        driver_id: Uuid,
        start_latitude: Decimal,
        start_longitude: Decimal,
        start_time: DateTime<Utc>,
        status: String,
        purpose: Option<String>,
        notes: Option<String>,
    ) -> Result<Trip, AppError> {
        let trip = sqlx::query_as::<_, Trip>(
            r#"
            INSERT INTO trips (id, vehicle_id, driver_id, start_latitude, start_longitude, start_time, status, purpose, notes, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(vehicle_id)
        .bind(driver_id)
        .bind(start_latitude)
        .bind(start_longitude)
        .bind(start_time)
        .bind(status)
        .bind(purpose)
        .bind(notes)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(trip)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Trip>, AppError> {
        let trip = sqlx::query_as::<_, Trip>("SELECT * FROM trips WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(trip)
    }

    /// List trips, optionally filtered by vehicle and/or driver.
    pub async fn find_filtered(
        &self,
        vehicle_id: Option<Uuid>,
        driver_id: Option<Uuid>,
    ) -> Result<Vec<Trip>, AppError> {
        let trips = sqlx::query_as::<_, Trip>(
            r#"
            SELECT * FROM trips
            WHERE ($1::uuid IS NULL OR vehicle_id = $1)
              AND ($2::uuid IS NULL OR driver_id = $2)
            ORDER BY created_at DESC
            "#,
        )
        .bind(vehicle_id)
        .bind(driver_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(trips)
    }

    pub async fn find_all(&self) -> Result<Vec<Trip>, AppError> {
        self.find_filtered(None, None).await
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn update(
        &self,
        id: Uuid,
        end_latitude: Option<Decimal>,
        end_longitude: Option<Decimal>,
        end_time: Option<DateTime<Utc>>,
        distance: Option<Decimal>,
        status: Option<String>,
        notes: Option<String>,
    ) -> Result<Trip, AppError> {
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Trip not found".to_string()))?;

        let trip = sqlx::query_as::<_, Trip>(
            r#"
            UPDATE trips
            SET end_latitude = $2, end_longitude = $3, end_time = $4,
                distance = $5, status = $6, notes = $7
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(end_latitude.or(current.end_latitude))
        .bind(end_longitude.or(current.end_longitude))
        .bind(end_time.or(current.end_time))
        .bind(distance.or(current.distance))
        .bind(status.unwrap_or(current.status))
        .bind(notes.or(current.notes))
        .fetch_one(&self.pool)
        .await?;

        Ok(trip)
    }
}
