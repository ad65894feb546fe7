use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::driver::Driver;
use crate::utils::errors::AppError;

pub struct DriverRepository {
    pool: PgPool,
}

impl DriverRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        first_name: String,
        last_name: String,
        email: String,
        phone: Option<String>,
        license_number: String,
        license_expiry: Option<DateTime<Utc>>,
        emergency_contact: Option<String>,
    ) -> Result<Driver, AppError> {
        let driver = sqlx::query_as::<_, Driver>(
            r#"
            INSERT INTO drivers (id, first_name, last_name, email, phone, license_number, license_expiry, is_active, emergency_contact, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, TRUE, $8, $9)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(first_name)
        .bind(last_name)
        .bind(email)
        .bind(phone)
        .bind(license_number)
        .bind(license_expiry)
        .bind(emergency_contact)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(driver)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Driver>, AppError> {
        let driver = sqlx::query_as::<_, Driver>("SELECT * FROM drivers WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(driver)
    }

    pub async fn find_all(&self) -> Result<Vec<Driver>, AppError> {
        let drivers =
            sqlx::query_as::<_, Driver>("SELECT * FROM drivers ORDER BY created_at DESC")
                .fetch_all(&self.pool)
                .await?;

        Ok(drivers)
    }

    pub async fn license_number_exists(&self, license_number: &str) -> Result<bool, AppError> {
        let result: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM drivers WHERE license_number = $1)")
                .bind(license_number)
                .fetch_one(&self.pool)
                .await?;

        Ok(result.0)
    }

    pub async fn email_exists(&self, email: &str) -> Result<bool, AppError> {
        let result: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM drivers WHERE email = $1)")
                .bind(email)
                .fetch_one(&self.pool)
                .await?;

        Ok(result.0)
    }

    pub async fn update(
        &self,
        id: Uuid,
        phone: Option<String>,
        license_expiry: Option<DateTime<Utc>>,
        is_active: Option<bool>,
        emergency_contact: Option<String>,
    ) -> Result<Driver, AppError> {
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Driver not found".to_string()))?;

        let driver = sqlx::query_as::<_, Driver>(
            r#"
            UPDATE drivers
            SET phone = $2, license_expiry = $3, is_active = $4, emergency_contact = $5
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(phone.or(current.phone))
        .bind(license_expiry.or(current.license_expiry))
        .bind(is_active.unwrap_or(current.is_active))
        .bind(emergency_contact.or(current.emergency_contact))
        .fetch_one(&self.pool)
        .await?;

        Ok(driver)
    }
}
