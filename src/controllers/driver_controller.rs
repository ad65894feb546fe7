use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::common_dto::ApiResponse;
use crate::dto::driver_dto::{CreateDriverRequest, DriverResponse, UpdateDriverRequest};
use crate::repositories::driver_repository::DriverRepository;
use crate::utils::errors::{conflict_error, AppError};

pub struct DriverController {
    repository: DriverRepository,
}

impl DriverController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: DriverRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateDriverRequest,
    ) -> Result<ApiResponse<DriverResponse>, AppError> {
        request.validate()?;

        let license_number = request.license_number.to_uppercase();
        if self
            .repository
            .license_number_exists(&license_number)
            .await?
        {
            return Err(conflict_error("Driver", "license number", &license_number));
        }

        if self.repository.email_exists(&request.email).await? {
            return Err(conflict_error("Driver", "email", &request.email));
        }

        let driver = self
            .repository
            .create(
                request.first_name,
                request.last_name,
                request.email,
                request.phone,
                license_number,
                request.license_expiry,
                request.emergency_contact,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            DriverResponse::from_driver(driver, Utc::now()),
            "Driver created successfully".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<DriverResponse, AppError> {
        let driver = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Driver not found".to_string()))?;

        Ok(DriverResponse::from_driver(driver, Utc::now()))
    }

    pub async fn list(&self) -> Result<Vec<DriverResponse>, AppError> {
        let now = Utc::now();
        let drivers = self.repository.find_all().await?;
        Ok(drivers
            .into_iter()
            .map(|d| DriverResponse::from_driver(d, now))
            .collect())
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateDriverRequest,
    ) -> Result<ApiResponse<DriverResponse>, AppError> {
        let driver = self
            .repository
            .update(
                id,
                request.phone,
                request.license_expiry,
                request.is_active,
                request.emergency_contact,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            DriverResponse::from_driver(driver, Utc::now()),
            "Driver updated successfully".to_string(),
        ))
    }
}
