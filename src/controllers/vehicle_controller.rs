use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::common_dto::ApiResponse;
use crate::dto::vehicle_dto::{CreateVehicleRequest, UpdateVehicleRequest, VehicleResponse};
use crate::models::vehicle::VehicleStatus;
use crate::repositories::driver_repository::DriverRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::AppError;

pub struct VehicleController {
    repository: VehicleRepository,
    drivers: DriverRepository,
}

impl VehicleController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: VehicleRepository::new(pool.clone()),
            drivers: DriverRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateVehicleRequest,
    ) -> Result<ApiResponse<VehicleResponse>, AppError> {
        request.validate()?;

        let status = match &request.status {
            Some(value) => VehicleStatus::parse(value)
                .ok_or_else(|| AppError::BadRequest(format!("Unknown vehicle status '{}'", value)))?,
            None => VehicleStatus::Active,
        };

        let license_plate = request.license_plate.to_uppercase();
        if self.repository.license_plate_exists(&license_plate).await? {
            return Err(AppError::Conflict(
                "License plate is already registered".to_string(),
            ));
        }

        if let Some(driver_id) = request.current_driver_id {
            self.require_driver(driver_id).await?;
        }

        let vehicle = self
            .repository
            .create(
                request.name,
                request.vehicle_type,
                license_plate,
                request.make,
                request.model,
                request.year,
                status.as_str().to_string(),
                request.current_driver_id,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            vehicle.into(),
            "Vehicle created successfully".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<VehicleResponse, AppError> {
        let vehicle = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehicle not found".to_string()))?;

        Ok(vehicle.into())
    }

    pub async fn list(&self) -> Result<Vec<VehicleResponse>, AppError> {
        let vehicles = self.repository.find_all().await?;
        Ok(vehicles.into_iter().map(VehicleResponse::from).collect())
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateVehicleRequest,
    ) -> Result<ApiResponse<VehicleResponse>, AppError> {
        request.validate()?;

        let status = match &request.status {
            Some(value) => Some(
                VehicleStatus::parse(value)
                    .ok_or_else(|| {
                        AppError::BadRequest(format!("Unknown vehicle status '{}'", value))
                    })?
                    .as_str()
                    .to_string(),
            ),
            None => None,
        };

        // Coordinates travel as a pair; a lone latitude or longitude is a
        // client bug, not a partial update.
        let location_update = match (request.last_latitude, request.last_longitude) {
            (Some(lat), Some(lon)) => Some((lat, lon)),
            (None, None) => None,
            _ => {
                return Err(AppError::BadRequest(
                    "Latitude and longitude must be provided together".to_string(),
                ))
            }
        };

        let driver_change = if request.clear_driver && request.current_driver_id.is_none() {
            Some(None)
        } else if let Some(driver_id) = request.current_driver_id {
            self.require_driver(driver_id).await?;
            Some(Some(driver_id))
        } else {
            None
        };

        let (lat, lon, location_time) = match location_update {
            Some((lat, lon)) => (Some(lat), Some(lon), Some(Utc::now())),
            None => (None, None, None),
        };

        let vehicle = self
            .repository
            .update(id, request.name, status, lat, lon, location_time, driver_change)
            .await?;

        Ok(ApiResponse::success_with_message(
            vehicle.into(),
            "Vehicle updated successfully".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.repository.delete(id).await
    }

    async fn require_driver(&self, driver_id: Uuid) -> Result<(), AppError> {
        self.drivers
            .find_by_id(driver_id)
            .await?
            .ok_or_else(|| AppError::BadRequest("Assigned driver does not exist".to_string()))?;
        Ok(())
    }
}
