use sqlx::PgPool;

use crate::dto::common_dto::ApiResponse;
use crate::dto::fuel_dto::{CreateFuelReadingRequest, FuelLevelResponse};
use crate::repositories::fuel_repository::FuelRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::AppError;
use crate::utils::validation::fuel_level_in_range;

pub struct FuelController {
    repository: FuelRepository,
    vehicles: VehicleRepository,
}

impl FuelController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: FuelRepository::new(pool.clone()),
            vehicles: VehicleRepository::new(pool),
        }
    }

    pub async fn record(
        &self,
        request: CreateFuelReadingRequest,
    ) -> Result<ApiResponse<FuelLevelResponse>, AppError> {
        if !fuel_level_in_range(request.level) {
            return Err(AppError::BadRequest(
                "Fuel level must be between 0 and 100".to_string(),
            ));
        }

        self.vehicles
            .find_by_id(request.vehicle_id)
            .await?
            .ok_or_else(|| AppError::BadRequest("Vehicle does not exist".to_string()))?;

        let reading = self
            .repository
            .create(request.vehicle_id, request.level)
            .await?;

        Ok(ApiResponse::success_with_message(
            reading.into(),
            "Fuel reading recorded".to_string(),
        ))
    }

    /// Latest level per vehicle; vehicles without readings are absent.
    pub async fn latest_levels(&self) -> Result<Vec<FuelLevelResponse>, AppError> {
        let readings = self.repository.find_latest_per_vehicle().await?;
        Ok(readings.into_iter().map(FuelLevelResponse::from).collect())
    }
}
