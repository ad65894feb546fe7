use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::common_dto::ApiResponse;
use crate::dto::trip_dto::{CreateTripRequest, TripResponse, UpdateTripRequest};
use crate::models::trip::TripStatus;
use crate::repositories::driver_repository::DriverRepository;
use crate::repositories::trip_repository::TripRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::AppError;
use crate::utils::validation::non_negative;

pub struct TripController {
    repository: TripRepository,
    vehicles: VehicleRepository,
    drivers: DriverRepository,
}

impl TripController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: TripRepository::new(pool.clone()),
            vehicles: VehicleRepository::new(pool.clone()),
            drivers: DriverRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateTripRequest,
    ) -> Result<ApiResponse<TripResponse>, AppError> {
        request.validate()?;

        let status = match &request.status {
            Some(value) => TripStatus::parse(value)
                .ok_or_else(|| AppError::BadRequest(format!("Unknown trip status '{}'", value)))?,
            None => TripStatus::Planned,
        };

        self.vehicles
            .find_by_id(request.vehicle_id)
            .await?
            .ok_or_else(|| AppError::BadRequest("Vehicle does not exist".to_string()))?;
        self.drivers
            .find_by_id(request.driver_id)
            .await?
            .ok_or_else(|| AppError::BadRequest("Driver does not exist".to_string()))?;

        let trip = self
            .repository
            .create(
                request.vehicle_id,
                request.driver_id,
                request.start_latitude,
                request.start_longitude,
                request.start_time,
                status.as_str().to_string(),
                request.purpose,
                request.notes,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            trip.into(),
            "Trip created successfully".to_string(),
        ))
    }

    pub async fn list(
        &self,
        vehicle_id: Option<Uuid>,
        driver_id: Option<Uuid>,
    ) -> Result<Vec<TripResponse>, AppError> {
        let trips = self.repository.find_filtered(vehicle_id, driver_id).await?;
        Ok(trips.into_iter().map(TripResponse::from).collect())
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateTripRequest,
    ) -> Result<ApiResponse<TripResponse>, AppError> {
        request.validate()?;

        let current = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Trip not found".to_string()))?;

        let status = match &request.status {
            Some(value) => Some(
                TripStatus::parse(value)
                    .ok_or_else(|| {
                        AppError::BadRequest(format!("Unknown trip status '{}'", value))
                    })?
                    .as_str()
                    .to_string(),
            ),
            None => None,
        };

        if let Some(end_time) = request.end_time {
            if end_time < current.start_time {
                return Err(AppError::BadRequest(
                    "Trip end time cannot be before its start time".to_string(),
                ));
            }
        }

        if let Some(distance) = request.distance {
            if !non_negative(distance) {
                return Err(AppError::BadRequest(
                    "Trip distance cannot be negative".to_string(),
                ));
            }
        }

        let trip = self
            .repository
            .update(
                id,
                request.end_latitude,
                request.end_longitude,
                request.end_time,
                request.distance,
                status,
                request.notes,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            trip.into(),
            "Trip updated successfully".to_string(),
        ))
    }
}
