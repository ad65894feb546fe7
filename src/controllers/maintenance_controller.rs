use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::common_dto::ApiResponse;
use crate::dto::maintenance_dto::{CreateMaintenanceRequest, MaintenanceRecordResponse};
use crate::repositories::maintenance_repository::MaintenanceRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::AppError;
use crate::utils::validation::non_negative;

pub struct MaintenanceController {
    repository: MaintenanceRepository,
    vehicles: VehicleRepository,
}

impl MaintenanceController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: MaintenanceRepository::new(pool.clone()),
            vehicles: VehicleRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateMaintenanceRequest,
    ) -> Result<ApiResponse<MaintenanceRecordResponse>, AppError> {
        request.validate()?;

        if let Some(cost) = request.cost {
            if !non_negative(cost) {
                return Err(AppError::BadRequest(
                    "Maintenance cost cannot be negative".to_string(),
                ));
            }
        }

        self.vehicles
            .find_by_id(request.vehicle_id)
            .await?
            .ok_or_else(|| AppError::BadRequest("Vehicle does not exist".to_string()))?;

        let record = self
            .repository
            .create(
                request.vehicle_id,
                request.maintenance_type,
                request.description,
                request.cost,
                request.performed_at,
                request.next_due_date,
                request.performed_by,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            MaintenanceRecordResponse::from_record(record, Utc::now()),
            "Maintenance record created successfully".to_string(),
        ))
    }

    pub async fn list(
        &self,
        vehicle_id: Option<Uuid>,
    ) -> Result<Vec<MaintenanceRecordResponse>, AppError> {
        let now = Utc::now();
        let records = self.repository.find_filtered(vehicle_id).await?;
        Ok(records
            .into_iter()
            .map(|r| MaintenanceRecordResponse::from_record(r, now))
            .collect())
    }
}
