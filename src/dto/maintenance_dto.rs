use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::maintenance::MaintenanceRecord;
use crate::services::status_classifier::{classify_maintenance, MaintenanceStatus};

// Request to record performed maintenance
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateMaintenanceRequest {
    pub vehicle_id: Uuid,

    #[validate(length(min = 2, max = 50))]
    pub maintenance_type: String,

    #[validate(length(min = 1, max = 1000))]
    pub description: String,

    pub cost: Option<Decimal>,
    pub performed_at: DateTime<Utc>,
    pub next_due_date: Option<DateTime<Utc>>,

    #[validate(length(max = 100))]
    pub performed_by: Option<String>,
}

// Maintenance record response with the derived due status
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceRecordResponse {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub maintenance_type: String,
    pub description: String,
    pub cost: Option<Decimal>,
    pub performed_at: DateTime<Utc>,
    pub next_due_date: Option<DateTime<Utc>>,
    pub due_status: MaintenanceStatus,
    pub performed_by: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl MaintenanceRecordResponse {
    pub fn from_record(record: MaintenanceRecord, now: DateTime<Utc>) -> Self {
        let due_status = classify_maintenance(record.next_due_date, now);
        Self {
            id: record.id,
            vehicle_id: record.vehicle_id,
            maintenance_type: record.maintenance_type,
            description: record.description,
            cost: record.cost,
            performed_at: record.performed_at,
            next_due_date: record.next_due_date,
            due_status,
            performed_by: record.performed_by,
            created_at: record.created_at,
        }
    }
}
