//! Maintenance record model

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// Maintenance record row. `next_due_date` drives the due/overdue
/// classification; `cost`, when present, is >= 0.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct MaintenanceRecord {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub maintenance_type: String,
    pub description: String,
    pub cost: Option<Decimal>,
    pub performed_at: DateTime<Utc>,
    pub next_due_date: Option<DateTime<Utc>>,
    pub performed_by: Option<String>,
    pub created_at: DateTime<Utc>,
}
