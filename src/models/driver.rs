//! Driver model
//!
//! Maps exactly to the `drivers` table. `license_number` uniquely
//! identifies a driver; uniqueness is enforced by the schema and
//! double-checked in the controller for a friendlier error.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Driver {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub license_number: String,
    pub license_expiry: Option<DateTime<Utc>>,
    pub is_active: bool,
    pub emergency_contact: Option<String>,
    pub created_at: DateTime<Utc>,
}
