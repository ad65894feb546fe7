use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::driver::Driver;
use crate::services::status_classifier::{
    classify_by_expiry, ExpiryStatus, DOCUMENT_WARNING_WINDOW_DAYS,
};
use crate::utils::validation::validate_license_number;

// Request to create a driver
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateDriverRequest {
    #[validate(length(min = 1, max = 100))]
    pub first_name: String,

    #[validate(length(min = 1, max = 100))]
    pub last_name: String,

    #[validate(email)]
    pub email: String,

    pub phone: Option<String>,

    #[validate(custom = "validate_license_number")]
    pub license_number: String,

    pub license_expiry: Option<DateTime<Utc>>,

    pub emergency_contact: Option<String>,
}

// Request to update a driver
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDriverRequest {
    pub phone: Option<String>,
    pub license_expiry: Option<DateTime<Utc>>,
    pub is_active: Option<bool>,
    pub emergency_contact: Option<String>,
}

// Driver response with the derived licence status
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverResponse {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub license_number: String,
    pub license_expiry: Option<DateTime<Utc>>,
    pub license_status: ExpiryStatus,
    pub is_active: bool,
    pub emergency_contact: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl DriverResponse {
    /// `license_status` is derived at response time, never stored.
    pub fn from_driver(driver: Driver, now: DateTime<Utc>) -> Self {
        let license_status =
            classify_by_expiry(driver.license_expiry, now, DOCUMENT_WARNING_WINDOW_DAYS);
        Self {
            id: driver.id,
            first_name: driver.first_name,
            last_name: driver.last_name,
            email: driver.email,
            phone: driver.phone,
            license_number: driver.license_number,
            license_expiry: driver.license_expiry,
            license_status,
            is_active: driver.is_active,
            emergency_contact: driver.emergency_contact,
            created_at: driver.created_at,
        }
    }
}
