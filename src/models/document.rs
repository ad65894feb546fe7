//! Document model
//!
//! Compliance documents (licences, insurance, permits...). The expiry
//! status is always derived from `expiry_date` at read time, never stored.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Document category. Whether a category logically requires a vehicle or
/// a driver association is enforced at the input boundary, not here.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DocumentCategory {
    VehicleLicence,
    Insurance,
    VehicleFitness,
    DriverLicence,
    MedicalCertificate,
    BorderClearance,
    CustomsDeclaration,
    TransitPermit,
    Receipts,
}

impl DocumentCategory {
    pub const ALL: [DocumentCategory; 9] = [
        DocumentCategory::VehicleLicence,
        DocumentCategory::Insurance,
        DocumentCategory::VehicleFitness,
        DocumentCategory::DriverLicence,
        DocumentCategory::MedicalCertificate,
        DocumentCategory::BorderClearance,
        DocumentCategory::CustomsDeclaration,
        DocumentCategory::TransitPermit,
        DocumentCategory::Receipts,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentCategory::VehicleLicence => "vehicle_licence",
            DocumentCategory::Insurance => "insurance",
            DocumentCategory::VehicleFitness => "vehicle_fitness",
            DocumentCategory::DriverLicence => "driver_licence",
            DocumentCategory::MedicalCertificate => "medical_certificate",
            DocumentCategory::BorderClearance => "border_clearance",
            DocumentCategory::CustomsDeclaration => "customs_declaration",
            DocumentCategory::TransitPermit => "transit_permit",
            DocumentCategory::Receipts => "receipts",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.as_str() == value)
    }

    /// Categories tied to a driver rather than a vehicle.
    pub fn requires_driver(&self) -> bool {
        matches!(
            self,
            DocumentCategory::DriverLicence | DocumentCategory::MedicalCertificate
        )
    }
}

/// Document row
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Document {
    pub id: Uuid,
    pub category: String,
    pub title: String,
    pub vehicle_id: Option<Uuid>,
    pub driver_id: Option<Uuid>,
    pub expiry_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}
