use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::document::Document;
use crate::services::status_classifier::{
    classify_by_expiry, ExpiryStatus, DOCUMENT_WARNING_WINDOW_DAYS,
};

// Request to register a document
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateDocumentRequest {
    pub category: String,

    #[validate(length(min = 1, max = 200))]
    pub title: String,

    pub vehicle_id: Option<Uuid>,
    pub driver_id: Option<Uuid>,
    pub expiry_date: Option<DateTime<Utc>>,
}

// Document response with the derived expiry status
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentResponse {
    pub id: Uuid,
    pub category: String,
    pub title: String,
    pub vehicle_id: Option<Uuid>,
    pub driver_id: Option<Uuid>,
    pub expiry_date: Option<DateTime<Utc>>,
    pub status: ExpiryStatus,
    pub created_at: DateTime<Utc>,
}

impl DocumentResponse {
    pub fn from_document(document: Document, now: DateTime<Utc>) -> Self {
        let status =
            classify_by_expiry(document.expiry_date, now, DOCUMENT_WARNING_WINDOW_DAYS);
        Self {
            id: document.id,
            category: document.category,
            title: document.title,
            vehicle_id: document.vehicle_id,
            driver_id: document.driver_id,
            expiry_date: document.expiry_date,
            status,
            created_at: document.created_at,
        }
    }
}
