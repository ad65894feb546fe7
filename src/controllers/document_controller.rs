use std::collections::HashMap;

use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::common_dto::ApiResponse;
use crate::dto::document_dto::{CreateDocumentRequest, DocumentResponse};
use crate::models::document::DocumentCategory;
use crate::repositories::document_repository::DocumentRepository;
use crate::services::document_rollup::{rollup_by_category, CategoryRollup};
use crate::utils::errors::AppError;

pub struct DocumentController {
    repository: DocumentRepository,
}

impl DocumentController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: DocumentRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateDocumentRequest,
    ) -> Result<ApiResponse<DocumentResponse>, AppError> {
        request.validate()?;

        let category = DocumentCategory::parse(&request.category).ok_or_else(|| {
            AppError::BadRequest(format!("Unknown document category '{}'", request.category))
        })?;

        // Category determines which association is required. The rollup
        // itself never re-checks this.
        if category.requires_driver() && request.driver_id.is_none() {
            return Err(AppError::BadRequest(format!(
                "Category '{}' requires a driver",
                category.as_str()
            )));
        }

        let document = self
            .repository
            .create(
                category.as_str().to_string(),
                request.title,
                request.vehicle_id,
                request.driver_id,
                request.expiry_date,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            DocumentResponse::from_document(document, Utc::now()),
            "Document registered successfully".to_string(),
        ))
    }

    pub async fn list(&self, category: Option<String>) -> Result<Vec<DocumentResponse>, AppError> {
        if let Some(ref value) = category {
            if DocumentCategory::parse(value).is_none() {
                return Err(AppError::BadRequest(format!(
                    "Unknown document category '{}'",
                    value
                )));
            }
        }

        let now = Utc::now();
        let documents = self.repository.find_filtered(category.as_deref()).await?;
        Ok(documents
            .into_iter()
            .map(|d| DocumentResponse::from_document(d, now))
            .collect())
    }

    /// Expiry rollup over the whole document snapshot, grouped by
    /// category.
    pub async fn rollup(&self) -> Result<HashMap<DocumentCategory, CategoryRollup>, AppError> {
        let documents = self.repository.find_all().await?;
        let rollup = rollup_by_category(&documents, Utc::now())?;
        Ok(rollup)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.repository.delete(id).await
    }
}
