use std::collections::HashMap;

use axum::{
    extract::{Path, Query, State},
    routing::{delete, get, post},
    Json, Router,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::controllers::document_controller::DocumentController;
use crate::dto::common_dto::ApiResponse;
use crate::dto::document_dto::{CreateDocumentRequest, DocumentResponse};
use crate::models::document::DocumentCategory;
use crate::services::document_rollup::CategoryRollup;
use crate::state::AppState;
use crate::utils::errors::AppError;

#[derive(Debug, Deserialize)]
pub struct DocumentListQuery {
    pub category: Option<String>,
}

pub fn create_document_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_document))
        .route("/", get(list_documents))
        .route("/rollup", get(rollup_documents))
        .route("/:id", delete(delete_document))
}

async fn create_document(
    State(state): State<AppState>,
    Json(request): Json<CreateDocumentRequest>,
) -> Result<Json<ApiResponse<DocumentResponse>>, AppError> {
    let controller = DocumentController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn list_documents(
    State(state): State<AppState>,
    Query(query): Query<DocumentListQuery>,
) -> Result<Json<Vec<DocumentResponse>>, AppError> {
    let controller = DocumentController::new(state.pool.clone());
    let response = controller.list(query.category).await?;
    Ok(Json(response))
}

async fn rollup_documents(
    State(state): State<AppState>,
) -> Result<Json<HashMap<DocumentCategory, CategoryRollup>>, AppError> {
    let controller = DocumentController::new(state.pool.clone());
    let response = controller.rollup().await?;
    Ok(Json(response))
}

async fn delete_document(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = DocumentController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Document deleted successfully"
    })))
}
