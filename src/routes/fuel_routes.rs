use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};

use crate::controllers::fuel_controller::FuelController;
use crate::dto::common_dto::ApiResponse;
use crate::dto::fuel_dto::{CreateFuelReadingRequest, FuelLevelResponse};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_fuel_router() -> Router<AppState> {
    Router::new()
        .route("/readings", post(record_reading))
        .route("/levels", get(latest_levels))
}

async fn record_reading(
    State(state): State<AppState>,
    Json(request): Json<CreateFuelReadingRequest>,
) -> Result<Json<ApiResponse<FuelLevelResponse>>, AppError> {
    let controller = FuelController::new(state.pool.clone());
    let response = controller.record(request).await?;
    Ok(Json(response))
}

async fn latest_levels(
    State(state): State<AppState>,
) -> Result<Json<Vec<FuelLevelResponse>>, AppError> {
    let controller = FuelController::new(state.pool.clone());
    let response = controller.latest_levels().await?;
    Ok(Json(response))
}
