use axum::{extract::State, routing::get, Json, Router};

use crate::controllers::fleet_stats_controller::FleetStatsController;
use crate::models::fleet_stats::FleetStats;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_fleet_router() -> Router<AppState> {
    Router::new().route("/stats", get(get_fleet_stats))
}

async fn get_fleet_stats(State(state): State<AppState>) -> Result<Json<FleetStats>, AppError> {
    let controller = FleetStatsController::new(state.pool.clone(), state.config.clone());
    let response = controller.get_stats().await?;
    Ok(Json(response))
}
