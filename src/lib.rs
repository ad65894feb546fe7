//! Fleet management backend: vehicles, drivers, trips, compliance
//! documents and fleet-wide statistics.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;

use axum::{response::Json, routing::get, Router};
use serde_json::json;

use state::AppState;

/// Assemble the full API router over the given state.
pub fn create_app_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .nest(
            "/api/auth",
            routes::auth_routes::create_auth_router(state.clone()),
        )
        .nest("/api/vehicles", routes::vehicle_routes::create_vehicle_router())
        .nest("/api/drivers", routes::driver_routes::create_driver_router())
        .nest("/api/trips", routes::trip_routes::create_trip_router())
        .nest(
            "/api/maintenance",
            routes::maintenance_routes::create_maintenance_router(),
        )
        .nest(
            "/api/documents",
            routes::document_routes::create_document_router(),
        )
        .nest("/api/fuel", routes::fuel_routes::create_fuel_router())
        .nest("/api/fleet", routes::fleet_routes::create_fleet_router())
        .with_state(state)
}

/// Liveness endpoint
async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
