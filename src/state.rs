//! Shared application state
//!
//! The state passed through the axum router: the connection pool and the
//! environment configuration. Snapshots and statistics are computed per
//! request; nothing here is mutated by handlers.

use sqlx::PgPool;

use crate::config::environment::EnvironmentConfig;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: EnvironmentConfig,
}

impl AppState {
    pub fn new(pool: PgPool, config: EnvironmentConfig) -> Self {
        Self { pool, config }
    }
}
