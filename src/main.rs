use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tokio::signal;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use fleet_management::config::environment::EnvironmentConfig;
use fleet_management::database;
use fleet_management::middleware::cors::{cors_middleware, cors_middleware_with_origins};
use fleet_management::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,fleet_management=debug".into()),
        )
        .init();

    info!("🚚 Fleet Management API");
    info!("=======================");

    let config = EnvironmentConfig::from_env()?;

    let pool = match database::connection::create_pool(&config.database_url).await {
        Ok(pool) => pool,
        Err(e) => {
            error!("❌ Database connection failed: {}", e);
            return Err(e);
        }
    };

    database::connection::run_migrations(&pool).await?;
    info!("✅ Database ready");

    let cors = if config.is_development() || config.cors_origins.is_empty() {
        cors_middleware()
    } else {
        cors_middleware_with_origins(&config.cors_origins)
    };

    let addr: SocketAddr = config.server_addr().parse()?;
    let app_state = AppState::new(pool, config);

    let app = fleet_management::create_app_router(app_state)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    info!("🌐 Server listening on http://{}", addr);
    info!("🔍 Endpoints:");
    info!("   GET  /api/health - Health check");
    info!("🔐 Auth:");
    info!("   POST /api/auth/register - Register user");
    info!("   POST /api/auth/login - Login");
    info!("   GET  /api/auth/me - Current user");
    info!("🚗 Vehicles:");
    info!("   POST /api/vehicles - Create vehicle");
    info!("   GET  /api/vehicles - List vehicles");
    info!("   GET  /api/vehicles/:id - Get vehicle");
    info!("   PUT  /api/vehicles/:id - Update vehicle");
    info!("   DELETE /api/vehicles/:id - Delete vehicle");
    info!("🧑 Drivers:");
    info!("   POST /api/drivers - Create driver");
    info!("   GET  /api/drivers - List drivers (with licence status)");
    info!("   GET  /api/drivers/:id - Get driver");
    info!("   PUT  /api/drivers/:id - Update driver");
    info!("🛣️  Trips:");
    info!("   POST /api/trips - Create trip");
    info!("   GET  /api/trips?vehicleId=&driverId= - List trips");
    info!("   PUT  /api/trips/:id - Update trip");
    info!("🔧 Maintenance:");
    info!("   POST /api/maintenance - Create record");
    info!("   GET  /api/maintenance?vehicleId= - List records (with due status)");
    info!("📄 Documents:");
    info!("   POST /api/documents - Register document");
    info!("   GET  /api/documents?category= - List documents (with expiry status)");
    info!("   GET  /api/documents/rollup - Expiry rollup by category");
    info!("   DELETE /api/documents/:id - Delete document");
    info!("⛽ Fuel:");
    info!("   POST /api/fuel/readings - Record fuel reading");
    info!("   GET  /api/fuel/levels - Latest level per vehicle");
    info!("📊 Fleet:");
    info!("   GET  /api/fleet/stats - Fleet statistics snapshot");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Server stopped");
    Ok(())
}

/// Graceful shutdown on Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Ctrl+C received, shutting down...");
        },
        _ = terminate => {
            info!("🛑 Termination signal received, shutting down...");
        },
    }
}
