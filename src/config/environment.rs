//! Environment configuration
//!
//! All runtime configuration comes from environment variables (loaded
//! from `.env` in development via dotenvy).

use std::env;

use chrono::{FixedOffset, Offset, Utc};

use crate::utils::errors::AppError;

/// Environment configuration
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub jwt_secret: String,
    pub jwt_expiration: u64,
    pub cors_origins: Vec<String>,
    /// Reference timezone for "completed today" style buckets, as a UTC
    /// offset in minutes. Never hardcoded; defaults to UTC.
    pub fleet_tz_offset_minutes: i32,
    /// When set, fleet stats use the demo snapshot provider, which
    /// fabricates fuel levels instead of reading sensor data.
    pub demo_fuel_data: bool,
}

impl EnvironmentConfig {
    pub fn from_env() -> Result<Self, AppError> {
        let database_url = env::var("DATABASE_URL")
            .map_err(|_| AppError::Internal("DATABASE_URL must be set".to_string()))?;
        let jwt_secret = env::var("JWT_SECRET")
            .map_err(|_| AppError::Internal("JWT_SECRET must be set".to_string()))?;

        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .map_err(|_| AppError::Internal("PORT must be a valid number".to_string()))?;

        let fleet_tz_offset_minutes = env::var("FLEET_TZ_OFFSET_MINUTES")
            .unwrap_or_else(|_| "0".to_string())
            .parse()
            .map_err(|_| {
                AppError::Internal("FLEET_TZ_OFFSET_MINUTES must be a valid number".to_string())
            })?;

        Ok(Self {
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port,
            database_url,
            jwt_secret,
            jwt_expiration: env::var("JWT_EXPIRATION")
                .unwrap_or_else(|_| "86400".to_string())
                .parse()
                .map_err(|_| {
                    AppError::Internal("JWT_EXPIRATION must be a valid number".to_string())
                })?,
            cors_origins: env::var("CORS_ORIGINS")
                .map(|v| v.split(',').map(|s| s.trim().to_string()).collect())
                .unwrap_or_default(),
            fleet_tz_offset_minutes,
            demo_fuel_data: env::var("DEMO_FUEL_DATA")
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
        })
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Server bind address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// The configured reference timezone. Falls back to UTC if the
    /// offset is out of range.
    pub fn fleet_timezone(&self) -> FixedOffset {
        FixedOffset::east_opt(self.fleet_tz_offset_minutes * 60).unwrap_or_else(|| Utc.fix())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fleet_timezone_from_offset() {
        let mut config = EnvironmentConfig {
            environment: "test".to_string(),
            host: "127.0.0.1".to_string(),
            port: 0,
            database_url: String::new(),
            jwt_secret: String::new(),
            jwt_expiration: 0,
            cors_origins: vec![],
            fleet_tz_offset_minutes: 120,
            demo_fuel_data: false,
        };
        assert_eq!(config.fleet_timezone().local_minus_utc(), 120 * 60);

        // Out-of-range offsets fall back to UTC instead of panicking.
        config.fleet_tz_offset_minutes = 100_000;
        assert_eq!(config.fleet_timezone().local_minus_utc(), 0);
    }
}
