//! Fleet computation core and its collaborators
//!
//! `status_classifier`, `fleet_aggregator` and `document_rollup` are pure,
//! synchronous and side-effect free: they take entity snapshots plus an
//! explicit `now` and return derived values. Everything async (database
//! access, demo data) lives behind the `snapshot_provider` seam.

pub mod document_rollup;
pub mod fleet_aggregator;
pub mod snapshot_provider;
pub mod status_classifier;

use thiserror::Error;

use crate::utils::errors::AppError;

/// Input-validation condition signalled by the pure core.
///
/// A malformed status or category value outside the enumerated set is
/// reported instead of being coerced into an existing bucket; the caller
/// decides whether to drop, log or abort.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StatsError {
    #[error("invalid vehicle status '{0}'")]
    InvalidVehicleStatus(String),

    #[error("invalid trip status '{0}'")]
    InvalidTripStatus(String),

    #[error("invalid document category '{0}'")]
    InvalidDocumentCategory(String),
}

impl From<StatsError> for AppError {
    fn from(err: StatsError) -> Self {
        AppError::InvalidInput(err.to_string())
    }
}
