use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::trip::Trip;

// Request to create a trip
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateTripRequest {
    pub vehicle_id: Uuid,
    pub driver_id: Uuid,
    pub start_latitude: Decimal,
    pub start_longitude: Decimal,
    pub start_time: DateTime<Utc>,

    /// Defaults to "planned" when omitted.
    pub status: Option<String>,

    #[validate(length(max = 100))]
    pub purpose: Option<String>,

    #[validate(length(max = 1000))]
    pub notes: Option<String>,
}

// Request to update a trip (progress, completion, status changes)
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTripRequest {
    pub end_latitude: Option<Decimal>,
    pub end_longitude: Option<Decimal>,
    pub end_time: Option<DateTime<Utc>>,
    pub distance: Option<Decimal>,
    pub status: Option<String>,

    #[validate(length(max = 1000))]
    pub notes: Option<String>,
}

// Trip response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TripResponse {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub driver_id: Uuid,
    pub start_latitude: Decimal,
    pub start_longitude: Decimal,
    pub end_latitude: Option<Decimal>,
    pub end_longitude: Option<Decimal>,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub distance: Option<Decimal>,
    pub status: String,
    pub purpose: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Trip> for TripResponse {
    fn from(trip: Trip) -> Self {
        Self {
            id: trip.id,
            vehicle_id: trip.vehicle_id,
            driver_id: trip.driver_id,
            start_latitude: trip.start_latitude,
            start_longitude: trip.start_longitude,
            end_latitude: trip.end_latitude,
            end_longitude: trip.end_longitude,
            start_time: trip.start_time,
            end_time: trip.end_time,
            distance: trip.distance,
            status: trip.status,
            purpose: trip.purpose,
            notes: trip.notes,
            created_at: trip.created_at,
        }
    }
}
