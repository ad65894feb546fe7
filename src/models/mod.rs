//! Domain models
//!
//! Entity rows map 1:1 to the PostgreSQL schema. Status and category
//! columns are stored as text and validated into the enums defined here
//! at the snapshot boundary.

pub mod document;
pub mod driver;
pub mod fleet_stats;
pub mod fuel;
pub mod maintenance;
pub mod trip;
pub mod user;
pub mod vehicle;
