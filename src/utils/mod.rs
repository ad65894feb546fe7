//! System utilities
//!
//! Error handling, validation helpers and JWT support shared across the
//! application.

pub mod errors;
pub mod jwt;
pub mod validation;
