//! Database layer

pub mod connection;
