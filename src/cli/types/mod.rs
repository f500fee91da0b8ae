//! Type-safe wrappers and enums for Fantasy Premier League data.

pub mod ids;
pub mod position;
