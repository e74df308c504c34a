//! Services used by route handlers.

pub mod cookies;
pub mod telemetry;
