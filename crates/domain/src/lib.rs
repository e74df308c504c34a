//! Domain layer for the fleet registry.
//!
//! This crate contains plain data records for users, groups, devices and
//! memberships, together with the request payloads that create them.

pub mod models;
