//! Persistence layer for the fleet registry.
//!
//! This crate contains:
//! - Database connection management and the schema migration
//! - Entity definitions (database row mappings)
//! - Repository implementations bound to an open transaction

pub mod db;
pub mod entities;
pub mod error;
pub mod metrics;
pub mod repositories;

pub use error::StoreError;
