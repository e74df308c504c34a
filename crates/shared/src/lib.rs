//! Shared utilities for the fleet registry backend.
//!
//! This crate provides the credential primitives used across the other crates:
//! - Password hashing with Argon2id
//! - Signed bearer token issuance and verification
//! - Field validators shared by request payloads

pub mod jwt;
pub mod password;
pub mod validation;
