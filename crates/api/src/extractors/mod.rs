//! Custom Axum extractors.

pub mod body;
pub mod user_auth;

pub use body::{AppForm, AppJson};
pub use user_auth::UserAuth;
