//! User account domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use shared::validation::validate_not_blank;

/// Represents a registered user.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)] // Never serialize password hash to API responses
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Request payload for `POST /auth/register`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    #[validate(custom(function = "validate_not_blank"))]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, max = 1024, message = "Password must be 1-1024 characters"))]
    pub password: String,
}

/// Request payload for `POST /auth/login`.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Request payload for `PUT /user/`.
///
/// Absent fields keep their stored value.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    #[validate(custom(function = "validate_not_blank"))]
    pub name: Option<String>,

    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,
}

/// Public view of a user.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserProfile {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            created_at: user.created_at,
        }
    }
}

/// Canonical form of an email used as the login key.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Applies a profile update to a user record.
pub fn apply_profile_update(mut user: User, update: UpdateProfileRequest) -> User {
    if let Some(name) = update.name {
        user.name = name.trim().to_string();
    }
    if let Some(email) = update.email {
        user.email = normalize_email(&email);
    }
    user
}
