//! User entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database row mapping for the app_user table.
#[derive(Clone, FromRow)]
pub struct UserEntity {
    pub id: String,
    pub name: String,
    pub email: String,
    /// Argon2id PHC digest.
    pub password: String,
    pub created_at: DateTime<Utc>,
}

impl std::fmt::Debug for UserEntity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserEntity")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .field("created_at", &self.created_at)
            .finish()
    }
}

impl From<UserEntity> for domain::models::User {
    fn from(entity: UserEntity) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            password_hash: entity.password,
            created_at: entity.created_at,
        }
    }
}
