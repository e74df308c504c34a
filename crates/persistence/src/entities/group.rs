//! Device group entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database row mapping for the device_group table.
///
/// Queries alias `group_name` to `name`.
#[derive(Debug, Clone, FromRow)]
pub struct GroupEntity {
    pub id: String,
    pub owner_id: String,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<GroupEntity> for domain::models::Group {
    fn from(entity: GroupEntity) -> Self {
        Self {
            id: entity.id,
            owner_id: entity.owner_id,
            name: entity.name,
            description: entity.description,
            created_at: entity.created_at,
        }
    }
}
