//! User-group mapping entity (database row mapping).

use sqlx::FromRow;

/// Database row mapping for the user_group_mapping table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct UserGroupMappingEntity {
    pub id: String,
    pub user_id: String,
    pub group_id: String,
}

impl From<UserGroupMappingEntity> for domain::models::UserGroupMapping {
    fn from(entity: UserGroupMappingEntity) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            group_id: entity.group_id,
        }
    }
}
