//! User-group mapping repository.

use domain::models::UserGroupMapping;
use sqlx::PgConnection;

use crate::entities::UserGroupMappingEntity;
use crate::error::StoreError;
use crate::metrics::QueryTimer;

/// Repository for user_group_mapping rows.
pub struct MembershipRepository<'c> {
    conn: &'c mut PgConnection,
}

impl<'c> MembershipRepository<'c> {
    /// Creates a repository on an open connection or transaction.
    pub fn new(conn: &'c mut PgConnection) -> Self {
        Self { conn }
    }

    /// Map a user to a group.
    pub async fn add(
        &mut self,
        mapping: &UserGroupMapping,
    ) -> Result<UserGroupMappingEntity, StoreError> {
        let timer = QueryTimer::new("add_user_group_mapping");
        let result = sqlx::query_as::<_, UserGroupMappingEntity>(
            r#"
            INSERT INTO user_group_mapping (id, user_id, group_id)
            VALUES ($1, $2, $3)
            RETURNING id, user_id, group_id
            "#,
        )
        .bind(&mapping.id)
        .bind(&mapping.user_id)
        .bind(&mapping.group_id)
        .fetch_one(&mut *self.conn)
        .await;
        timer.record();
        Ok(result?)
    }

    /// List the mappings of one user.
    pub async fn list_by_user(
        &mut self,
        user_id: &str,
    ) -> Result<Vec<UserGroupMappingEntity>, StoreError> {
        let timer = QueryTimer::new("list_mappings_by_user");
        let result = sqlx::query_as::<_, UserGroupMappingEntity>(
            r#"
            SELECT id, user_id, group_id
            FROM user_group_mapping
            WHERE user_id = $1
            ORDER BY id
            "#,
        )
        .bind(user_id)
        .fetch_all(&mut *self.conn)
        .await;
        timer.record();
        Ok(result?)
    }
}
