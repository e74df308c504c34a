//! Group repository for database operations.

use domain::models::Group;
use sqlx::PgConnection;

use crate::entities::GroupEntity;
use crate::error::StoreError;
use crate::metrics::QueryTimer;

/// Repository for device_group rows.
///
/// A group is visible to a user who owns it or is mapped to it through
/// user_group_mapping.
pub struct GroupRepository<'c> {
    conn: &'c mut PgConnection,
}

impl<'c> GroupRepository<'c> {
    /// Creates a repository on an open connection or transaction.
    pub fn new(conn: &'c mut PgConnection) -> Self {
        Self { conn }
    }

    /// Insert a group. The caller assigns `id` and `owner_id`.
    pub async fn add(&mut self, group: &Group) -> Result<GroupEntity, StoreError> {
        let timer = QueryTimer::new("add_group");
        let result = sqlx::query_as::<_, GroupEntity>(
            r#"
            INSERT INTO device_group (id, group_name, owner_id, description, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, owner_id, group_name AS name, description, created_at
            "#,
        )
        .bind(&group.id)
        .bind(&group.name)
        .bind(&group.owner_id)
        .bind(&group.description)
        .bind(group.created_at)
        .fetch_one(&mut *self.conn)
        .await;
        timer.record();
        Ok(result?)
    }

    /// List every group visible to `user_id`, ordered by name.
    pub async fn list_by_user(&mut self, user_id: &str) -> Result<Vec<GroupEntity>, StoreError> {
        let timer = QueryTimer::new("list_groups_by_user");
        let result = sqlx::query_as::<_, GroupEntity>(
            r#"
            SELECT g.id, g.owner_id, g.group_name AS name, g.description, g.created_at
            FROM device_group g
            WHERE g.owner_id = $1
               OR EXISTS (
                   SELECT 1 FROM user_group_mapping m
                   WHERE m.group_id = g.id AND m.user_id = $1
               )
            ORDER BY g.group_name ASC, g.id ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(&mut *self.conn)
        .await;
        timer.record();
        Ok(result?)
    }

    /// Find a group by id if it exists and is visible to `user_id`.
    pub async fn find_visible(
        &mut self,
        group_id: &str,
        user_id: &str,
    ) -> Result<Option<GroupEntity>, StoreError> {
        let timer = QueryTimer::new("find_visible_group");
        let result = sqlx::query_as::<_, GroupEntity>(
            r#"
            SELECT g.id, g.owner_id, g.group_name AS name, g.description, g.created_at
            FROM device_group g
            WHERE g.id = $1
              AND (
                  g.owner_id = $2
                  OR EXISTS (
                      SELECT 1 FROM user_group_mapping m
                      WHERE m.group_id = g.id AND m.user_id = $2
                  )
              )
            "#,
        )
        .bind(group_id)
        .bind(user_id)
        .fetch_optional(&mut *self.conn)
        .await;
        timer.record();
        Ok(result?)
    }
}
