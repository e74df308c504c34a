//! Device repository for database operations.

use chrono::Utc;
use sqlx::PgConnection;
use uuid::Uuid;

use crate::entities::DeviceEntity;
use crate::error::StoreError;
use crate::metrics::QueryTimer;

/// Repository for device rows.
///
/// Performs no authorization; callers check group visibility first.
pub struct DeviceRepository<'c> {
    conn: &'c mut PgConnection,
}

impl<'c> DeviceRepository<'c> {
    /// Creates a repository on an open connection or transaction.
    pub fn new(conn: &'c mut PgConnection) -> Self {
        Self { conn }
    }

    /// Insert a device under a freshly generated id.
    pub async fn add(
        &mut self,
        name: &str,
        mac: &str,
        ip: Option<&str>,
        group_id: &str,
    ) -> Result<DeviceEntity, StoreError> {
        let timer = QueryTimer::new("add_device");
        let result = sqlx::query_as::<_, DeviceEntity>(
            r#"
            INSERT INTO device (id, name, mac, ip, group_id, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, name, mac, ip, group_id, created_at
            "#,
        )
        .bind(Uuid::new_v4().to_string())
        .bind(name)
        .bind(mac)
        .bind(ip)
        .bind(group_id)
        .bind(Utc::now())
        .fetch_one(&mut *self.conn)
        .await;
        timer.record();
        Ok(result?)
    }

    /// Find a device by id.
    pub async fn find_by_id(&mut self, id: &str) -> Result<Option<DeviceEntity>, StoreError> {
        let timer = QueryTimer::new("find_device_by_id");
        let result = sqlx::query_as::<_, DeviceEntity>(
            r#"
            SELECT id, name, mac, ip, group_id, created_at
            FROM device
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *self.conn)
        .await;
        timer.record();
        Ok(result?)
    }

    /// List devices in every group visible to `user_id`, ordered by name.
    pub async fn list_by_user(&mut self, user_id: &str) -> Result<Vec<DeviceEntity>, StoreError> {
        let timer = QueryTimer::new("list_devices_by_user");
        let result = sqlx::query_as::<_, DeviceEntity>(
            r#"
            SELECT d.id, d.name, d.mac, d.ip, d.group_id, d.created_at
            FROM device d
            JOIN device_group g ON g.id = d.group_id
            WHERE g.owner_id = $1
               OR EXISTS (
                   SELECT 1 FROM user_group_mapping m
                   WHERE m.group_id = g.id AND m.user_id = $1
               )
            ORDER BY d.name ASC, d.id ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(&mut *self.conn)
        .await;
        timer.record();
        Ok(result?)
    }
}
