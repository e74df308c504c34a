//! Device entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database row mapping for the device table.
#[derive(Debug, Clone, FromRow)]
pub struct DeviceEntity {
    pub id: String,
    pub name: String,
    pub mac: String,
    pub ip: Option<String>,
    pub group_id: String,
    pub created_at: DateTime<Utc>,
}

impl From<DeviceEntity> for domain::models::Device {
    fn from(entity: DeviceEntity) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            mac: entity.mac,
            ip: entity.ip,
            group_id: entity.group_id,
            created_at: entity.created_at,
        }
    }
}
