//! Device domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use shared::validation::{validate_ip_address, validate_mac_address, validate_not_blank};

/// Represents a registered IoT device.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    pub id: String,
    pub name: String,
    pub mac: String,
    pub ip: Option<String>,
    pub group_id: String,
    pub created_at: DateTime<Utc>,
}

/// Request payload for `POST /device/`.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateDeviceRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    #[validate(custom(function = "validate_not_blank"))]
    pub name: String,

    #[validate(custom(function = "validate_mac_address"))]
    pub mac: String,

    #[validate(custom(function = "validate_ip_address"))]
    pub ip: Option<String>,

    #[serde(alias = "group")]
    #[validate(length(min = 1, message = "Group is required"))]
    pub group_id: String,
}

/// Canonical MAC representation: lowercase, colon separated.
pub fn normalize_mac(mac: &str) -> String {
    mac.trim().to_lowercase().replace('-', ":")
}
