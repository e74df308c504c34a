//! Device group domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use shared::validation::validate_not_blank;

/// A named collection of devices owned by one user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub id: String,
    pub owner_id: String,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Request payload for `POST /group/`.
///
/// Any `id` or `ownerId` sent by the client is ignored.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateGroupRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    #[validate(custom(function = "validate_not_blank"))]
    pub name: String,

    #[validate(length(max = 500, message = "Description must be at most 500 characters"))]
    pub description: Option<String>,
}

impl Group {
    /// Builds a new group owned by `owner_id`.
    pub fn new(id: String, owner_id: String, request: CreateGroupRequest) -> Self {
        Self {
            id,
            owner_id,
            name: request.name.trim().to_string(),
            description: request.description,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_ignores_owner_fields() {
        let request: CreateGroupRequest =
            serde_json::from_str(r#"{"id":"forged","ownerId":"someone","name":"g1"}"#).unwrap();
        let group = Group::new("g-1".to_string(), "user-1".to_string(), request);

        assert_eq!(group.id, "g-1");
        assert_eq!(group.owner_id, "user-1");
    }

    #[test]
    fn test_create_request_validation() {
        let valid = CreateGroupRequest {
            name: "g1".to_string(),
            description: None,
        };
        assert!(valid.validate().is_ok());

        let blank = CreateGroupRequest {
            name: "  ".to_string(),
            description: None,
        };
        assert!(blank.validate().is_err());

        let long_description = CreateGroupRequest {
            name: "g1".to_string(),
            description: Some("d".repeat(501)),
        };
        assert!(long_description.validate().is_err());
    }

    #[test]
    fn test_group_serializes_camel_case() {
        let group = Group::new(
            "g-1".to_string(),
            "user-1".to_string(),
            CreateGroupRequest {
                name: " g1 ".to_string(),
                description: Some("lab".to_string()),
            },
        );
        let json = serde_json::to_value(&group).unwrap();
        assert_eq!(json["ownerId"], "user-1");
        assert_eq!(json["name"], "g1");
        assert_eq!(json["description"], "lab");
    }
}
