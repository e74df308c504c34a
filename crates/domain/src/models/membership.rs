//! User-to-group membership model.

use serde::{Deserialize, Serialize};

/// Associates a user with a group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserGroupMapping {
    pub id: String,
    pub user_id: String,
    pub group_id: String,
}
