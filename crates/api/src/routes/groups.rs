//! Device group routes.

use axum::{extract::State, Json};
use domain::models::group::CreateGroupRequest;
use domain::models::{Group, UserGroupMapping};
use persistence::repositories::{GroupRepository, MembershipRepository};
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::{AppJson, UserAuth};

/// List groups visible to the caller.
///
/// GET /group/
pub async fn list_groups(
    State(state): State<AppState>,
    user_auth: UserAuth,
) -> Result<Json<Vec<Group>>, ApiError> {
    let mut tx = state.pool.begin().await?;
    let groups = GroupRepository::new(&mut tx)
        .list_by_user(&user_auth.user_id)
        .await?;
    tx.commit().await?;

    Ok(Json(groups.into_iter().map(Group::from).collect()))
}

/// Create a group owned by the caller.
///
/// POST /group/
///
/// The group row and the owner's mapping row are written in one transaction.
pub async fn create_group(
    State(state): State<AppState>,
    user_auth: UserAuth,
    AppJson(request): AppJson<CreateGroupRequest>,
) -> Result<Json<Group>, ApiError> {
    request.validate()?;

    let group = Group::new(
        Uuid::new_v4().to_string(),
        user_auth.user_id.clone(),
        request,
    );
    let mapping = UserGroupMapping {
        id: Uuid::new_v4().to_string(),
        user_id: user_auth.user_id.clone(),
        group_id: group.id.clone(),
    };

    let mut tx = state.pool.begin().await?;
    let created = GroupRepository::new(&mut tx).add(&group).await?;
    MembershipRepository::new(&mut tx).add(&mapping).await?;
    tx.commit().await?;

    info!(
        group_id = %created.id,
        user_id = %user_auth.user_id,
        "Group created"
    );

    Ok(Json(created.into()))
}
