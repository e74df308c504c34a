//! Profile of the authenticated user.

use axum::{extract::State, Json};
use domain::models::user::{apply_profile_update, UpdateProfileRequest, UserProfile};
use domain::models::User;
use persistence::repositories::UserRepository;
use persistence::StoreError;
use tracing::info;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::{AppJson, UserAuth};

/// GET /user/
pub async fn get_profile(
    State(state): State<AppState>,
    user_auth: UserAuth,
) -> Result<Json<UserProfile>, ApiError> {
    let mut tx = state.pool.begin().await?;
    let user = UserRepository::new(&mut tx)
        .find_by_id(&user_auth.user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".into()))?;
    tx.commit().await?;

    Ok(Json(User::from(user).into()))
}

/// Update name and/or email.
///
/// PUT /user/
pub async fn update_profile(
    State(state): State<AppState>,
    user_auth: UserAuth,
    AppJson(request): AppJson<UpdateProfileRequest>,
) -> Result<Json<UserProfile>, ApiError> {
    request.validate()?;

    let mut tx = state.pool.begin().await?;
    let current = UserRepository::new(&mut tx)
        .find_by_id(&user_auth.user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".into()))?;

    let updated = apply_profile_update(current.into(), request);
    UserRepository::new(&mut tx)
        .update(&updated)
        .await
        .map_err(|e| match e {
            StoreError::ConstraintViolation(_) => {
                ApiError::Conflict("Email already registered".into())
            }
            other => other.into(),
        })?;
    tx.commit().await?;

    info!(user_id = %updated.id, "Profile updated");

    Ok(Json(updated.into()))
}
