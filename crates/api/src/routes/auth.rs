//! Registration and login.

use axum::{
    extract::State,
    http::{header::SET_COOKIE, StatusCode},
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use domain::models::user::{normalize_email, LoginRequest, RegisterRequest};
use domain::models::User;
use persistence::repositories::UserRepository;
use persistence::StoreError;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::AppJson;
use crate::middleware::metrics::{record_login_failed, record_user_registered};
use crate::services::cookies::AuthCookie;

const INVALID_CREDENTIALS: &str = "Invalid email or password";

/// Register a new account.
///
/// POST /auth/register
///
/// Responds 200 with an empty body; 409 when the email is taken.
pub async fn register(
    State(state): State<AppState>,
    AppJson(request): AppJson<RegisterRequest>,
) -> Result<StatusCode, ApiError> {
    request.validate()?;

    let hasher = state.hasher.clone();
    let password = request.password;
    let password_hash = tokio::task::spawn_blocking(move || hasher.hash(&password)).await??;

    let user = User {
        id: Uuid::new_v4().to_string(),
        name: request.name.trim().to_string(),
        email: normalize_email(&request.email),
        password_hash,
        created_at: Utc::now(),
    };

    let mut tx = state.pool.begin().await?;
    UserRepository::new(&mut tx)
        .add(&user)
        .await
        .map_err(|e| match e {
            StoreError::ConstraintViolation(_) => {
                ApiError::Conflict("Email already registered".into())
            }
            other => other.into(),
        })?;
    tx.commit().await?;

    record_user_registered();
    info!(user_id = %user.id, "User registered");

    Ok(StatusCode::OK)
}

/// Exchange credentials for a token delivered in the Authentication cookie.
///
/// POST /auth/login
pub async fn login(
    State(state): State<AppState>,
    AppJson(request): AppJson<LoginRequest>,
) -> Result<Response, ApiError> {
    let email = normalize_email(&request.email);

    let mut tx = state.pool.begin().await?;
    let user = UserRepository::new(&mut tx).find_by_email(&email).await?;
    tx.commit().await?;

    let Some(user) = user else {
        record_login_failed();
        return Err(ApiError::Unauthorized(INVALID_CREDENTIALS.into()));
    };

    let hasher = state.hasher.clone();
    let digest = user.password.clone();
    let password = request.password;
    let valid = tokio::task::spawn_blocking(move || hasher.verify(&digest, &password)).await??;

    if !valid {
        record_login_failed();
        info!(user_id = %user.id, "Login rejected");
        return Err(ApiError::Unauthorized(INVALID_CREDENTIALS.into()));
    }

    let issued = state.tokens.issue(&user.id)?;
    let expires_at = DateTime::<Utc>::from_timestamp(issued.expires_at, 0)
        .ok_or_else(|| ApiError::Internal("Token expiry out of range".into()))?;
    let cookie = AuthCookie::from_config(&state.config.auth).build(&issued.token, expires_at);

    info!(user_id = %user.id, jti = %issued.jti, "User logged in");

    Ok((StatusCode::OK, [(SET_COOKIE, cookie)]).into_response())
}
