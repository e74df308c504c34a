//! Identity extractor for protected handlers.

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};

use crate::app::AppState;
use crate::error::ApiError;
pub use crate::middleware::user_auth::UserAuth;
use crate::middleware::user_auth::bearer_token;

#[async_trait]
impl FromRequestParts<AppState> for UserAuth {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // Bound by require_user_auth on protected routes
        if let Some(auth) = parts.extensions.get::<UserAuth>() {
            return Ok(auth.clone());
        }

        let token = bearer_token(&parts.headers)
            .ok_or_else(|| ApiError::Unauthorized("Missing bearer token".into()))?;

        UserAuth::validate(&state.tokens, token)
    }
}
