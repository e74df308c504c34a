//! Bearer token authentication middleware.

use axum::{
    body::Body,
    extract::State,
    http::{header::AUTHORIZATION, HeaderMap, Request},
    middleware::Next,
    response::{IntoResponse, Response},
};
use shared::jwt::TokenIssuer;

use crate::app::AppState;
use crate::error::ApiError;
use crate::services::cookies::token_from_cookie;

/// Identity of the caller, bound after token verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserAuth {
    /// User ID from the token subject claim.
    pub user_id: String,
    /// Token ID (jti).
    pub jti: String,
}

impl UserAuth {
    /// Verifies `token` and returns the identity it carries.
    pub fn validate(tokens: &TokenIssuer, token: &str) -> Result<Self, ApiError> {
        let claims = tokens.verify(token)?;
        Ok(UserAuth {
            user_id: claims.sub,
            jti: claims.jti,
        })
    }
}

/// Finds the bearer token: the Authorization header wins over the
/// Authentication cookie.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let from_header = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty());

    from_header.or_else(|| token_from_cookie(headers))
}

/// Rejects requests without a valid token with 401 and stores [`UserAuth`]
/// in request extensions otherwise.
pub async fn require_user_auth(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    let Some(token) = bearer_token(req.headers()) else {
        return ApiError::Unauthorized("Missing bearer token".into()).into_response();
    };

    match UserAuth::validate(&state.tokens, token) {
        Ok(auth) => {
            req.extensions_mut().insert(auth);
            next.run(req).await
        }
        Err(e) => {
            tracing::debug!(error = %e, "Token validation failed");
            ApiError::Unauthorized("Invalid or expired token".into()).into_response()
        }
    }
}
