//! Bearer token issuance and verification (HS256).
//!
//! Tokens are signed with a shared secret and carry the user id as subject,
//! plus issued-at and expiry claims that are checked on every verification.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Error type for token operations.
#[derive(Debug, Error)]
pub enum JwtError {
    #[error("Failed to encode token: {0}")]
    EncodingError(String),

    #[error("Token has expired")]
    TokenExpired,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Invalid signing secret")]
    InvalidSecret,
}

/// Claims embedded in every issued token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Unique token identifier
    pub jti: String,
}

/// A freshly signed token together with its identifying claims.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub jti: String,
    pub expires_at: i64,
}

/// Default token lifetime: 48 hours, matching the login cookie.
pub const DEFAULT_TOKEN_TTL_SECS: i64 = 48 * 60 * 60;

/// Default leeway in seconds for clock skew tolerance.
pub const DEFAULT_LEEWAY_SECS: u64 = 30;

/// Signs and verifies bearer tokens with a shared HMAC secret.
#[derive(Clone)]
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl_secs: i64,
    leeway_secs: u64,
}

impl std::fmt::Debug for TokenIssuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenIssuer")
            .field("ttl_secs", &self.ttl_secs)
            .field("leeway_secs", &self.leeway_secs)
            .field("secret", &"[REDACTED]")
            .finish()
    }
}

impl TokenIssuer {
    /// Creates an issuer from a shared secret.
    ///
    /// # Arguments
    /// * `secret` - HMAC key; must not be empty
    /// * `ttl_secs` - lifetime of issued tokens
    /// * `leeway_secs` - clock skew tolerated when checking `exp`
    pub fn new(secret: &str, ttl_secs: i64, leeway_secs: u64) -> Result<Self, JwtError> {
        if secret.is_empty() {
            return Err(JwtError::InvalidSecret);
        }

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            ttl_secs,
            leeway_secs,
        })
    }

    /// Issues a token whose subject is `user_id`.
    pub fn issue(&self, user_id: &str) -> Result<IssuedToken, JwtError> {
        let now = Utc::now();
        let jti = Uuid::new_v4().to_string();
        let exp = (now + Duration::seconds(self.ttl_secs)).timestamp();

        let claims = Claims {
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp,
            jti: jti.clone(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| JwtError::EncodingError(e.to_string()))?;

        Ok(IssuedToken {
            token,
            jti,
            expires_at: exp,
        })
    }

    /// Verifies signature, structure and expiry, returning the claims.
    pub fn verify(&self, token: &str) -> Result<Claims, JwtError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = self.leeway_secs;
        validation.set_required_spec_claims(&["exp", "sub"]);

        let data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => JwtError::TokenExpired,
                _ => JwtError::InvalidToken,
            }
        })?;

        if data.claims.sub.is_empty() {
            return Err(JwtError::InvalidToken);
        }

        Ok(data.claims)
    }
}
