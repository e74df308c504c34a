//! Authentication cookie handling.
//!
//! Login answers with `Authentication="Bearer <token>"` so browser clients
//! can authenticate without managing the Authorization header themselves.

use axum::http::{header::COOKIE, HeaderMap};
use chrono::{DateTime, Utc};

use crate::config::AuthConfig;

/// Name of the cookie carrying the bearer token.
pub const AUTH_COOKIE_NAME: &str = "Authentication";

const BEARER_PREFIX: &str = "Bearer ";

/// Builds `Set-Cookie` values for issued tokens.
#[derive(Debug, Clone)]
pub struct AuthCookie {
    domain: Option<String>,
    secure: bool,
    max_age_secs: i64,
}

impl AuthCookie {
    pub fn new(domain: Option<String>, secure: bool, max_age_secs: i64) -> Self {
        Self {
            domain: domain.filter(|d| !d.is_empty()),
            secure,
            max_age_secs,
        }
    }

    pub fn from_config(config: &AuthConfig) -> Self {
        Self::new(
            config.cookie_domain.clone(),
            config.cookie_secure,
            config.token_ttl_secs,
        )
    }

    /// Set-Cookie header value for `token`, expiring at `expires_at`.
    pub fn build(&self, token: &str, expires_at: DateTime<Utc>) -> String {
        let mut cookie = format!(
            "{}=\"{}{}\"; Path=/; Max-Age={}; Expires={}",
            AUTH_COOKIE_NAME,
            BEARER_PREFIX,
            token,
            self.max_age_secs,
            expires_at.format("%a, %d %b %Y %H:%M:%S GMT"),
        );

        cookie.push_str("; HttpOnly");

        if self.secure {
            cookie.push_str("; Secure");
        }

        if let Some(domain) = &self.domain {
            cookie.push_str(&format!("; Domain={}", domain));
        }

        cookie
    }
}

/// Extract a cookie value from request headers by name.
pub fn extract_cookie<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|h| h.to_str().ok())
        .flat_map(|cookie_header| cookie_header.split(';'))
        .map(str::trim)
        .find_map(|cookie| {
            let (cookie_name, cookie_value) = cookie.split_once('=')?;
            (cookie_name == name).then_some(cookie_value)
        })
}

/// Bearer token from the Authentication cookie, if present.
///
/// Accepts both `"Bearer <t>"` and the unquoted form.
pub fn token_from_cookie(headers: &HeaderMap) -> Option<&str> {
    let value = extract_cookie(headers, AUTH_COOKIE_NAME)?;
    let value = value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value);
    value
        .strip_prefix(BEARER_PREFIX)
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;
    use chrono::TimeZone;

    fn expires() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
    }

    fn headers_with_cookie(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_build_cookie() {
        let cookie = AuthCookie::new(None, false, 172_800).build("abc.def.ghi", expires());
        assert!(cookie.starts_with("Authentication=\"Bearer abc.def.ghi\""));
        assert!(cookie.contains("Path=/"));
        assert!(cookie.contains("Max-Age=172800"));
        assert!(cookie.contains("Expires=Fri, 01 Mar 2024 12:00:00 GMT"));
        assert!(cookie.contains("HttpOnly"));
        assert!(!cookie.contains("Secure"));
        assert!(!cookie.contains("Domain"));
    }

    #[test]
    fn test_cookie_with_domain_and_secure() {
        let cookie = AuthCookie::new(Some("fleet.example.com".into()), true, 60)
            .build("t", expires());
        assert!(cookie.contains("; Secure"));
        assert!(cookie.contains("; Domain=fleet.example.com"));
    }

    #[test]
    fn test_empty_domain_is_ignored() {
        let cookie = AuthCookie::new(Some(String::new()), false, 60).build("t", expires());
        assert!(!cookie.contains("Domain"));
    }

    #[test]
    fn test_cookie_is_valid_header_value() {
        let cookie = AuthCookie::new(None, true, 60).build("a.b.c", expires());
        assert!(HeaderValue::from_str(&cookie).is_ok());
    }

    #[test]
    fn test_extract_cookie() {
        let headers = headers_with_cookie("theme=dark; session=xyz");
        assert_eq!(extract_cookie(&headers, "session"), Some("xyz"));
        assert_eq!(extract_cookie(&headers, "missing"), None);
    }

    #[test]
    fn test_token_from_quoted_cookie() {
        let headers = headers_with_cookie("theme=dark; Authentication=\"Bearer a.b.c\"");
        assert_eq!(token_from_cookie(&headers), Some("a.b.c"));
    }

    #[test]
    fn test_token_from_unquoted_cookie() {
        let headers = headers_with_cookie("Authentication=Bearer a.b.c");
        assert_eq!(token_from_cookie(&headers), Some("a.b.c"));
    }

    #[test]
    fn test_token_from_cookie_requires_bearer_prefix() {
        let headers = headers_with_cookie("Authentication=a.b.c");
        assert_eq!(token_from_cookie(&headers), None);
        assert_eq!(token_from_cookie(&HeaderMap::new()), None);
    }
}
