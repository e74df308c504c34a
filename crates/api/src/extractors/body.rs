//! Body extractors whose rejections use the API error format.

use axum::extract::FromRequest;

use crate::error::ApiError;

/// `axum::Json` with [`ApiError`] rejections.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct AppJson<T>(pub T);

/// `axum::Form` with [`ApiError`] rejections.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Form), rejection(ApiError))]
pub struct AppForm<T>(pub T);

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{header::CONTENT_TYPE, Request, StatusCode},
        routing::post,
        Router,
    };
    use serde::Deserialize;
    use tower::ServiceExt;

    #[derive(Deserialize)]
    struct Payload {
        name: String,
    }

    fn app() -> Router {
        Router::new()
            .route(
                "/json",
                post(|AppJson(p): AppJson<Payload>| async move { p.name }),
            )
            .route(
                "/form",
                post(|AppForm(p): AppForm<Payload>| async move { p.name }),
            )
    }

    async fn send(uri: &str, content_type: &str, body: &'static str) -> (StatusCode, Vec<u8>) {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header(CONTENT_TYPE, content_type)
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, bytes.to_vec())
    }

    #[tokio::test]
    async fn test_json_ok() {
        let (status, body) = send("/json", "application/json", r#"{"name":"g1"}"#).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"g1");
    }

    #[tokio::test]
    async fn test_malformed_json_is_structured_400() {
        let (status, body) = send("/json", "application/json", "{not json").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "validation_error");
    }

    #[tokio::test]
    async fn test_missing_json_content_type_is_400() {
        let (status, _) = send("/json", "text/plain", r#"{"name":"g1"}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_form_ok() {
        let (status, body) =
            send("/form", "application/x-www-form-urlencoded", "name=sensor").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"sensor");
    }
}
