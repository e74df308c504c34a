//! Integration tests for the profile endpoints.

mod common;

use axum::http::{Method, StatusCode};
use common::{
    create_authenticated_user, get_request_with_auth, get_request_with_cookie,
    json_request_with_auth, login, parse_response_body, send, setup, unique_test_email,
};
use serde_json::json;

#[tokio::test]
async fn test_get_profile() {
    let (app, _pool) = setup().await;
    let auth = create_authenticated_user(&app).await;

    let response = send(&app, get_request_with_auth("/user/", &auth.token)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let profile = parse_response_body(response).await;
    assert_eq!(profile["id"], auth.user_id.as_str());
    assert_eq!(profile["email"], auth.email.as_str());
    assert!(profile.get("password").is_none());
    assert!(profile.get("passwordHash").is_none());
}

#[tokio::test]
async fn test_get_profile_with_cookie() {
    let (app, _pool) = setup().await;
    let auth = create_authenticated_user(&app).await;

    let response = send(&app, get_request_with_cookie("/user", &auth.cookie)).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_update_profile_name() {
    let (app, _pool) = setup().await;
    let auth = create_authenticated_user(&app).await;

    let response = send(
        &app,
        json_request_with_auth(Method::PUT, "/user/", json!({ "name": "Renamed" }), &auth.token),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let profile = parse_response_body(response).await;
    assert_eq!(profile["name"], "Renamed");
    assert_eq!(profile["email"], auth.email.as_str());
}

#[tokio::test]
async fn test_update_profile_email_allows_new_login() {
    let (app, _pool) = setup().await;
    let auth = create_authenticated_user(&app).await;
    let new_email = unique_test_email();

    let response = send(
        &app,
        json_request_with_auth(Method::PUT, "/user/", json!({ "email": new_email }), &auth.token),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = login(&app, &new_email, "SecureP@ss123!").await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_update_profile_taken_email_conflict() {
    let (app, _pool) = setup().await;
    let alice = create_authenticated_user(&app).await;
    let bob = create_authenticated_user(&app).await;

    let response = send(
        &app,
        json_request_with_auth(Method::PUT, "/user/", json!({ "email": alice.email }), &bob.token),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_update_profile_invalid_email() {
    let (app, _pool) = setup().await;
    let auth = create_authenticated_user(&app).await;

    let response = send(
        &app,
        json_request_with_auth(Method::PUT, "/user/", json!({ "email": "nope" }), &auth.token),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
