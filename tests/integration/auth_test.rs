//! Integration tests for registration, login and token refresh.

mod helpers;

use http::StatusCode;
use serde_json::json;

use helpers::{PASSWORD, TestApp};
use ledgerdesk_entity::user::UserRole;

fn registration(email: &str) -> serde_json::Value {
    json!({
        "email": email,
        "password": PASSWORD,
        "first_name": "Ada",
        "last_name": "Lovelace",
    })
}

#[tokio::test]
async fn test_health() {
    let app = TestApp::new();
    let response = app.request("GET", "/api/v1/health", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
}

#[tokio::test]
async fn test_register_returns_tokens_and_client_account() {
    let app = TestApp::new();

    let response = app
        .request("POST", "/api/v1/auth/register", Some(registration("ada@example.com")), None)
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["token_type"], "bearer");
    assert_eq!(response.body["expires_in"], 1800);
    assert!(response.body["access_token"].is_string());
    assert!(response.body["refresh_token"].is_string());
    assert_eq!(response.body["user"]["email"], "ada@example.com");
    assert_eq!(response.body["user"]["role"], "client");
    assert_eq!(response.body["user"]["is_active"], true);
    assert!(response.body["user"].get("password_hash").is_none());
}

#[tokio::test]
async fn test_register_cannot_choose_role() {
    let app = TestApp::new();
    let mut body = registration("sneaky@example.com");
    body["role"] = json!("admin");

    let response = app
        .request("POST", "/api/v1/auth/register", Some(body), None)
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["user"]["role"], "client");
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let app = TestApp::new();
    app.request("POST", "/api/v1/auth/register", Some(registration("dup@example.com")), None)
        .await;

    let response = app
        .request("POST", "/api/v1/auth/register", Some(registration("Dup@Example.com")), None)
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.body["error"], "CONFLICT");
}

#[tokio::test]
async fn test_register_invalid_input() {
    let app = TestApp::new();

    let response = app
        .request("POST", "/api/v1/auth/register", Some(registration("not-an-email")), None)
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");

    let mut short_password = registration("short@example.com");
    short_password["password"] = json!("short");
    let response = app
        .request("POST", "/api/v1/auth/register", Some(short_password), None)
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let mut long_phone = registration("phone@example.com");
    long_phone["phone"] = json!("0".repeat(21));
    let response = app
        .request("POST", "/api/v1/auth/register", Some(long_phone), None)
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_unreadable_body_gets_error_envelope() {
    let app = TestApp::new();

    let response = app
        .request_raw("POST", "/api/v1/auth/login", "{\"email\": ".to_string(), None)
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
    assert!(response.body["message"].is_string());

    let response = app
        .request(
            "POST",
            "/api/v1/auth/login",
            Some(json!({ "email": "missing-password@example.com" })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_login_success() {
    let app = TestApp::new();
    let id = app.create_test_user("staff@example.com", UserRole::Staff).await;

    let response = app
        .request(
            "POST",
            "/api/v1/auth/login",
            Some(json!({ "email": "staff@example.com", "password": PASSWORD })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["user"]["id"], id.into_inner());
    assert_eq!(response.body["user"]["role"], "staff");
}

#[tokio::test]
async fn test_login_failures_are_uniform() {
    let app = TestApp::new();
    app.create_test_user("known@example.com", UserRole::Client).await;

    let wrong_password = app
        .request(
            "POST",
            "/api/v1/auth/login",
            Some(json!({ "email": "known@example.com", "password": "wrongpassword" })),
            None,
        )
        .await;
    let unknown_email = app
        .request(
            "POST",
            "/api/v1/auth/login",
            Some(json!({ "email": "nobody@example.com", "password": PASSWORD })),
            None,
        )
        .await;

    assert_eq!(wrong_password.status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_email.status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_password.body, unknown_email.body);
    assert!(wrong_password.has_bearer_challenge());
}

#[tokio::test]
async fn test_login_inactive_account() {
    let app = TestApp::new();
    app.create_test_user("inactive@example.com", UserRole::Client).await;
    app.state
        .accounts
        .set_active_by_email("inactive@example.com", false)
        .await
        .unwrap();

    let response = app
        .request(
            "POST",
            "/api/v1/auth/login",
            Some(json!({ "email": "inactive@example.com", "password": PASSWORD })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_refresh_issues_new_pair() {
    let app = TestApp::new();
    let registered = app
        .request("POST", "/api/v1/auth/register", Some(registration("r@example.com")), None)
        .await;
    let refresh_token = registered.body["refresh_token"].as_str().unwrap();

    let response = app
        .request(
            "POST",
            "/api/v1/auth/refresh",
            Some(json!({ "refresh_token": refresh_token })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let access_token = response.body["access_token"].as_str().unwrap();

    let me = app
        .request("GET", "/api/v1/users/me", None, Some(access_token))
        .await;
    assert_eq!(me.status, StatusCode::OK);
    assert_eq!(me.body["email"], "r@example.com");
}

#[tokio::test]
async fn test_tokens_are_not_interchangeable() {
    let app = TestApp::new();
    let registered = app
        .request("POST", "/api/v1/auth/register", Some(registration("t@example.com")), None)
        .await;
    let access_token = registered.body["access_token"].as_str().unwrap();
    let refresh_token = registered.body["refresh_token"].as_str().unwrap();

    let refresh_with_access = app
        .request(
            "POST",
            "/api/v1/auth/refresh",
            Some(json!({ "refresh_token": access_token })),
            None,
        )
        .await;
    assert_eq!(refresh_with_access.status, StatusCode::UNAUTHORIZED);

    let me_with_refresh = app
        .request("GET", "/api/v1/users/me", None, Some(refresh_token))
        .await;
    assert_eq!(me_with_refresh.status, StatusCode::UNAUTHORIZED);
    assert!(me_with_refresh.has_bearer_challenge());
}

#[tokio::test]
async fn test_refresh_for_deactivated_account() {
    let app = TestApp::new();
    let registered = app
        .request("POST", "/api/v1/auth/register", Some(registration("d@example.com")), None)
        .await;
    let refresh_token = registered.body["refresh_token"].as_str().unwrap();

    app.state
        .accounts
        .set_active_by_email("d@example.com", false)
        .await
        .unwrap();

    let response = app
        .request(
            "POST",
            "/api/v1/auth/refresh",
            Some(json!({ "refresh_token": refresh_token })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}
