//! Integration tests for the authenticated / staff / admin guards.

mod helpers;

use http::StatusCode;

use helpers::TestApp;
use ledgerdesk_auth::TokenCodec;
use ledgerdesk_core::config::AuthConfig;
use ledgerdesk_entity::user::UserRole;

#[tokio::test]
async fn test_missing_or_malformed_header_is_unauthorized() {
    let app = TestApp::new();

    let response = app.request("GET", "/api/v1/users/me", None, None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "UNAUTHORIZED");
    assert!(response.has_bearer_challenge());

    let response = app
        .request("GET", "/api/v1/users/me", None, Some("not-a-jwt"))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_token_from_other_issuer_is_unauthorized() {
    let app = TestApp::new();
    let id = app.create_test_user("a@example.com", UserRole::Admin).await;

    let foreign = TokenCodec::new(&AuthConfig {
        secret_key: "some-other-deployment-secret-key-value".to_string(),
        ..TestApp::auth_config()
    })
    .unwrap();
    let token = foreign.issue_access(id, None).unwrap();

    let response = app
        .request("GET", "/api/v1/users", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_staff_guard() {
    let app = TestApp::new();
    let (_, admin) = app.user_with_token("admin@example.com", UserRole::Admin).await;
    let (_, staff) = app.user_with_token("staff@example.com", UserRole::Staff).await;
    let (_, client) = app.user_with_token("client@example.com", UserRole::Client).await;

    let response = app
        .request("GET", "/api/v1/staff/ping", None, Some(&admin))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["role"], "admin");

    let response = app
        .request("GET", "/api/v1/staff/ping", None, Some(&staff))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["role"], "staff");

    let response = app
        .request("GET", "/api/v1/staff/ping", None, Some(&client))
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.body["message"], "Staff access required");
    assert!(!response.has_bearer_challenge());
}

#[tokio::test]
async fn test_admin_guard() {
    let app = TestApp::new();
    let (_, admin) = app.user_with_token("admin@example.com", UserRole::Admin).await;
    let (_, staff) = app.user_with_token("staff@example.com", UserRole::Staff).await;
    let (_, client) = app.user_with_token("client@example.com", UserRole::Client).await;

    let response = app.request("GET", "/api/v1/users", None, Some(&admin)).await;
    assert_eq!(response.status, StatusCode::OK);

    for token in [&staff, &client] {
        let response = app.request("GET", "/api/v1/users", None, Some(token)).await;
        assert_eq!(response.status, StatusCode::FORBIDDEN);
        assert_eq!(response.body["message"], "Admin access required");
    }
}

#[tokio::test]
async fn test_token_for_removed_account_is_not_found() {
    let app = TestApp::new();
    let (id, token) = app.user_with_token("gone@example.com", UserRole::Client).await;
    app.users.remove(id).await;

    let response = app
        .request("GET", "/api/v1/users/me", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["message"], "User not found");
}

#[tokio::test]
async fn test_role_change_applies_to_existing_token() {
    let app = TestApp::new();
    let (_, admin) = app.user_with_token("admin@example.com", UserRole::Admin).await;
    let (client_id, client) = app.user_with_token("client@example.com", UserRole::Client).await;

    let response = app
        .request("GET", "/api/v1/staff/ping", None, Some(&client))
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    let response = app
        .request(
            "PATCH",
            &format!("/api/v1/users/{client_id}"),
            Some(serde_json::json!({ "role": "staff" })),
            Some(&admin),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app
        .request("GET", "/api/v1/staff/ping", None, Some(&client))
        .await;
    assert_eq!(response.status, StatusCode::OK);
}
