//! Integration tests for self-service profile and admin account management.

mod helpers;

use http::StatusCode;
use serde_json::json;

use helpers::{PASSWORD, TestApp};
use ledgerdesk_entity::user::UserRole;

#[tokio::test]
async fn test_me_returns_current_account() {
    let app = TestApp::new();
    let (id, token) = app.user_with_token("me@example.com", UserRole::Client).await;

    let response = app
        .request("GET", "/api/v1/users/me", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["id"], id.into_inner());
    assert_eq!(response.body["email"], "me@example.com");
    assert!(response.body.get("password_hash").is_none());
}

#[tokio::test]
async fn test_update_own_profile() {
    let app = TestApp::new();
    let (_, token) = app.user_with_token("p@example.com", UserRole::Client).await;

    let response = app
        .request(
            "PATCH",
            "/api/v1/users/me",
            Some(json!({ "first_name": "Grace", "phone": "+1 555 0100" })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["first_name"], "Grace");
    assert_eq!(response.body["last_name"], "User");
    assert_eq!(response.body["phone"], "+1 555 0100");

    let response = app
        .request(
            "PATCH",
            "/api/v1/users/me",
            Some(json!({ "last_name": "" })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_profile_update_cannot_change_role() {
    let app = TestApp::new();
    let (_, token) = app.user_with_token("c@example.com", UserRole::Client).await;

    let response = app
        .request(
            "PATCH",
            "/api/v1/users/me",
            Some(json!({ "role": "admin", "is_active": true })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["role"], "client");
}

#[tokio::test]
async fn test_admin_get_user() {
    let app = TestApp::new();
    let (_, admin) = app.user_with_token("admin@example.com", UserRole::Admin).await;
    let client_id = app.create_test_user("client@example.com", UserRole::Client).await;

    let response = app
        .request("GET", &format!("/api/v1/users/{client_id}"), None, Some(&admin))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["email"], "client@example.com");

    let response = app
        .request("GET", "/api/v1/users/9999", None, Some(&admin))
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = app
        .request("GET", "/api/v1/users/abc", None, Some(&admin))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_admin_list_is_paginated() {
    let app = TestApp::new();
    let (_, admin) = app.user_with_token("admin@example.com", UserRole::Admin).await;
    for i in 0..4 {
        app.create_test_user(&format!("u{i}@example.com"), UserRole::Client)
            .await;
    }

    let response = app
        .request("GET", "/api/v1/users?page=1&per_page=2", None, Some(&admin))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["total"], 5);
    assert_eq!(response.body["per_page"], 2);
    assert_eq!(response.body["total_pages"], 3);
    assert_eq!(response.body["items"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_deactivation_revokes_access_immediately() {
    let app = TestApp::new();
    let (_, admin) = app.user_with_token("admin@example.com", UserRole::Admin).await;

    let registered = app
        .request(
            "POST",
            "/api/v1/auth/register",
            Some(json!({
                "email": "client@example.com",
                "password": PASSWORD,
                "first_name": "Cli",
                "last_name": "Ent",
            })),
            None,
        )
        .await;
    assert_eq!(registered.status, StatusCode::CREATED);
    let token = registered.body["access_token"].as_str().unwrap().to_string();
    let id = registered.body["user"]["id"].as_i64().unwrap();

    let me = app
        .request("GET", "/api/v1/users/me", None, Some(&token))
        .await;
    assert_eq!(me.status, StatusCode::OK);

    let response = app
        .request(
            "PATCH",
            &format!("/api/v1/users/{id}"),
            Some(json!({ "is_active": false })),
            Some(&admin),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["is_active"], false);

    let me = app
        .request("GET", "/api/v1/users/me", None, Some(&token))
        .await;
    assert_eq!(me.status, StatusCode::UNAUTHORIZED);
    assert!(me.has_bearer_challenge());
}

#[tokio::test]
async fn test_admin_cannot_deactivate_self() {
    let app = TestApp::new();
    let (admin_id, admin) = app.user_with_token("admin@example.com", UserRole::Admin).await;

    let response = app
        .request(
            "PATCH",
            &format!("/api/v1/users/{admin_id}"),
            Some(json!({ "is_active": false })),
            Some(&admin),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let me = app
        .request("GET", "/api/v1/users/me", None, Some(&admin))
        .await;
    assert_eq!(me.status, StatusCode::OK);
}

#[tokio::test]
async fn test_admin_update_rejects_unknown_role() {
    let app = TestApp::new();
    let (_, admin) = app.user_with_token("admin@example.com", UserRole::Admin).await;
    let client_id = app.create_test_user("client@example.com", UserRole::Client).await;

    let response = app
        .request(
            "PATCH",
            &format!("/api/v1/users/{client_id}"),
            Some(json!({ "role": "owner" })),
            Some(&admin),
        )
        .await;
    assert!(response.status.is_client_error());
}
