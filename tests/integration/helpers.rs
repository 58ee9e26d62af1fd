//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::{HeaderMap, Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use ledgerdesk_api::{AppState, build_app};
use ledgerdesk_core::config::{AppConfig, AuthConfig};
use ledgerdesk_core::types::UserId;
use ledgerdesk_database::MemoryUserRepository;
use ledgerdesk_entity::user::UserRole;
use ledgerdesk_service::Registration;

/// Password used for every account created through [`TestApp::create_test_user`].
pub const PASSWORD: &str = "password123";

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Shared state, for calling services directly
    pub state: AppState,
    /// Account store behind the router
    pub users: MemoryUserRepository,
}

impl TestApp {
    /// Create a new test application over an empty in-memory store
    pub fn new() -> Self {
        let config = AppConfig {
            auth: Self::auth_config(),
            ..AppConfig::default()
        };

        let users = MemoryUserRepository::new();
        let state =
            AppState::new(config, Arc::new(users.clone())).expect("Failed to build app state");

        Self {
            router: build_app(state.clone()),
            state,
            users,
        }
    }

    /// Auth settings used by the test app, with a cheap hash cost
    pub fn auth_config() -> AuthConfig {
        AuthConfig {
            secret_key: "integration-test-secret-key-32-bytes-long".to_string(),
            hash_memory_kib: 1024,
            hash_iterations: 1,
            ..AuthConfig::default()
        }
    }

    /// Create an account with the given role directly through the service
    pub async fn create_test_user(&self, email: &str, role: UserRole) -> UserId {
        self.state
            .accounts
            .create_account(
                Registration {
                    email: email.to_string(),
                    password: PASSWORD.to_string(),
                    first_name: "Test".to_string(),
                    last_name: "User".to_string(),
                    phone: None,
                },
                role,
            )
            .await
            .expect("Failed to create test user")
            .id
    }

    /// Log in and return the access token
    pub async fn login(&self, email: &str) -> String {
        let response = self
            .request(
                "POST",
                "/api/v1/auth/login",
                Some(serde_json::json!({ "email": email, "password": PASSWORD })),
                None,
            )
            .await;
        assert_eq!(response.status, StatusCode::OK, "login failed: {}", response.body);

        response.body["access_token"]
            .as_str()
            .expect("No access_token in login response")
            .to_string()
    }

    /// Create an account and return its id plus an access token
    pub async fn user_with_token(&self, email: &str, role: UserRole) -> (UserId, String) {
        let id = self.create_test_user(email, role).await;
        (id, self.login(email).await)
    }

    /// Make an HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();
        self.request_raw(method, path, body_str, token).await
    }

    /// Make an HTTP request with a body sent exactly as given
    pub async fn request_raw(
        &self,
        method: &str,
        path: &str,
        body_str: String,
        token: Option<&str>,
    ) -> TestResponse {
        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {token}"));
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let headers = response.headers().clone();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            headers,
            body,
        }
    }
}

/// Parsed test response
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Parsed JSON body
    pub body: Value,
}

impl TestResponse {
    /// Whether the response carries the bearer challenge header
    pub fn has_bearer_challenge(&self) -> bool {
        self.headers
            .get("www-authenticate")
            .is_some_and(|v| v == "Bearer")
    }
}
