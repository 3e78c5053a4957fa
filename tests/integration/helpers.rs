//! Shared test helpers for integration tests.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use tasklist_core::config::{AppConfig, StoreBackend};
use tasklist_database::Stores;

/// Secret used by every test app.
pub const TEST_SECRET: &str = "integration-test-secret";

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Application config
    pub config: AppConfig,
}

impl TestApp {
    /// Create a new test application over a fresh in-memory store
    pub fn new() -> Self {
        let mut config = AppConfig::default();
        config.store.backend = StoreBackend::Memory;
        config.auth.jwt_secret = TEST_SECRET.to_string();

        let state = tasklist_api::AppState::new(config.clone(), Stores::memory());
        let router = tasklist_api::build_app(state, &config.server.cors);

        Self { router, config }
    }

    /// Sign up a user named `name` and return `(token, user_id)`
    pub async fn sign_up(&self, name: &str) -> (String, String) {
        let response = self
            .request(
                "POST",
                "/api/auth/sign-up",
                Some(serde_json::json!({
                    "name": name,
                    "email": format!("{}@example.com", name.to_lowercase()),
                    "password": "password123",
                })),
                None,
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Sign-up failed: {:?}",
            response.body
        );

        let token = response.body["data"]["token"]
            .as_str()
            .expect("No token in sign-up response")
            .to_string();
        let user_id = response.body["data"]["user"]["id"]
            .as_str()
            .expect("No user id in sign-up response")
            .to_string();
        (token, user_id)
    }

    /// Create a task list and return its ID
    pub async fn create_task_list(&self, token: &str, title: &str) -> String {
        let response = self
            .request(
                "POST",
                "/api/task-lists",
                Some(serde_json::json!({ "title": title })),
                Some(token),
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Create failed: {:?}",
            response.body
        );

        response.body["data"]["id"]
            .as_str()
            .expect("No id in task list response")
            .to_string()
    }

    /// Make an HTTP request with an optional bearer token
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let authorization = token.map(|t| format!("Bearer {t}"));
        self.request_with_header(method, path, body, authorization.as_deref())
            .await
    }

    /// Make an HTTP request with a raw `Authorization` header value
    pub async fn request_with_header(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        authorization: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(value) = authorization {
            req = req.header("Authorization", value);
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
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}
