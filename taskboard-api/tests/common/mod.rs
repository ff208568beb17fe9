/// Common test utilities for integration tests
///
/// This module provides shared infrastructure for integration tests:
/// - Test database setup (migrations applied on connect)
/// - Router construction with real application state
/// - Request helpers driving the router without a TCP listener
///
/// Tests are skipped when DATABASE_URL is not set, so the unit test suite
/// stays green on machines without a local PostgreSQL.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use sqlx::PgPool;
use taskboard_api::app::{build_router, AppState};
use taskboard_api::config::Config;
use tower::ServiceExt as _;

/// Test context containing the database pool and the app under test
pub struct TestContext {
    pub db: PgPool,
    pub app: Router,
}

impl TestContext {
    /// Creates a new test context, or None when DATABASE_URL is not set
    pub async fn new() -> Option<Self> {
        let config = match Config::from_env() {
            Ok(config) => config,
            Err(_) => {
                eprintln!("DATABASE_URL not set; skipping integration test");
                return None;
            }
        };

        let db = PgPool::connect(&config.database.url)
            .await
            .expect("connect to test database");

        // Path relative to this crate's Cargo.toml
        sqlx::migrate!("../migrations")
            .run(&db)
            .await
            .expect("run migrations");

        let state = AppState::new(db.clone(), config);
        let app = build_router(state);

        Some(TestContext { db, app })
    }

    /// Sends a request to the app and returns (status, parsed body)
    ///
    /// The body parses as Null when the response isn't JSON (axum's Json
    /// rejection replies with plain text).
    pub async fn request(
        &self,
        method: &str,
        uri: &str,
        body: Option<serde_json::Value>,
    ) -> (StatusCode, serde_json::Value) {
        let mut builder = Request::builder().method(method).uri(uri);

        let body = match body {
            Some(json) => {
                builder = builder.header("content-type", "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        let request = builder.body(body).unwrap();
        let response = self.app.clone().oneshot(request).await.unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);

        (status, json)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, serde_json::Value) {
        self.request("GET", uri, None).await
    }

    pub async fn post(
        &self,
        uri: &str,
        body: serde_json::Value,
    ) -> (StatusCode, serde_json::Value) {
        self.request("POST", uri, Some(body)).await
    }

    pub async fn put(&self, uri: &str) -> (StatusCode, serde_json::Value) {
        self.request("PUT", uri, None).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, serde_json::Value) {
        self.request("DELETE", uri, None).await
    }

    /// Creates a user through the API and returns its id
    pub async fn create_user(&self, name: &str) -> i64 {
        let (status, body) = self.post("/users", serde_json::json!({ "name": name })).await;
        assert_eq!(status, StatusCode::OK, "create_user failed: {}", body);
        body["id"].as_i64().expect("user id")
    }

    /// Creates a task through the API and returns its id
    pub async fn create_task(&self, title: &str) -> i64 {
        let (status, body) = self
            .post("/tasks", serde_json::json!({ "title": title }))
            .await;
        assert_eq!(status, StatusCode::OK, "create_task failed: {}", body);
        body["id"].as_i64().expect("task id")
    }
}
