//! Shared test utilities for integration tests.

use axum::http::StatusCode;
use axum_test::TestServer;
use std::sync::Arc;
use whetstone::{AppState, create_app};

/// Creates a test server backed by a fresh, empty in-memory bench.
pub fn test_server() -> TestServer {
    let state = Arc::new(AppState::new());
    let app = create_app(state);
    TestServer::new(app).unwrap()
}

/// Creates a test case through the JSON API.
///
/// # Returns
/// The created case id as a string
pub async fn create_test_case(server: &TestServer, name: &str, description: Option<&str>) -> String {
    let mut body = serde_json::json!({ "name": name });
    if let Some(description) = description {
        body["description"] = serde_json::Value::String(description.to_string());
    }

    let response = server.post("/api/cases").json(&body).await;
    assert_eq!(
        response.status_code(),
        StatusCode::OK,
        "create failed: {}",
        response.text()
    );

    let json: serde_json::Value = response.json();
    json["id"].as_str().expect("id missing").to_string()
}
