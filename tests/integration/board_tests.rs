//! Board view integration tests.
//!
//! Tests for the per-status column view

use axum::http::StatusCode;

use crate::common::{create_test_case, test_server};

#[tokio::test]
async fn test_board_view() {
    let server = test_server();

    let response = server.get("/board").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body = response.text();
    for column in ["Running", "Failed", "Pending", "Passed"] {
        assert!(body.contains(column), "missing column {}", column);
    }
}

#[tokio::test]
async fn test_board_shows_case_in_its_column() {
    let server = test_server();
    let id = create_test_case(&server, "Board case", None).await;

    server
        .post(&format!("/api/cases/{}", id))
        .json(&serde_json::json!({ "status": "running" }))
        .await;

    let response = server.get("/board").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert!(response.text().contains("Board case"));
}
