//! Case view integration tests.
//!
//! Tests for the HTML surface: bench page, detail page, and the form
//! endpoints behind the card buttons.

use axum::http::StatusCode;

use crate::common::{create_test_case, test_server};

#[tokio::test]
async fn test_landing_page() {
    let server = test_server();

    let response = server.get("/").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert!(response.text().contains("<!DOCTYPE html>"));
}

#[tokio::test]
async fn test_landing_shows_empty_state() {
    let server = test_server();

    let response = server.get("/").await;

    assert!(response.text().contains("No tests yet"));
}

#[tokio::test]
async fn test_landing_lists_created_case() {
    let server = test_server();
    create_test_case(&server, "Smoke test: signup", None).await;

    let response = server.get("/").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert!(response.text().contains("Smoke test: signup"));
    assert!(!response.text().contains("No tests yet"));
}

#[tokio::test]
async fn test_case_detail() {
    let server = test_server();
    let id = create_test_case(&server, "Detail case", Some("- step one\n- step two")).await;

    let response = server.get(&format!("/cases/{}", id)).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert!(response.text().contains("<!DOCTYPE html>"));
    assert!(response.text().contains("Detail case"));
    // Acceptance criteria are rendered as markdown
    assert!(response.text().contains("<li>step one</li>"));
}

#[tokio::test]
async fn test_case_detail_not_found() {
    let server = test_server();

    let response = server.get("/cases/nonexistent-id").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_form_add_redirects_to_bench() {
    let server = test_server();

    let response = server
        .post("/cases")
        .form(&[("name", "Form case"), ("description", "typed in the form")])
        .await;

    assert_eq!(response.status_code(), StatusCode::SEE_OTHER);

    let landing = server.get("/").await;
    assert!(landing.text().contains("Form case"));
}

#[tokio::test]
async fn test_form_add_with_empty_name_is_a_noop() {
    let server = test_server();

    let response = server
        .post("/cases")
        .form(&[("name", "   "), ("description", "orphan criteria")])
        .await;

    assert_eq!(response.status_code(), StatusCode::SEE_OTHER);

    let landing = server.get("/").await;
    assert!(landing.text().contains("No tests yet"));
}

#[tokio::test]
async fn test_form_status_change() {
    let server = test_server();
    let id = create_test_case(&server, "Status case", None).await;

    let response = server
        .post(&format!("/cases/{}/status", id))
        .form(&[("status", "passed")])
        .await;

    assert_eq!(response.status_code(), StatusCode::SEE_OTHER);

    let cases: serde_json::Value = server.get("/api/cases").await.json();
    assert_eq!(cases[0]["status"], "passed");
}

#[tokio::test]
async fn test_form_status_change_unknown_id_still_redirects() {
    let server = test_server();

    let response = server
        .post("/cases/nonexistent-id/status")
        .form(&[("status", "running")])
        .await;

    assert_eq!(response.status_code(), StatusCode::SEE_OTHER);
}

#[tokio::test]
async fn test_form_remove() {
    let server = test_server();
    let id = create_test_case(&server, "Doomed case", None).await;

    let response = server.post(&format!("/cases/{}/remove", id)).await;

    assert_eq!(response.status_code(), StatusCode::SEE_OTHER);

    let landing = server.get("/").await;
    assert!(landing.text().contains("No tests yet"));
}
