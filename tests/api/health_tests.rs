//! Health Check API Tests

use axum::http::StatusCode;
use serde_json::Value;

use crate::common::{pole_body, TestApp};

#[tokio::test]
async fn test_health_check_returns_ok() {
    let app = TestApp::new();

    let response = app.server.get("/health").await;

    response.assert_status(StatusCode::OK);
    assert_eq!(response.json::<Value>()["status"], "healthy");
}

#[tokio::test]
async fn test_liveness() {
    let app = TestApp::new();

    let response = app.server.get("/health/live").await;

    response.assert_status(StatusCode::OK);
    assert_eq!(response.json::<Value>()["status"], "alive");
}

#[tokio::test]
async fn test_readiness_with_memory_backend() {
    let app = TestApp::new();

    let response = app.server.get("/health/ready").await;

    response.assert_status(StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["checks"]["storage"]["backend"], "memory");
}

#[tokio::test]
async fn test_metrics_use_route_templates() {
    let app = TestApp::new();
    let created: Value = app.server.post("/api/poles").json(&pole_body()).await.json();
    app.server
        .delete(&format!("/api/poles/{}", created["id"].as_str().unwrap()))
        .await;

    let response = app.server.get("/metrics").await;

    response.assert_status(StatusCode::OK);
    let text = response.text();
    assert!(text.contains(r#"path="/api/poles/{id}""#));
    assert!(text.contains("distribution_budget_catalog_items_created_total"));
}
