//! Budget API Tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::common::{budget_body, line_item, TestApp};

#[tokio::test]
async fn test_create_budget_computes_totals() {
    let app = TestApp::new();
    let body = budget_body(
        vec![
            line_item("pole", "DT-11-1000", 1.0, 100.00),
            line_item("conductor", "CA-4", 1.0, 250.50),
        ],
        50.00,
        20.00,
    );

    let response = app.server.post("/api/budgets").json(&body).await;

    response.assert_status(StatusCode::CREATED);
    let budget: Value = response.json();
    assert_eq!(budget["subtotal"], 350.5);
    assert_eq!(budget["total"], 420.5);
    assert_eq!(budget["bdi_percentage"], 0.0);
    assert_eq!(budget["bdi_value"], 0.0);
    assert_eq!(budget["items"].as_array().map(Vec::len), Some(2));
}

#[tokio::test]
async fn test_empty_budget_totals_are_zero() {
    let app = TestApp::new();

    let budget: Value = app
        .server
        .post("/api/budgets")
        .json(&budget_body(vec![], 0.0, 0.0))
        .await
        .json();

    assert_eq!(budget["subtotal"], 0.0);
    assert_eq!(budget["total"], 0.0);
}

#[tokio::test]
async fn test_bdi_is_applied_over_total() {
    let app = TestApp::new();
    let mut body = budget_body(vec![line_item("equipment", "CF-15", 2.0, 400.0)], 150.0, 50.0);
    body["bdi_percentage"] = json!(25.0);

    let budget: Value = app.server.post("/api/budgets").json(&body).await.json();

    assert_eq!(budget["total"], 1000.0);
    assert_eq!(budget["bdi_value"], 250.0);
}

#[tokio::test]
async fn test_plural_item_type_is_normalized() {
    let app = TestApp::new();
    let body = budget_body(
        vec![line_item("medium_voltage_structures", "CE1", 1.0, 176.53)],
        0.0,
        0.0,
    );

    let budget: Value = app.server.post("/api/budgets").json(&body).await.json();

    assert_eq!(budget["items"][0]["item_type"], "medium_voltage_structure");
}

#[tokio::test]
async fn test_inconsistent_line_total_is_rejected() {
    let app = TestApp::new();
    let mut item = line_item("pole", "DT-11-1000", 2.0, 100.0);
    item["total_price"] = json!(150.0);

    let response = app
        .server
        .post("/api/budgets")
        .json(&budget_body(vec![item], 0.0, 0.0))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(body["message"].as_str().unwrap().starts_with("items[0]"));

    let budgets: Vec<Value> = app.server.get("/api/budgets").await.json();
    assert!(budgets.is_empty());
}

#[tokio::test]
async fn test_get_and_delete_budget() {
    let app = TestApp::new();
    let created: Value = app
        .server
        .post("/api/budgets")
        .json(&budget_body(vec![line_item("hardware", "PAR-16", 4.0, 7.5)], 0.0, 0.0))
        .await
        .json();
    let path = format!("/api/budgets/{}", created["id"].as_str().unwrap());

    let fetched: Value = app.server.get(&path).await.json();
    assert_eq!(fetched, created);

    let response = app.server.delete(&path).await;
    response.assert_status(StatusCode::OK);
    assert_eq!(
        response.json::<Value>()["message"],
        "Orçamento deletado com sucesso"
    );

    let response = app.server.get(&path).await;
    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>()["message"], "Orçamento não encontrado");
}

#[tokio::test]
async fn test_delete_unknown_budget() {
    let app = TestApp::new();

    let response = app.server.delete("/api/budgets/does-not-exist").await;

    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_budgets() {
    let app = TestApp::new();
    for _ in 0..3 {
        app.server
            .post("/api/budgets")
            .json(&budget_body(vec![], 10.0, 0.0))
            .await
            .assert_status(StatusCode::CREATED);
    }

    let budgets: Vec<Value> = app.server.get("/api/budgets").await.json();
    assert_eq!(budgets.len(), 3);
}

#[tokio::test]
async fn test_empty_names_are_accepted() {
    let app = TestApp::new();
    let mut body = budget_body(vec![], 0.0, 0.0);
    body["project_name"] = json!("");
    body["client_name"] = json!("");

    let response = app.server.post("/api/budgets").json(&body).await;

    response.assert_status(StatusCode::CREATED);
    let budget: Value = response.json();
    assert_eq!(budget["project_name"], "");
    assert_eq!(budget["subtotal"], 0.0);
}

#[tokio::test]
async fn test_overflowing_totals_are_rejected() {
    let app = TestApp::new();
    let body = budget_body(
        vec![
            line_item("pole", "DT-11", 1.0, 1e308),
            line_item("pole", "DT-12", 1.0, 1e308),
        ],
        0.0,
        0.0,
    );

    let response = app.server.post("/api/budgets").json(&body).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let budgets: Vec<Value> = app.server.get("/api/budgets").await.json();
    assert!(budgets.is_empty());
}
