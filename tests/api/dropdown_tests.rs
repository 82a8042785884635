//! Dropdown Option API Tests

use axum::http::StatusCode;
use serde_json::{json, Value};

use crate::common::TestApp;

#[tokio::test]
async fn test_options_are_grouped_by_category() {
    let app = TestApp::new();

    for (category, value, label) in [
        ("pole_types", "Concreto", "Concreto"),
        ("pole_types", "Duplo T", "Duplo T"),
        ("conductor_insulation", "Protegido", "Protegido (Spacer)"),
    ] {
        app.server
            .post("/api/dropdown-options")
            .json(&json!({ "category": category, "value": value, "label": label }))
            .await
            .assert_status(StatusCode::CREATED);
    }

    let options: Vec<Value> = app.server.get("/api/dropdown-options/pole_types").await.json();
    let values: Vec<_> = options.iter().map(|o| o["value"].clone()).collect();
    assert_eq!(values, vec![json!("Concreto"), json!("Duplo T")]);

    let unknown: Vec<Value> = app.server.get("/api/dropdown-options/unknown").await.json();
    assert!(unknown.is_empty());
}

#[tokio::test]
async fn test_delete_option() {
    let app = TestApp::new();
    let created: Value = app
        .server
        .post("/api/dropdown-options")
        .json(&json!({ "category": "equipment_categories", "value": "Chave", "label": "Chave" }))
        .await
        .json();
    let path = format!("/api/dropdown-options/{}", created["id"].as_str().unwrap());

    app.server.delete(&path).await.assert_status(StatusCode::OK);
    app.server
        .delete(&path)
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_blank_label_is_rejected() {
    let app = TestApp::new();

    let response = app
        .server
        .post("/api/dropdown-options")
        .json(&json!({ "category": "pole_types", "value": "Fibra", "label": "" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}
