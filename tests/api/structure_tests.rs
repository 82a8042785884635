//! Structure Assembly API Tests

use axum::http::StatusCode;
use serde_json::{json, Value};

use crate::common::TestApp;

fn ce1() -> Value {
    json!({
        "code": "CE1",
        "description": "Estrutura CE1 - tangente",
        "voltage_class": "13.8kV",
        "materials": [
            { "code": "ISO-PINO", "description": "Isolador de pino", "unit": "pç", "quantity": 2, "unit_price": 20.16 },
            { "code": "CRUZ-2M", "description": "Cruzeta 2m", "unit": "pç", "quantity": 1, "unit_price": 62.12 }
        ]
    })
}

#[tokio::test]
async fn test_create_medium_voltage_structure() {
    let app = TestApp::new();

    let response = app
        .server
        .post("/api/medium-voltage-structures")
        .json(&ce1())
        .await;

    response.assert_status(StatusCode::CREATED);
    let created: Value = response.json();
    let total = created["total_price"].as_f64().unwrap();
    assert!((total - (2.0 * 20.16 + 62.12)).abs() < 1e-9);
    assert_eq!(created["voltage_level"], "medium");
}

#[tokio::test]
async fn test_levels_are_listed_separately() {
    let app = TestApp::new();
    app.server
        .post("/api/medium-voltage-structures")
        .json(&ce1())
        .await
        .assert_status(StatusCode::CREATED);

    let medium: Vec<Value> = app.server.get("/api/medium-voltage-structures").await.json();
    let low: Vec<Value> = app.server.get("/api/low-voltage-structures").await.json();
    assert_eq!(medium.len(), 1);
    assert!(low.is_empty());
}

#[tokio::test]
async fn test_delete_structure() {
    let app = TestApp::new();
    let created: Value = app
        .server
        .post("/api/low-voltage-structures")
        .json(&json!({
            "code": "S1",
            "description": "Estrutura secundária 1 condutor",
            "voltage_class": "220V/380V",
            "materials": []
        }))
        .await
        .json();
    let id = created["id"].as_str().unwrap();

    let response = app
        .server
        .delete(&format!("/api/medium-voltage-structures/{}", id))
        .await;
    response.assert_status(StatusCode::NOT_FOUND);

    let response = app
        .server
        .delete(&format!("/api/low-voltage-structures/{}", id))
        .await;
    response.assert_status(StatusCode::OK);
    assert_eq!(
        response.json::<Value>()["message"],
        "Estrutura deletada com sucesso"
    );
}

#[tokio::test]
async fn test_empty_code_is_rejected() {
    let app = TestApp::new();
    let mut body = ce1();
    body["code"] = json!("");

    let response = app
        .server
        .post("/api/medium-voltage-structures")
        .json(&body)
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}
