//! Catalog API Tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use test_case::test_case;

use crate::common::{conductor_body, pole_body, TestApp};

#[tokio::test]
async fn test_root_banner() {
    let app = TestApp::new();

    let response = app.server.get("/api/").await;

    response.assert_status(StatusCode::OK);
    assert_eq!(
        response.json::<Value>()["message"],
        "Sistema de Orçamentação - Estruturas de Média Tensão"
    );
}

#[tokio::test]
async fn test_create_pole_assigns_id_and_timestamp() {
    let app = TestApp::new();

    let response = app.server.post("/api/poles").json(&pole_body()).await;

    response.assert_status(StatusCode::CREATED);
    let pole: Value = response.json();
    assert!(pole["id"].as_str().is_some_and(|id| !id.is_empty()));
    assert!(pole["created_at"].is_string());
    assert_eq!(pole["type"], "Concreto DT");
    assert_eq!(pole["capacity"], 1000);
}

#[tokio::test]
async fn test_list_returns_records_in_insertion_order() {
    let app = TestApp::new();

    for code in ["CA-4", "CA-2", "CA-1/0"] {
        let mut body = conductor_body();
        body["code"] = json!(code);
        app.server
            .post("/api/conductors")
            .json(&body)
            .await
            .assert_status(StatusCode::CREATED);
    }

    let conductors: Vec<Value> = app.server.get("/api/conductors").await.json();
    let codes: Vec<_> = conductors.iter().map(|c| c["code"].clone()).collect();
    assert_eq!(codes, vec![json!("CA-4"), json!("CA-2"), json!("CA-1/0")]);
}

#[tokio::test]
async fn test_collections_are_independent() {
    let app = TestApp::new();

    app.server.post("/api/poles").json(&pole_body()).await;

    let hardware: Vec<Value> = app.server.get("/api/hardware").await.json();
    assert!(hardware.is_empty());
}

#[tokio::test]
async fn test_delete_then_delete_again() {
    let app = TestApp::new();
    let created: Value = app.server.post("/api/poles").json(&pole_body()).await.json();
    let path = format!("/api/poles/{}", created["id"].as_str().unwrap());

    let response = app.server.delete(&path).await;
    response.assert_status(StatusCode::OK);
    assert_eq!(response.json::<Value>()["message"], "Poste deletado com sucesso");

    let response = app.server.delete(&path).await;
    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>()["message"], "Poste não encontrado");
}

#[test_case("/api/poles" ; "poles")]
#[test_case("/api/primary-structures" ; "primary structures")]
#[test_case("/api/secondary-structures" ; "secondary structures")]
#[test_case("/api/conductors" ; "conductors")]
#[test_case("/api/equipment" ; "equipment")]
#[test_case("/api/hardware" ; "hardware")]
#[tokio::test]
async fn test_empty_collection_lists_nothing(path: &str) {
    let app = TestApp::new();

    let response = app.server.get(path).await;

    response.assert_status(StatusCode::OK);
    assert_eq!(response.json::<Vec<Value>>(), Vec::<Value>::new());
}

#[test_case("/api/primary-structures", "Estrutura não encontrada" ; "primary structure")]
#[test_case("/api/secondary-structures", "Estrutura não encontrada" ; "secondary structure")]
#[test_case("/api/conductors", "Condutor não encontrado" ; "conductor")]
#[test_case("/api/equipment", "Equipamento não encontrado" ; "equipment")]
#[test_case("/api/hardware", "Ferragem não encontrada" ; "hardware")]
#[tokio::test]
async fn test_delete_unknown_id_is_not_found(path: &str, message: &str) {
    let app = TestApp::new();

    let response = app
        .server
        .delete(&format!("{}/00000000-0000-0000-0000-000000000000", path))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["message"], message);
    assert_eq!(body["code"], 10001);
}

#[tokio::test]
async fn test_create_equipment_and_hardware() {
    let app = TestApp::new();

    let equipment = json!({
        "category": "Chave",
        "type": "Fusível",
        "code": "CF-15",
        "description": "Chave fusível 15kV 100A",
        "unit_price": 420.0
    });
    app.server
        .post("/api/equipment")
        .json(&equipment)
        .await
        .assert_status(StatusCode::CREATED);

    let hardware = json!({
        "category": "Isolador",
        "description": "Isolador de pino polimérico 15kV",
        "code": "ISO-PINO-15",
        "unit_price": 38.9
    });
    let created: Value = app.server.post("/api/hardware").json(&hardware).await.json();
    assert_eq!(created["unit_price"], 38.9);
}

#[tokio::test]
async fn test_missing_field_is_rejected() {
    let app = TestApp::new();

    let response = app
        .server
        .post("/api/poles")
        .json(&json!({ "type": "Fibra", "height": 11.0 }))
        .await;

    assert!(response.status_code().is_client_error());
    let poles: Vec<Value> = app.server.get("/api/poles").await.json();
    assert!(poles.is_empty());
}
