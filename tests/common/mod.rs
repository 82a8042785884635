//! Common Test Utilities
//!
//! Shared helpers, fixtures, and test infrastructure.

use axum_test::TestServer;
use serde_json::{json, Value};

use distribution_budget::presentation::http::create_router;
use distribution_budget::startup::AppState;

/// Test application backed by the in-memory store
pub struct TestApp {
    pub server: TestServer,
}

impl TestApp {
    /// Create a new test application with an empty store
    pub fn new() -> Self {
        let router = create_router(AppState::in_memory());
        Self {
            server: TestServer::new(router).expect("failed to start test server"),
        }
    }
}

pub fn pole_body() -> Value {
    json!({
        "type": "Concreto DT",
        "height": 11.0,
        "capacity": 1000,
        "code": "DT-11-1000",
        "unit_price": 1850.0
    })
}

pub fn conductor_body() -> Value {
    json!({
        "type": "Alumínio",
        "insulation": "Nu",
        "section": "4 AWG",
        "code": "CA-4",
        "configuration": "CA",
        "unit_price": 3.2
    })
}

/// Budget line item with a consistent `total_price`
pub fn line_item(item_type: &str, code: &str, quantity: f64, unit_price: f64) -> Value {
    json!({
        "item_id": format!("{}-id", code),
        "item_type": item_type,
        "code": code,
        "description": format!("Item {}", code),
        "quantity": quantity,
        "unit_price": unit_price,
        "total_price": quantity * unit_price
    })
}

pub fn budget_body(items: Vec<Value>, labor_cost: f64, additional_services: f64) -> Value {
    json!({
        "project_name": "Extensão de Rede Rural",
        "client_name": "Cooperativa de Eletrificação",
        "items": items,
        "labor_cost": labor_cost,
        "additional_services": additional_services
    })
}
