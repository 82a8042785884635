//! Request DTOs
//!
//! Data structures for API request bodies that need validation before
//! reaching the services. Catalog records are deserialized straight into
//! their domain drafts.

use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::domain::{
    BudgetLineItem, ItemType, NewBudget, NewDropdownOption, NewStructureAssembly,
    StructureMaterial,
};

/// Largest accepted gap between `total_price` and `quantity × unit_price`.
pub const LINE_TOTAL_TOLERANCE: f64 = 0.005;

/// Create budget request. Names are free text and may be empty.
#[derive(Debug, Deserialize, Validate)]
#[validate(schema(function = "validate_budget_totals"))]
pub struct CreateBudgetRequest {
    pub project_name: String,

    pub client_name: String,

    #[validate(nested)]
    pub items: Vec<LineItemRequest>,

    #[serde(default)]
    pub labor_cost: f64,

    #[serde(default)]
    pub additional_services: f64,

    #[serde(default)]
    pub bdi_percentage: f64,

    #[serde(default)]
    pub notes: Option<String>,
}

/// Budget line item as sent by clients
#[derive(Debug, Deserialize, Validate)]
#[validate(schema(function = "validate_line_total"))]
pub struct LineItemRequest {
    pub item_id: String,
    pub item_type: ItemType,
    pub code: String,
    pub description: String,
    pub quantity: f64,
    pub unit_price: f64,
    pub total_price: f64,
}

/// Rejects amounts whose sums overflow `f64`; they would be stored as
/// infinities and serialized as `null`.
fn validate_budget_totals(request: &CreateBudgetRequest) -> Result<(), ValidationError> {
    let subtotal: f64 = request.items.iter().map(|item| item.total_price).sum();
    let total = subtotal + request.labor_cost + request.additional_services;
    let bdi_value = total * request.bdi_percentage / 100.0;

    if !(total.is_finite() && bdi_value.is_finite()) {
        return Err(ValidationError::new("budget_total")
            .with_message("budget totals exceed the representable range".into()));
    }
    Ok(())
}

fn validate_line_total(item: &LineItemRequest) -> Result<(), ValidationError> {
    let expected = item.quantity * item.unit_price;
    if (item.total_price - expected).abs() > LINE_TOTAL_TOLERANCE {
        return Err(ValidationError::new("line_total").with_message(
            format!(
                "total_price {} does not match quantity × unit_price ({})",
                item.total_price, expected
            )
            .into(),
        ));
    }
    Ok(())
}

impl From<LineItemRequest> for BudgetLineItem {
    fn from(item: LineItemRequest) -> Self {
        Self {
            item_id: item.item_id,
            item_type: item.item_type,
            code: item.code,
            description: item.description,
            quantity: item.quantity,
            unit_price: item.unit_price,
            total_price: item.total_price,
        }
    }
}

impl From<CreateBudgetRequest> for NewBudget {
    fn from(request: CreateBudgetRequest) -> Self {
        Self {
            project_name: request.project_name,
            client_name: request.client_name,
            items: request.items.into_iter().map(Into::into).collect(),
            labor_cost: request.labor_cost,
            additional_services: request.additional_services,
            bdi_percentage: request.bdi_percentage,
            notes: request.notes,
        }
    }
}

/// Create structure assembly request (either voltage level)
#[derive(Debug, Deserialize, Validate)]
pub struct CreateStructureAssemblyRequest {
    #[validate(length(min = 1, message = "Code is required"))]
    pub code: String,

    pub description: String,

    pub voltage_class: String,

    #[serde(default)]
    pub materials: Vec<StructureMaterial>,
}

impl From<CreateStructureAssemblyRequest> for NewStructureAssembly {
    fn from(request: CreateStructureAssemblyRequest) -> Self {
        Self {
            code: request.code,
            description: request.description,
            voltage_class: request.voltage_class,
            materials: request.materials,
        }
    }
}

/// Create dropdown option request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateDropdownOptionRequest {
    #[validate(length(min = 1, max = 64, message = "Category must be 1-64 characters"))]
    pub category: String,

    #[validate(length(min = 1, message = "Value is required"))]
    pub value: String,

    #[validate(length(min = 1, message = "Label is required"))]
    pub label: String,
}

impl From<CreateDropdownOptionRequest> for NewDropdownOption {
    fn from(request: CreateDropdownOptionRequest) -> Self {
        Self {
            category: request.category,
            value: request.value,
            label: request.label,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn line(quantity: f64, unit_price: f64, total_price: f64) -> LineItemRequest {
        LineItemRequest {
            item_id: "c-1".into(),
            item_type: ItemType::Conductor,
            code: "CA-4".into(),
            description: "Cabo de alumínio 4 AWG".into(),
            quantity,
            unit_price,
            total_price,
        }
    }

    #[test_case(2.0, 10.0, 20.0 => true ; "exact")]
    #[test_case(3.0, 0.1, 0.3 => true ; "float noise within tolerance")]
    #[test_case(1.0, 10.0, 10.004 => true ; "rounded to cents")]
    #[test_case(2.0, 10.0, 25.0 => false ; "inconsistent")]
    #[test_case(-1.0, 10.0, -10.0 => true ; "negative accepted")]
    fn test_line_total_consistency(quantity: f64, unit_price: f64, total_price: f64) -> bool {
        line(quantity, unit_price, total_price).validate().is_ok()
    }

    #[test]
    fn test_budget_request_reports_item_index() {
        let request = CreateBudgetRequest {
            project_name: "Rede".into(),
            client_name: "Cliente".into(),
            items: vec![line(1.0, 5.0, 5.0), line(2.0, 5.0, 99.0)],
            labor_cost: 0.0,
            additional_services: 0.0,
            bdi_percentage: 0.0,
            notes: None,
        };

        let err = crate::shared::validation::validation_error(request.validate().unwrap_err());
        assert!(err.to_string().contains("items[1]"));
    }

    fn budget(items: Vec<LineItemRequest>) -> CreateBudgetRequest {
        CreateBudgetRequest {
            project_name: String::new(),
            client_name: String::new(),
            items,
            labor_cost: 0.0,
            additional_services: 0.0,
            bdi_percentage: 0.0,
            notes: None,
        }
    }

    #[test]
    fn test_empty_names_are_accepted() {
        assert!(budget(vec![]).validate().is_ok());
    }

    #[test]
    fn test_overflowing_totals_are_rejected() {
        let request = budget(vec![line(1.0, 1e308, 1e308), line(1.0, 1e308, 1e308)]);

        let err = crate::shared::validation::validation_error(request.validate().unwrap_err());
        assert!(err.to_string().contains("representable range"));
    }

    #[test]
    fn test_overflowing_bdi_is_rejected() {
        let mut request = budget(vec![line(1.0, 1e308, 1e308)]);
        request.bdi_percentage = 1000.0;

        assert!(request.validate().is_err());
    }

    #[test]
    fn test_into_new_budget_keeps_items() {
        let request: CreateBudgetRequest = serde_json::from_str(
            r#"{
                "project_name": "Rede",
                "client_name": "Cliente",
                "items": [{
                    "item_id": "p-1", "item_type": "poles", "code": "DT-11",
                    "description": "Poste", "quantity": 2, "unit_price": 100.0,
                    "total_price": 200.0
                }],
                "bdi_percentage": 20
            }"#,
        )
        .unwrap();

        let draft = NewBudget::from(request);
        assert_eq!(draft.items.len(), 1);
        assert_eq!(draft.items[0].item_type, ItemType::Pole);
        assert_eq!(draft.bdi_percentage, 20.0);
        assert_eq!(draft.labor_cost, 0.0);
    }
}
