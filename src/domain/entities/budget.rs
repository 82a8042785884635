//! Budget (quotation) entity and repository trait.
//!
//! Maps to the `budgets` table. Line items are embedded in the budget
//! record (JSONB column) and have no lifecycle of their own.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::ItemType;
use crate::shared::error::AppError;

/// A quantity of a catalog item attached to a budget.
///
/// `code`, `description` and `unit_price` are a snapshot taken when the
/// item was added, so later catalog changes do not alter the quotation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetLineItem {
    /// Id of the referenced catalog record
    pub item_id: String,

    pub item_type: ItemType,

    pub code: String,

    pub description: String,

    pub quantity: f64,

    pub unit_price: f64,

    /// `quantity × unit_price`, materialized by the caller
    pub total_price: f64,
}

/// A quotation composed of line items plus labor and service costs.
///
/// `subtotal`, `total` and `bdi_value` are computed once at creation and
/// persisted; they are never recomputed on read.
///
/// Maps to the `budgets` table:
/// - id: TEXT PRIMARY KEY (UUID v4)
/// - project_name / client_name: TEXT NOT NULL
/// - items: JSONB NOT NULL
/// - labor_cost / additional_services: DOUBLE PRECISION NOT NULL
/// - subtotal / total: DOUBLE PRECISION NOT NULL
/// - bdi_percentage / bdi_value: DOUBLE PRECISION NOT NULL DEFAULT 0
/// - notes: TEXT NULL
/// - created_at: TIMESTAMPTZ NOT NULL
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    pub id: String,

    pub project_name: String,

    pub client_name: String,

    pub items: Vec<BudgetLineItem>,

    pub labor_cost: f64,

    pub additional_services: f64,

    /// Sum of every line item's `total_price`
    pub subtotal: f64,

    /// `subtotal + labor_cost + additional_services`
    pub total: f64,

    /// Indirect cost markup percentage. Absent on records created before
    /// the field existed.
    #[serde(default)]
    pub bdi_percentage: f64,

    /// Markup applied to `total` at `bdi_percentage`.
    #[serde(default)]
    pub bdi_value: f64,

    pub notes: Option<String>,

    pub created_at: DateTime<Utc>,
}

/// Fields supplied when creating a budget.
#[derive(Debug, Clone, Deserialize)]
pub struct NewBudget {
    pub project_name: String,
    pub client_name: String,
    pub items: Vec<BudgetLineItem>,
    #[serde(default)]
    pub labor_cost: f64,
    #[serde(default)]
    pub additional_services: f64,
    #[serde(default)]
    pub bdi_percentage: f64,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Repository trait for Budget data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BudgetRepository: Send + Sync {
    /// Persist a new budget.
    async fn create(&self, budget: &Budget) -> Result<Budget, AppError>;

    /// List budgets in insertion order, at most `limit` of them.
    async fn list(&self, limit: i64) -> Result<Vec<Budget>, AppError>;

    /// Find a budget by id.
    async fn find_by_id(&self, id: &str) -> Result<Option<Budget>, AppError>;

    /// Delete a budget by id. Returns `false` when nothing was removed.
    async fn delete(&self, id: &str) -> Result<bool, AppError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_budget_without_bdi_fields_defaults_to_zero() {
        let raw = r#"{
            "id": "b-1",
            "project_name": "Extensão de rede",
            "client_name": "Prefeitura",
            "items": [],
            "labor_cost": 100.0,
            "additional_services": 0.0,
            "subtotal": 0.0,
            "total": 100.0,
            "notes": null,
            "created_at": "2024-05-01T12:00:00+00:00"
        }"#;

        let budget: Budget = serde_json::from_str(raw).unwrap();
        assert_eq!(budget.bdi_percentage, 0.0);
        assert_eq!(budget.bdi_value, 0.0);
    }

    #[test]
    fn test_new_budget_optional_costs_default() {
        let raw = r#"{"project_name": "P", "client_name": "C", "items": []}"#;
        let draft: NewBudget = serde_json::from_str(raw).unwrap();
        assert_eq!(draft.labor_cost, 0.0);
        assert_eq!(draft.additional_services, 0.0);
        assert_eq!(draft.bdi_percentage, 0.0);
        assert!(draft.notes.is_none());
    }
}
