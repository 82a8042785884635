//! Budget Service
//!
//! Creates quotations from line items, deriving subtotal, total and BDI
//! through the budget aggregator. Persisted totals are never recomputed.

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::services::budget_aggregator;
use crate::domain::{created_now, Budget, BudgetRepository, NewBudget, LIST_LIMIT};
use crate::infrastructure::metrics;
use crate::shared::error::AppError;

const NOT_FOUND_MESSAGE: &str = "Orçamento não encontrado";
pub const DELETED_MESSAGE: &str = "Orçamento deletado com sucesso";

/// Budget service trait
#[async_trait]
pub trait BudgetService: Send + Sync {
    /// Create a budget, computing its derived amounts.
    async fn create(&self, draft: NewBudget) -> Result<Budget, BudgetError>;

    /// List budgets in insertion order, capped at `LIST_LIMIT`.
    async fn list(&self) -> Result<Vec<Budget>, BudgetError>;

    /// Get a budget by id.
    async fn get(&self, id: &str) -> Result<Budget, BudgetError>;

    /// Delete a budget by id.
    async fn delete(&self, id: &str) -> Result<(), BudgetError>;
}

/// Budget service errors
#[derive(Debug, thiserror::Error)]
pub enum BudgetError {
    #[error("Orçamento não encontrado")]
    NotFound,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<BudgetError> for AppError {
    fn from(e: BudgetError) -> Self {
        match e {
            BudgetError::NotFound => AppError::NotFound(NOT_FOUND_MESSAGE.into()),
            BudgetError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

/// BudgetService implementation
pub struct BudgetServiceImpl {
    repo: Arc<dyn BudgetRepository>,
}

impl BudgetServiceImpl {
    pub fn new(repo: Arc<dyn BudgetRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl BudgetService for BudgetServiceImpl {
    async fn create(&self, draft: NewBudget) -> Result<Budget, BudgetError> {
        let totals = budget_aggregator::compute_totals(
            &draft.items,
            draft.labor_cost,
            draft.additional_services,
        );
        let bdi_value = budget_aggregator::bdi_value(totals.total, draft.bdi_percentage);

        let budget = Budget {
            id: Uuid::new_v4().to_string(),
            project_name: draft.project_name,
            client_name: draft.client_name,
            items: draft.items,
            labor_cost: draft.labor_cost,
            additional_services: draft.additional_services,
            subtotal: totals.subtotal,
            total: totals.total,
            bdi_percentage: draft.bdi_percentage,
            bdi_value,
            notes: draft.notes,
            created_at: created_now(),
        };

        let created = self
            .repo
            .create(&budget)
            .await
            .map_err(|e| BudgetError::Internal(e.to_string()))?;

        metrics::record_budget_created(created.total);
        tracing::info!(
            budget_id = %created.id,
            items = created.items.len(),
            subtotal = created.subtotal,
            total = created.total,
            bdi_value = created.bdi_value,
            "Budget created"
        );

        Ok(created)
    }

    async fn list(&self) -> Result<Vec<Budget>, BudgetError> {
        self.repo
            .list(LIST_LIMIT)
            .await
            .map_err(|e| BudgetError::Internal(e.to_string()))
    }

    async fn get(&self, id: &str) -> Result<Budget, BudgetError> {
        self.repo
            .find_by_id(id)
            .await
            .map_err(|e| BudgetError::Internal(e.to_string()))?
            .ok_or(BudgetError::NotFound)
    }

    async fn delete(&self, id: &str) -> Result<(), BudgetError> {
        let deleted = self
            .repo
            .delete(id)
            .await
            .map_err(|e| BudgetError::Internal(e.to_string()))?;

        if !deleted {
            return Err(BudgetError::NotFound);
        }

        tracing::info!(budget_id = %id, "Budget deleted");
        Ok(())
    }
}
