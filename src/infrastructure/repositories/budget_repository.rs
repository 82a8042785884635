//! Budget Repository Implementation
//!
//! PostgreSQL implementation of the BudgetRepository trait.
//! Line items are stored as a JSONB array on the budget row.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::PgPool;

use crate::domain::{Budget, BudgetLineItem, BudgetRepository};
use crate::shared::error::AppError;

/// Database row representation of the budgets table.
#[derive(Debug, sqlx::FromRow)]
struct BudgetRow {
    id: String,
    project_name: String,
    client_name: String,
    items: Json<Vec<BudgetLineItem>>,
    labor_cost: f64,
    additional_services: f64,
    subtotal: f64,
    total: f64,
    bdi_percentage: f64,
    bdi_value: f64,
    notes: Option<String>,
    created_at: DateTime<Utc>,
}

impl BudgetRow {
    fn into_budget(self) -> Budget {
        Budget {
            id: self.id,
            project_name: self.project_name,
            client_name: self.client_name,
            items: self.items.0,
            labor_cost: self.labor_cost,
            additional_services: self.additional_services,
            subtotal: self.subtotal,
            total: self.total,
            bdi_percentage: self.bdi_percentage,
            bdi_value: self.bdi_value,
            notes: self.notes,
            created_at: self.created_at,
        }
    }
}

/// PostgreSQL budget repository implementation.
#[derive(Clone)]
pub struct PgBudgetRepository {
    pool: PgPool,
}

impl PgBudgetRepository {
    /// Create a new PgBudgetRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BudgetRepository for PgBudgetRepository {
    async fn create(&self, budget: &Budget) -> Result<Budget, AppError> {
        sqlx::query(
            r#"
            INSERT INTO budgets (id, project_name, client_name, items, labor_cost,
                                 additional_services, subtotal, total, bdi_percentage,
                                 bdi_value, notes, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            "#,
        )
        .bind(&budget.id)
        .bind(&budget.project_name)
        .bind(&budget.client_name)
        .bind(Json(&budget.items))
        .bind(budget.labor_cost)
        .bind(budget.additional_services)
        .bind(budget.subtotal)
        .bind(budget.total)
        .bind(budget.bdi_percentage)
        .bind(budget.bdi_value)
        .bind(&budget.notes)
        .bind(budget.created_at)
        .execute(&self.pool)
        .await?;

        Ok(budget.clone())
    }

    async fn list(&self, limit: i64) -> Result<Vec<Budget>, AppError> {
        let rows = sqlx::query_as::<_, BudgetRow>(
            r#"
            SELECT id, project_name, client_name, items, labor_cost, additional_services,
                   subtotal, total, bdi_percentage, bdi_value, notes, created_at
            FROM budgets
            ORDER BY created_at ASC, id ASC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(BudgetRow::into_budget).collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Budget>, AppError> {
        let row = sqlx::query_as::<_, BudgetRow>(
            r#"
            SELECT id, project_name, client_name, items, labor_cost, additional_services,
                   subtotal, total, bdi_percentage, bdi_value, notes, created_at
            FROM budgets
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(BudgetRow::into_budget))
    }

    async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM budgets WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
