//! Dropdown Option Repository Implementation
//!
//! PostgreSQL implementation of the DropdownOptionRepository trait.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::{DropdownOption, DropdownOptionRepository};
use crate::shared::error::AppError;

#[derive(Clone)]
pub struct PgDropdownOptionRepository {
    pool: PgPool,
}

impl PgDropdownOptionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DropdownOptionRepository for PgDropdownOptionRepository {
    async fn create(&self, option: &DropdownOption) -> Result<DropdownOption, AppError> {
        sqlx::query(
            r#"
            INSERT INTO dropdown_options (id, category, value, label, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(&option.id)
        .bind(&option.category)
        .bind(&option.value)
        .bind(&option.label)
        .bind(option.created_at)
        .execute(&self.pool)
        .await?;

        Ok(option.clone())
    }

    async fn list_by_category(
        &self,
        category: &str,
        limit: i64,
    ) -> Result<Vec<DropdownOption>, AppError> {
        let options = sqlx::query_as::<_, DropdownOption>(
            r#"
            SELECT id, category, value, label, created_at
            FROM dropdown_options
            WHERE category = $1
            ORDER BY created_at ASC, id ASC
            LIMIT $2
            "#,
        )
        .bind(category)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(options)
    }

    async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM dropdown_options WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
