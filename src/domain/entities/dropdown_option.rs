//! Dropdown option entity and repository trait.
//!
//! Vocabulary records grouped by category (`pole_types`,
//! `conductor_insulation`, `equipment_categories`, ...) that clients use to
//! populate selection lists.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

/// Maps to the `dropdown_options` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct DropdownOption {
    pub id: String,
    pub category: String,
    pub value: String,
    pub label: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewDropdownOption {
    pub category: String,
    pub value: String,
    pub label: String,
}

#[async_trait]
pub trait DropdownOptionRepository: Send + Sync {
    async fn create(&self, option: &DropdownOption) -> Result<DropdownOption, AppError>;

    /// List the options of one category in insertion order.
    async fn list_by_category(&self, category: &str, limit: i64) -> Result<Vec<DropdownOption>, AppError>;

    /// Delete an option by id. Returns `false` when nothing was removed.
    async fn delete(&self, id: &str) -> Result<bool, AppError>;
}
