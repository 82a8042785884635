//! Dropdown Option Service

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{
    created_now, DropdownOption, DropdownOptionRepository, NewDropdownOption, LIST_LIMIT,
};
use crate::shared::error::AppError;

const NOT_FOUND_MESSAGE: &str = "Opção não encontrada";
pub const DELETED_MESSAGE: &str = "Opção deletada com sucesso";

#[async_trait]
pub trait DropdownOptionService: Send + Sync {
    async fn create(&self, draft: NewDropdownOption) -> Result<DropdownOption, DropdownError>;

    /// Options of one category in insertion order. Unknown categories yield an empty list.
    async fn list(&self, category: &str) -> Result<Vec<DropdownOption>, DropdownError>;

    async fn delete(&self, id: &str) -> Result<(), DropdownError>;
}

#[derive(Debug, thiserror::Error)]
pub enum DropdownError {
    #[error("Opção não encontrada")]
    NotFound,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<DropdownError> for AppError {
    fn from(e: DropdownError) -> Self {
        match e {
            DropdownError::NotFound => AppError::NotFound(NOT_FOUND_MESSAGE.into()),
            DropdownError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

pub struct DropdownOptionServiceImpl {
    repo: Arc<dyn DropdownOptionRepository>,
}

impl DropdownOptionServiceImpl {
    pub fn new(repo: Arc<dyn DropdownOptionRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl DropdownOptionService for DropdownOptionServiceImpl {
    async fn create(&self, draft: NewDropdownOption) -> Result<DropdownOption, DropdownError> {
        let option = DropdownOption {
            id: Uuid::new_v4().to_string(),
            category: draft.category,
            value: draft.value,
            label: draft.label,
            created_at: created_now(),
        };

        let created = self
            .repo
            .create(&option)
            .await
            .map_err(|e| DropdownError::Internal(e.to_string()))?;

        tracing::debug!(category = %created.category, value = %created.value, "Dropdown option created");
        Ok(created)
    }

    async fn list(&self, category: &str) -> Result<Vec<DropdownOption>, DropdownError> {
        self.repo
            .list_by_category(category, LIST_LIMIT)
            .await
            .map_err(|e| DropdownError::Internal(e.to_string()))
    }

    async fn delete(&self, id: &str) -> Result<(), DropdownError> {
        let deleted = self
            .repo
            .delete(id)
            .await
            .map_err(|e| DropdownError::Internal(e.to_string()))?;

        if !deleted {
            return Err(DropdownError::NotFound);
        }
        Ok(())
    }
}
