//! Structure Assembly Service
//!
//! Medium and low voltage structure assemblies with their bill of
//! materials. `total_price` is derived from the materials at creation.

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::services::budget_aggregator;
use crate::domain::{
    created_now, NewStructureAssembly, StructureAssembly, StructureAssemblyRepository,
    VoltageLevel, LIST_LIMIT,
};
use crate::shared::error::AppError;

pub const DELETED_MESSAGE: &str = "Estrutura deletada com sucesso";

#[async_trait]
pub trait StructureAssemblyService: Send + Sync {
    async fn create(
        &self,
        level: VoltageLevel,
        draft: NewStructureAssembly,
    ) -> Result<StructureAssembly, StructureError>;

    async fn list(&self, level: VoltageLevel) -> Result<Vec<StructureAssembly>, StructureError>;

    async fn delete(&self, level: VoltageLevel, id: &str) -> Result<(), StructureError>;
}

#[derive(Debug, thiserror::Error)]
pub enum StructureError {
    #[error("{}", .0.not_found_message())]
    NotFound(VoltageLevel),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<StructureError> for AppError {
    fn from(e: StructureError) -> Self {
        match e {
            StructureError::NotFound(level) => {
                AppError::NotFound(level.not_found_message().into())
            }
            StructureError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

pub struct StructureAssemblyServiceImpl {
    repo: Arc<dyn StructureAssemblyRepository>,
}

impl StructureAssemblyServiceImpl {
    pub fn new(repo: Arc<dyn StructureAssemblyRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl StructureAssemblyService for StructureAssemblyServiceImpl {
    async fn create(
        &self,
        level: VoltageLevel,
        draft: NewStructureAssembly,
    ) -> Result<StructureAssembly, StructureError> {
        let assembly = StructureAssembly {
            id: Uuid::new_v4().to_string(),
            voltage_level: level,
            total_price: budget_aggregator::materials_total(&draft.materials),
            code: draft.code,
            description: draft.description,
            voltage_class: draft.voltage_class,
            materials: draft.materials,
            created_at: created_now(),
        };

        let created = self
            .repo
            .create(&assembly)
            .await
            .map_err(|e| StructureError::Internal(e.to_string()))?;

        tracing::info!(
            level = %level,
            code = %created.code,
            materials = created.materials.len(),
            total_price = created.total_price,
            "Structure assembly created"
        );

        Ok(created)
    }

    async fn list(&self, level: VoltageLevel) -> Result<Vec<StructureAssembly>, StructureError> {
        self.repo
            .list(level, LIST_LIMIT)
            .await
            .map_err(|e| StructureError::Internal(e.to_string()))
    }

    async fn delete(&self, level: VoltageLevel, id: &str) -> Result<(), StructureError> {
        let deleted = self
            .repo
            .delete(level, id)
            .await
            .map_err(|e| StructureError::Internal(e.to_string()))?;

        if !deleted {
            return Err(StructureError::NotFound(level));
        }

        tracing::info!(level = %level, id = %id, "Structure assembly deleted");
        Ok(())
    }
}
