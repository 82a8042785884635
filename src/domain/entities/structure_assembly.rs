//! Structure assembly entity and repository trait.
//!
//! A structure assembly (CE1-A, CE2-TR, S4L, ...) is a bill of materials
//! for one pole-top structure. Its `total_price` is the sum of
//! `quantity × unit_price` over its materials, computed at creation.
//!
//! Maps to the `structure_assemblies` table.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::VoltageLevel;
use crate::shared::error::AppError;

/// One line of a structure's bill of materials.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructureMaterial {
    pub code: String,
    pub description: String,
    /// Unit of measure, e.g. "pç"
    pub unit: String,
    pub quantity: f64,
    pub unit_price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructureAssembly {
    pub id: String,
    pub voltage_level: VoltageLevel,
    pub code: String,
    pub description: String,
    /// e.g. 13.8kV, 220V/380V
    pub voltage_class: String,
    pub materials: Vec<StructureMaterial>,
    pub total_price: f64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewStructureAssembly {
    pub code: String,
    pub description: String,
    pub voltage_class: String,
    pub materials: Vec<StructureMaterial>,
}

/// Repository trait for structure assemblies, partitioned by voltage level.
#[async_trait]
pub trait StructureAssemblyRepository: Send + Sync {
    async fn create(&self, assembly: &StructureAssembly) -> Result<StructureAssembly, AppError>;

    async fn list(&self, level: VoltageLevel, limit: i64) -> Result<Vec<StructureAssembly>, AppError>;

    /// Delete an assembly of the given level. Returns `false` when nothing was removed.
    async fn delete(&self, level: VoltageLevel, id: &str) -> Result<bool, AppError>;
}
