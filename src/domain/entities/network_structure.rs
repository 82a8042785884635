//! Primary and secondary network structure entities.
//!
//! Primary structures (CE1, CE2, ...) carry the medium-voltage phases;
//! secondary structures (M1, M2, ...) carry the low-voltage conductors.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::catalog::CatalogItem;
use crate::domain::value_objects::CatalogKind;

/// Maps to the `primary_structures` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrimaryStructure {
    pub id: String,
    pub code: String,
    pub description: String,
    /// 1 or 3
    pub phases: i32,
    /// e.g. 15kV, 36.2kV
    pub voltage_class: String,
    /// Compacta, Convencional
    pub network_type: String,
    pub unit_price: f64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewPrimaryStructure {
    pub code: String,
    pub description: String,
    pub phases: i32,
    pub voltage_class: String,
    pub network_type: String,
    pub unit_price: f64,
}

impl CatalogItem for PrimaryStructure {
    type Draft = NewPrimaryStructure;

    const KIND: CatalogKind = CatalogKind::PrimaryStructure;

    fn from_draft(id: String, created_at: DateTime<Utc>, draft: NewPrimaryStructure) -> Self {
        Self {
            id,
            code: draft.code,
            description: draft.description,
            phases: draft.phases,
            voltage_class: draft.voltage_class,
            network_type: draft.network_type,
            unit_price: draft.unit_price,
            created_at,
        }
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn unit_price(&self) -> f64 {
        self.unit_price
    }
}

/// Maps to the `secondary_structures` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecondaryStructure {
    pub id: String,
    pub code: String,
    pub description: String,
    pub conductor_count: i32,
    /// Convencional, Multiplexado
    pub network_type: String,
    pub unit_price: f64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewSecondaryStructure {
    pub code: String,
    pub description: String,
    pub conductor_count: i32,
    pub network_type: String,
    pub unit_price: f64,
}

impl CatalogItem for SecondaryStructure {
    type Draft = NewSecondaryStructure;

    const KIND: CatalogKind = CatalogKind::SecondaryStructure;

    fn from_draft(id: String, created_at: DateTime<Utc>, draft: NewSecondaryStructure) -> Self {
        Self {
            id,
            code: draft.code,
            description: draft.description,
            conductor_count: draft.conductor_count,
            network_type: draft.network_type,
            unit_price: draft.unit_price,
            created_at,
        }
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn unit_price(&self) -> f64 {
        self.unit_price
    }
}
