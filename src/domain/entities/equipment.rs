//! Equipment and hardware entities.
//!
//! Equipment covers switches, transformers, reclosers and regulators;
//! hardware covers clamps, insulators, bolts and other accessories.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::catalog::CatalogItem;
use crate::domain::value_objects::CatalogKind;

/// Maps to the `equipment` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Equipment {
    pub id: String,

    /// Chave, Transformador, Capacitor, Religador, Regulador
    pub category: String,

    /// Faca, Tandem, Fusível, ET1A, ...
    #[serde(rename = "type")]
    pub equipment_type: String,

    pub code: String,
    pub description: String,
    pub unit_price: f64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewEquipment {
    pub category: String,
    #[serde(rename = "type")]
    pub equipment_type: String,
    pub code: String,
    pub description: String,
    pub unit_price: f64,
}

impl CatalogItem for Equipment {
    type Draft = NewEquipment;

    const KIND: CatalogKind = CatalogKind::Equipment;

    fn from_draft(id: String, created_at: DateTime<Utc>, draft: NewEquipment) -> Self {
        Self {
            id,
            category: draft.category,
            equipment_type: draft.equipment_type,
            code: draft.code,
            description: draft.description,
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

/// Maps to the `hardware` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hardware {
    pub id: String,

    /// Braçadeira, Para-raios, Isolador, Parafuso, Acessório
    pub category: String,

    pub description: String,
    pub code: String,
    pub unit_price: f64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewHardware {
    pub category: String,
    pub description: String,
    pub code: String,
    pub unit_price: f64,
}

impl CatalogItem for Hardware {
    type Draft = NewHardware;

    const KIND: CatalogKind = CatalogKind::Hardware;

    fn from_draft(id: String, created_at: DateTime<Utc>, draft: NewHardware) -> Self {
        Self {
            id,
            category: draft.category,
            description: draft.description,
            code: draft.code,
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
