//! Conductor entity.
//!
//! Maps to the `conductors` table. Conductors are priced per meter.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::catalog::CatalogItem;
use crate::domain::value_objects::CatalogKind;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conductor {
    pub id: String,

    /// Cobre, Alumínio, AAAC
    #[serde(rename = "type")]
    pub conductor_type: String,

    /// XLPE, PVC
    pub insulation: String,

    /// Cross section, AWG or mm²
    pub section: String,

    pub code: String,

    /// Multiplexado, Duplexado, Simples
    pub configuration: String,

    /// Price per meter
    pub unit_price: f64,

    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewConductor {
    #[serde(rename = "type")]
    pub conductor_type: String,
    pub insulation: String,
    pub section: String,
    pub code: String,
    pub configuration: String,
    pub unit_price: f64,
}

impl CatalogItem for Conductor {
    type Draft = NewConductor;

    const KIND: CatalogKind = CatalogKind::Conductor;

    fn from_draft(id: String, created_at: DateTime<Utc>, draft: NewConductor) -> Self {
        Self {
            id,
            conductor_type: draft.conductor_type,
            insulation: draft.insulation,
            section: draft.section,
            code: draft.code,
            configuration: draft.configuration,
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
