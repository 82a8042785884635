//! Pole entity.
//!
//! Maps to the `poles` table.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::catalog::CatalogItem;
use crate::domain::value_objects::CatalogKind;

/// A distribution pole (concrete, fiber, double-T, ...).
///
/// Maps to the `poles` table:
/// - id: TEXT PRIMARY KEY (UUID v4)
/// - pole_type: TEXT NOT NULL
/// - height: DOUBLE PRECISION NOT NULL (meters)
/// - capacity: INTEGER NOT NULL (daN)
/// - code: TEXT NOT NULL
/// - unit_price: DOUBLE PRECISION NOT NULL
/// - created_at: TIMESTAMPTZ NOT NULL
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pole {
    pub id: String,

    /// Concreto, Fibra, Duplo T, Especial
    #[serde(rename = "type")]
    pub pole_type: String,

    /// Height in meters
    pub height: f64,

    /// Nominal load in daN
    pub capacity: i32,

    pub code: String,

    pub unit_price: f64,

    pub created_at: DateTime<Utc>,
}

/// Fields supplied when registering a pole.
#[derive(Debug, Clone, Deserialize)]
pub struct NewPole {
    #[serde(rename = "type")]
    pub pole_type: String,
    pub height: f64,
    pub capacity: i32,
    pub code: String,
    pub unit_price: f64,
}

impl CatalogItem for Pole {
    type Draft = NewPole;

    const KIND: CatalogKind = CatalogKind::Pole;

    fn from_draft(id: String, created_at: DateTime<Utc>, draft: NewPole) -> Self {
        Self {
            id,
            pole_type: draft.pole_type,
            height: draft.height,
            capacity: draft.capacity,
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
