//! Line item type tag.

use serde::{Deserialize, Serialize};

/// Identifies which collection a budget line item was taken from.
///
/// Plural collection names (`poles`, `medium_voltage_structures`, ...) are
/// accepted on input and normalized to the singular tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemType {
    #[serde(alias = "poles")]
    Pole,
    #[serde(alias = "primary_structures")]
    PrimaryStructure,
    #[serde(alias = "secondary_structures")]
    SecondaryStructure,
    #[serde(alias = "conductors")]
    Conductor,
    Equipment,
    Hardware,
    #[serde(alias = "medium_voltage_structures")]
    MediumVoltageStructure,
    #[serde(alias = "low_voltage_structures")]
    LowVoltageStructure,
}

impl ItemType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pole => "pole",
            Self::PrimaryStructure => "primary_structure",
            Self::SecondaryStructure => "secondary_structure",
            Self::Conductor => "conductor",
            Self::Equipment => "equipment",
            Self::Hardware => "hardware",
            Self::MediumVoltageStructure => "medium_voltage_structure",
            Self::LowVoltageStructure => "low_voltage_structure",
        }
    }
}
