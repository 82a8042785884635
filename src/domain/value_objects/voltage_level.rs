//! Voltage level of a structure assembly.

use serde::{Deserialize, Serialize};

/// Medium-voltage (13.8/15 kV) or low-voltage (220/380 V) network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoltageLevel {
    Medium,
    Low,
}

impl VoltageLevel {
    /// Database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }

    pub fn not_found_message(&self) -> &'static str {
        match self {
            Self::Medium => "Estrutura de média tensão não encontrada",
            Self::Low => "Estrutura de baixa tensão não encontrada",
        }
    }
}

impl std::fmt::Display for VoltageLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
