//! Catalog kind descriptor.
//!
//! Each catalog collection has a storage table, a metric label and the
//! localized messages returned to clients.

use std::fmt;

/// The six priced catalog collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CatalogKind {
    Pole,
    PrimaryStructure,
    SecondaryStructure,
    Conductor,
    Equipment,
    Hardware,
}

impl CatalogKind {
    pub const ALL: [CatalogKind; 6] = [
        CatalogKind::Pole,
        CatalogKind::PrimaryStructure,
        CatalogKind::SecondaryStructure,
        CatalogKind::Conductor,
        CatalogKind::Equipment,
        CatalogKind::Hardware,
    ];

    /// Snake-case label used in logs and metrics.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pole => "pole",
            Self::PrimaryStructure => "primary_structure",
            Self::SecondaryStructure => "secondary_structure",
            Self::Conductor => "conductor",
            Self::Equipment => "equipment",
            Self::Hardware => "hardware",
        }
    }

    /// Backing table name.
    pub fn table(&self) -> &'static str {
        match self {
            Self::Pole => "poles",
            Self::PrimaryStructure => "primary_structures",
            Self::SecondaryStructure => "secondary_structures",
            Self::Conductor => "conductors",
            Self::Equipment => "equipment",
            Self::Hardware => "hardware",
        }
    }

    /// Route segment under `/api`.
    pub fn route(&self) -> &'static str {
        match self {
            Self::Pole => "/poles",
            Self::PrimaryStructure => "/primary-structures",
            Self::SecondaryStructure => "/secondary-structures",
            Self::Conductor => "/conductors",
            Self::Equipment => "/equipment",
            Self::Hardware => "/hardware",
        }
    }

    pub fn not_found_message(&self) -> &'static str {
        match self {
            Self::Pole => "Poste não encontrado",
            Self::PrimaryStructure | Self::SecondaryStructure => "Estrutura não encontrada",
            Self::Conductor => "Condutor não encontrado",
            Self::Equipment => "Equipamento não encontrado",
            Self::Hardware => "Ferragem não encontrada",
        }
    }

    pub fn deleted_message(&self) -> &'static str {
        match self {
            Self::Pole => "Poste deletado com sucesso",
            Self::PrimaryStructure | Self::SecondaryStructure => "Estrutura deletada com sucesso",
            Self::Conductor => "Condutor deletado com sucesso",
            Self::Equipment => "Equipamento deletado com sucesso",
            Self::Hardware => "Ferragem deletada com sucesso",
        }
    }
}

impl fmt::Display for CatalogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
