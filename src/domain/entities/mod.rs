//! # Domain Entities
//!
//! Core domain entities of the budget server. Every entity maps to its own
//! table.
//!
//! ## Catalog Entities
//!
//! - **Pole**: Distribution pole with height and nominal load
//! - **PrimaryStructure** / **SecondaryStructure**: Medium/low voltage structures
//! - **Conductor**: Cable priced per meter
//! - **Equipment**: Switches, transformers, reclosers, regulators
//! - **Hardware**: Clamps, insulators, bolts and accessories
//!
//! ## Quotation Entities
//!
//! - **Budget**: A quotation with embedded line items and derived totals
//! - **StructureAssembly**: Bill of materials for a pole-top structure
//! - **DropdownOption**: Selection-list vocabulary
//!
//! ## Repository Traits
//!
//! Each entity has an associated repository trait defining data access
//! operations. The catalog collections share the generic
//! `CatalogRepository<T>`. Implementations live in the infrastructure layer.

mod catalog;
mod pole;
mod network_structure;
mod conductor;
mod equipment;
mod budget;
mod structure_assembly;
mod dropdown_option;

pub use catalog::{created_now, CatalogItem, CatalogRepository, LIST_LIMIT};

pub use pole::{NewPole, Pole};
pub use network_structure::{
    NewPrimaryStructure, NewSecondaryStructure, PrimaryStructure, SecondaryStructure,
};
pub use conductor::{Conductor, NewConductor};
pub use equipment::{Equipment, Hardware, NewEquipment, NewHardware};

pub use budget::{Budget, BudgetLineItem, BudgetRepository, NewBudget};
#[cfg(test)]
pub use budget::MockBudgetRepository;

pub use structure_assembly::{
    NewStructureAssembly, StructureAssembly, StructureAssemblyRepository, StructureMaterial,
};

pub use dropdown_option::{DropdownOption, DropdownOptionRepository, NewDropdownOption};
