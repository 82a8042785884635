//! Application Services
//!
//! Business logic services that coordinate domain operations.
//!
//! ## Available Services
//!
//! - **CatalogService**: Create/list/delete for the six catalog collections
//! - **BudgetService**: Quotations with derived subtotal, total and BDI
//! - **StructureAssemblyService**: Medium/low voltage bills of materials
//! - **DropdownOptionService**: Selection-list vocabulary

pub mod catalog_service;
pub mod budget_service;
pub mod structure_service;
pub mod dropdown_service;

pub use catalog_service::{CatalogError, CatalogService, CatalogServiceImpl};

pub use budget_service::{BudgetError, BudgetService, BudgetServiceImpl};

pub use structure_service::{
    StructureAssemblyService, StructureAssemblyServiceImpl, StructureError,
};

pub use dropdown_service::{DropdownError, DropdownOptionService, DropdownOptionServiceImpl};
