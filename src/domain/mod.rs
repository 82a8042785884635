//! # Domain Layer
//!
//! The domain layer contains the core business logic of the budget server.
//! It is independent of any external frameworks or infrastructure concerns.
//!
//! ## Structure
//!
//! - **entities**: Catalog items, budgets, structure assemblies, dropdown options
//! - **value_objects**: Immutable value types (CatalogKind, ItemType, VoltageLevel)
//! - **services**: Price aggregation
//!
//! ## Design Principles
//!
//! - No dependencies on infrastructure or presentation layers
//! - Repository traits define data access contracts
//! - Derived amounts are computed here and nowhere else

pub mod entities;
pub mod services;
pub mod value_objects;

// Re-export commonly used types
pub use entities::*;
pub use value_objects::*;
