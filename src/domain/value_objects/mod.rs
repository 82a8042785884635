//! # Domain Value Objects
//!
//! Immutable value types that represent domain concepts without identity.
//!
//! ## Value Objects
//!
//! - **CatalogKind**: One of the six priced catalog collections
//! - **ItemType**: Type tag carried by a budget line item
//! - **VoltageLevel**: Medium or low voltage network of a structure assembly

mod catalog_kind;
mod item_type;
mod voltage_level;

pub use catalog_kind::*;
pub use item_type::*;
pub use voltage_level::*;
