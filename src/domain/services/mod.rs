//! # Domain Services
//!
//! Domain services encapsulate business logic that doesn't naturally
//! belong to a single entity.
//!
//! ## Services
//!
//! - **BudgetAggregator**: Subtotal/total aggregation for budgets, bill of
//!   materials totals for structure assemblies, BDI markup

pub mod budget_aggregator;

pub use budget_aggregator::*;
