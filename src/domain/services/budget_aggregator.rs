//! Budget Aggregator
//!
//! Price aggregation for quotations and structure assemblies. Every
//! function here is pure and takes no store dependency.

use crate::domain::entities::{BudgetLineItem, StructureMaterial};

/// Derived amounts of a budget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BudgetTotals {
    pub subtotal: f64,
    pub total: f64,
}

/// Compute a budget's subtotal and total.
///
/// The subtotal is the sum of each line item's `total_price` as provided;
/// it is never re-derived from `quantity × unit_price`. Negative amounts
/// are summed as given.
pub fn compute_totals(
    items: &[BudgetLineItem],
    labor_cost: f64,
    additional_services: f64,
) -> BudgetTotals {
    // fold from +0.0: an empty budget must serialize as 0, not -0
    let subtotal = items.iter().fold(0.0, |acc, item| acc + item.total_price);

    BudgetTotals {
        subtotal,
        total: subtotal + labor_cost + additional_services,
    }
}

/// Price of `quantity` units at `unit_price`.
pub fn line_total(quantity: f64, unit_price: f64) -> f64 {
    quantity * unit_price
}

/// Total price of a structure's bill of materials.
pub fn materials_total(materials: &[StructureMaterial]) -> f64 {
    materials
        .iter()
        .fold(0.0, |acc, m| acc + line_total(m.quantity, m.unit_price))
}

/// Indirect cost markup (BDI) over `base` at `percentage` percent.
pub fn bdi_value(base: f64, percentage: f64) -> f64 {
    base * (percentage / 100.0)
}
