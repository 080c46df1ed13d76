//! Schedule E supplemental income from rentals and royalties.
//!
//! Each property nets rents plus royalties against expenses; the combined
//! net flows to Schedule 1 unclamped. Passive-loss allowances and
//! AGI-based limitations are deliberately not modeled.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::RentalEntry;

/// Schedule E totals across all properties.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEResult {
    /// Rents plus royalties across all properties.
    pub total_income: Decimal,

    /// Expenses across all properties.
    pub total_expenses: Decimal,

    /// Combined net; may be negative.
    pub net: Decimal,
}

/// Nets every rental and royalty property.
pub fn calculate(properties: &[RentalEntry]) -> ScheduleEResult {
    let mut result = ScheduleEResult::default();

    for property in properties {
        result.total_income += property.rents + property.royalties;
        result.total_expenses += property.expenses;
    }

    result.net = result.total_income - result.total_expenses;
    result
}
