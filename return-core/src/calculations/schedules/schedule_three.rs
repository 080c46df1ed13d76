//! Schedule 3 additional credits and payments.
//!
//! Pure summation of preparer-supplied amounts: Part I nonrefundable
//! credits feed Form 1040 line 20, Part II refundable credits and payments
//! feed line 31. No derived logic.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::AdditionalCredits;

/// Schedule 3 part totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleThreeResult {
    /// Part I total; Form 1040 line 20.
    pub total_nonrefundable: Decimal,

    /// Part II total; Form 1040 line 31.
    pub total_refundable: Decimal,
}

/// Sums the seven nonrefundable and five refundable amounts.
pub fn calculate(credits: &AdditionalCredits) -> ScheduleThreeResult {
    let total_nonrefundable = credits.foreign_tax_credit
        + credits.child_care_credit
        + credits.education_credit
        + credits.retirement_credit
        + credits.energy_clean_credit
        + credits.energy_efficient_credit
        + credits.other_nonrefundable;

    let total_refundable = credits.premium_tax_credit
        + credits.extension_payment
        + credits.excess_social_security
        + credits.fuel_credit
        + credits.other_refundable;

    ScheduleThreeResult {
        total_nonrefundable,
        total_refundable,
    }
}
