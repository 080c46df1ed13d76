//! Taxable Social Security benefits worksheet.
//!
//! Provisional income is all other return income plus half of net
//! benefits, compared against two statutory thresholds:
//!
//! | Tier | Condition | Taxable amount |
//! |------|-----------|----------------|
//! | 1    | provisional ≤ base | 0 |
//! | 2    | provisional ≤ second | min(50% of benefits, 50% of excess over base) |
//! | 3    | above second | min(85% of benefits, 85% of excess over second + tier-2 cap) |
//!
//! The branch order is exact; collapsing the tiers changes results at the
//! boundaries. Thresholds are statutory and unindexed: 25000/34000, or
//! 32000/44000 for a joint return.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::FilingStatus;

const HALF: Decimal = Decimal::from_parts(5, 0, 0, false, 1);
const EIGHTY_FIVE_PERCENT: Decimal = Decimal::from_parts(85, 0, 0, false, 2);

/// Worksheet outcome for the return's combined benefits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BenefitsResult {
    /// Combined SSA-1099 box 5 amounts; Form 1040 line 6a.
    pub total_benefits: Decimal,

    /// Other income plus half the benefits.
    pub provisional_income: Decimal,

    /// Taxable portion; Form 1040 line 6b.
    pub taxable_amount: Decimal,
}

fn thresholds(status: FilingStatus) -> (Decimal, Decimal) {
    if status == FilingStatus::MarriedFilingJointly {
        (Decimal::from(32000), Decimal::from(44000))
    } else {
        (Decimal::from(25000), Decimal::from(34000))
    }
}

/// Computes the taxable portion of Social Security benefits.
///
/// `other_income` is the rest of the return's income as already computed:
/// wages, taxable interest, ordinary dividends, taxable retirement
/// distributions, and the Schedule C, D (after the loss clamp), and E nets.
pub fn calculate(
    net_benefits: Decimal,
    other_income: Decimal,
    status: FilingStatus,
) -> BenefitsResult {
    let provisional_income = other_income + HALF * net_benefits;
    let (base, second) = thresholds(status);

    let taxable_amount = if provisional_income <= base {
        Decimal::ZERO
    } else if provisional_income <= second {
        (HALF * net_benefits).min(HALF * (provisional_income - base))
    } else {
        let tier_two_cap = (HALF * net_benefits).min(HALF * (second - base));
        (EIGHTY_FIVE_PERCENT * net_benefits)
            .min(EIGHTY_FIVE_PERCENT * (provisional_income - second) + tier_two_cap)
    };

    BenefitsResult {
        total_benefits: net_benefits,
        provisional_income,
        taxable_amount,
    }
}
