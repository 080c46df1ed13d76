//! Schedule 8812: child tax credit, credit for other dependents, and the
//! refundable additional child tax credit.
//!
//! The worksheet runs in three stages:
//!
//! 1. Base credit: $2,000 per qualifying child plus $500 per other
//!    dependent.
//! 2. Phase-out: $50 per $1,000 (or fraction thereof, rounded up) of
//!    modified AGI above the filing-status threshold. The nonrefundable
//!    credit is the phased-out total capped by tax liability, which is why
//!    this worksheet runs only after line 16 is known.
//! 3. ACTC: with at least one qualifying child and earned income above
//!    $2,500, the unused child portion of the credit is refundable up to
//!    15% of earned income over the floor and a per-child cap. The
//!    phase-out is prorated between the child and other-dependent portions
//!    by their share of the base, and the nonrefundable credit is treated
//!    as consuming the child portion first.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use return_core::calculations::worksheets::child_credit::{self, ChildCreditInput};
//! use return_core::models::FilingStatus;
//!
//! let input = ChildCreditInput {
//!     qualifying_children: 2,
//!     other_dependents: 0,
//!     modified_agi: dec!(410000),
//!     filing_status: FilingStatus::MarriedFilingJointly,
//!     earned_income: dec!(410000),
//!     tax_before_credits: dec!(80000),
//! };
//!
//! let result = child_credit::calculate(&input, dec!(1700));
//!
//! assert_eq!(result.phase_out, dec!(500));
//! assert_eq!(result.credit_after_phaseout, dec!(3500));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::calculations::common::non_negative;
use crate::models::FilingStatus;

const CREDIT_PER_CHILD: Decimal = Decimal::from_parts(2000, 0, 0, false, 0);
const CREDIT_PER_OTHER_DEPENDENT: Decimal = Decimal::from_parts(500, 0, 0, false, 0);
const PHASE_OUT_STEP: Decimal = Decimal::from_parts(1000, 0, 0, false, 0);
const PHASE_OUT_PER_STEP: Decimal = Decimal::from_parts(50, 0, 0, false, 0);
const EARNED_INCOME_FLOOR: Decimal = Decimal::from_parts(2500, 0, 0, false, 0);
const ACTC_RATE: Decimal = Decimal::from_parts(15, 0, 0, false, 2);

/// Everything Schedule 8812 consumes from the rest of the return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChildCreditInput {
    pub qualifying_children: u32,
    pub other_dependents: u32,

    /// Modified AGI; equals AGI here, no exclusions are modeled.
    pub modified_agi: Decimal,

    pub filing_status: FilingStatus,

    /// Wages plus net self-employment earnings after the SE deduction.
    pub earned_income: Decimal,

    /// Form 1040 line 16, before any credits.
    pub tax_before_credits: Decimal,
}

/// Schedule 8812 breakdown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChildCreditResult {
    /// $2,000 × qualifying children.
    pub child_credit_base: Decimal,

    /// $500 × other dependents.
    pub other_dependent_base: Decimal,

    /// Sum of the two bases.
    pub total_base: Decimal,

    /// AGI-based reduction, reported uncapped.
    pub phase_out: Decimal,

    /// Base less phase-out, floored at zero.
    pub credit_after_phaseout: Decimal,

    /// Portion usable against tax; Form 1040 line 19.
    pub nonrefundable_credit: Decimal,

    /// Refundable additional child tax credit; Form 1040 line 28.
    pub additional_credit: Decimal,

    /// Children were claimed but earned income missed the ACTC floor.
    pub earned_income_below_floor: bool,
}

fn phase_out_threshold(status: FilingStatus) -> Decimal {
    match status {
        FilingStatus::MarriedFilingJointly | FilingStatus::QualifyingSurvivingSpouse => {
            Decimal::from(400000)
        }
        _ => Decimal::from(200000),
    }
}

/// Runs the Schedule 8812 worksheet.
///
/// `per_child_cap` is the year's refundable limit per qualifying child
/// ($1,700 for 2025), from configuration.
pub fn calculate(
    input: &ChildCreditInput,
    per_child_cap: Decimal,
) -> ChildCreditResult {
    if input.qualifying_children == 0 && input.other_dependents == 0 {
        return ChildCreditResult::default();
    }

    let child_credit_base = CREDIT_PER_CHILD * Decimal::from(input.qualifying_children);
    let other_dependent_base =
        CREDIT_PER_OTHER_DEPENDENT * Decimal::from(input.other_dependents);
    let total_base = child_credit_base + other_dependent_base;

    let excess = non_negative(input.modified_agi - phase_out_threshold(input.filing_status));
    let phase_out = if excess > Decimal::ZERO {
        (excess / PHASE_OUT_STEP).ceil() * PHASE_OUT_PER_STEP
    } else {
        Decimal::ZERO
    };

    let credit_after_phaseout = non_negative(total_base - phase_out);
    let nonrefundable_credit = credit_after_phaseout.min(input.tax_before_credits);

    let mut result = ChildCreditResult {
        child_credit_base,
        other_dependent_base,
        total_base,
        phase_out,
        credit_after_phaseout,
        nonrefundable_credit,
        additional_credit: Decimal::ZERO,
        earned_income_below_floor: false,
    };

    if input.qualifying_children == 0 {
        return result;
    }

    if input.earned_income <= EARNED_INCOME_FLOOR {
        warn!(
            earned_income = %input.earned_income,
            floor = %EARNED_INCOME_FLOOR,
            "earned income at or below the ACTC floor; no refundable credit"
        );
        result.earned_income_below_floor = true;
        return result;
    }

    // Prorate the phase-out onto the child portion by its share of the
    // base; total_base is nonzero here.
    let child_share_after_phaseout =
        non_negative(child_credit_base - phase_out * child_credit_base / total_base);
    let child_used_nonrefundable = child_share_after_phaseout.min(nonrefundable_credit);
    let unused_child_credit = child_share_after_phaseout - child_used_nonrefundable;

    let earned_income_limit =
        non_negative(input.earned_income - EARNED_INCOME_FLOOR) * ACTC_RATE;
    let per_child_limit = per_child_cap * Decimal::from(input.qualifying_children);

    result.additional_credit = unused_child_credit
        .min(earned_income_limit)
        .min(per_child_limit);
    result
}
