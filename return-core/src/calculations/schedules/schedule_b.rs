//! Schedule B interest and dividend disclosure.
//!
//! Advisory only: the totals feed lines 2b and 3b elsewhere, and the
//! `required` flag tells the preparer the schedule must be attached. It
//! never changes the tax.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{DividendStatement, ForeignDisclosure, InterestStatement};

/// Interest or dividend total above which Schedule B must be filed.
pub const REPORTING_THRESHOLD: Decimal = Decimal::from_parts(1500, 0, 0, false, 0);

/// Schedule B totals and the attachment-required flag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleBResult {
    /// Part I total taxable interest.
    pub total_interest: Decimal,

    /// Part II total ordinary dividends.
    pub total_dividends: Decimal,

    /// Part III foreign account answer, echoed from the facts.
    pub has_foreign_accounts: bool,

    /// Part III foreign trust answer, echoed from the facts.
    pub has_foreign_trust: bool,

    /// Foreign country named in Part III, if any.
    pub country: String,

    /// Schedule B must accompany the return.
    pub required: bool,
}

/// Totals interest and dividends and evaluates the filing requirement.
pub fn calculate(
    interest: &[InterestStatement],
    dividends: &[DividendStatement],
    foreign: &ForeignDisclosure,
) -> ScheduleBResult {
    let total_interest: Decimal = interest.iter().map(|f| f.amount).sum();
    let total_dividends: Decimal = dividends.iter().map(|f| f.ordinary).sum();

    let required = total_interest > REPORTING_THRESHOLD
        || total_dividends > REPORTING_THRESHOLD
        || foreign.has_foreign_accounts
        || foreign.has_foreign_trust;

    ScheduleBResult {
        total_interest,
        total_dividends,
        has_foreign_accounts: foreign.has_foreign_accounts,
        has_foreign_trust: foreign.has_foreign_trust,
        country: foreign.country.clone(),
        required,
    }
}
