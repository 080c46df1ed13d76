//! Form 8995 qualified business income deduction, simplified method.
//!
//! The simplified computation applies only while taxable income before the
//! deduction stays at or under the filing-status threshold. Above it the
//! full Form 8995-A computation would be required, which is out of scope:
//! the deduction is zero and the `over_threshold` flag tells the preparer
//! why. The deduction is the smaller of 20% of QBI and 20% of taxable
//! income net of capital gain, truncated to whole dollars.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use return_core::calculations::worksheets::qbi_deduction;
//!
//! let result = qbi_deduction::calculate(dec!(40000), dec!(90000), dec!(0), dec!(191950));
//!
//! assert_eq!(result.deduction, dec!(8000));
//! assert!(!result.over_threshold);
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::calculations::common::{floor_to_dollar, non_negative};

const TWENTY_PERCENT: Decimal = Decimal::from_parts(20, 0, 0, false, 2);

/// Form 8995 outcome.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QbiResult {
    /// Qualified business income the computation used.
    pub qbi: Decimal,

    /// 20% of QBI, before the income limit.
    pub qbi_component: Decimal,

    /// 20% of taxable income net of capital gain.
    pub income_limit: Decimal,

    /// Whole-dollar deduction; Form 1040 line 13.
    pub deduction: Decimal,

    /// Taxable income exceeded the simplified-method threshold; Form 8995-A
    /// would be required, so no deduction is taken.
    pub over_threshold: bool,
}

/// Computes the simplified QBI deduction.
///
/// `qbi` is the combined Schedule C net less the SE-tax deduction, already
/// floored at zero by the caller. `net_capital_gain` is the positive
/// capital gain on line 7, if any.
pub fn calculate(
    qbi: Decimal,
    taxable_income_before_deduction: Decimal,
    net_capital_gain: Decimal,
    threshold: Decimal,
) -> QbiResult {
    if qbi <= Decimal::ZERO || taxable_income_before_deduction <= Decimal::ZERO {
        return QbiResult::default();
    }

    if taxable_income_before_deduction > threshold {
        warn!(
            taxable_income = %taxable_income_before_deduction,
            threshold = %threshold,
            "taxable income exceeds the simplified QBI threshold; Form 8995-A required"
        );
        return QbiResult {
            qbi,
            over_threshold: true,
            ..QbiResult::default()
        };
    }

    let qbi_component = qbi * TWENTY_PERCENT;
    let income_limit = non_negative(
        taxable_income_before_deduction - non_negative(net_capital_gain),
    ) * TWENTY_PERCENT;

    QbiResult {
        qbi,
        qbi_component,
        income_limit,
        deduction: floor_to_dollar(qbi_component.min(income_limit)),
        over_threshold: false,
    }
}
