use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One row of a marginal rate schedule.
///
/// Tax for income inside this bracket is `base + (income - over) * rate`,
/// where `base` is the precomputed tax owed on everything below `over`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    /// Income threshold where this bracket begins.
    pub over: Decimal,

    /// Marginal rate applied to income above `over`.
    pub rate: Decimal,

    /// Tax accumulated by all lower brackets at the `over` threshold.
    pub base: Decimal,
}

impl TaxBracket {
    pub fn new(over: Decimal, rate: Decimal, base: Decimal) -> Self {
        Self { over, rate, base }
    }
}
