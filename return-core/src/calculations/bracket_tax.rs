//! Marginal bracket tax resolution for Form 1040 line 16.
//!
//! Each filing status has an ordered schedule of `{over, rate, base}` rows;
//! the tax for a taxable income is `base + (income - over) * rate` for the
//! last row whose threshold does not exceed the income. Income exactly at a
//! threshold uses that row's rate, which is numerically identical to the
//! lower row at the boundary.
//!
//! A status with no configured schedule is a configuration gap, not an
//! error: the resolver applies a flat 15% rate and reports the degraded
//! mode through [`BracketSource`] so the caller can surface it.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use return_core::calculations::bracket_tax::{BracketResolver, BracketSource};
//! use return_core::models::{FilingStatus, YearConfig};
//!
//! let config = YearConfig::for_2025();
//! let resolver = BracketResolver::new(&config.brackets);
//!
//! let result = resolver.tax_for(FilingStatus::Single, dec!(44250));
//!
//! assert_eq!(result.tax, dec!(5071.50));
//! assert_eq!(result.source, BracketSource::Standard);
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::calculations::common::round_half_up;
use crate::models::{BracketSchedules, FilingStatus, TaxBracket};

/// Flat rate applied when no bracket schedule is configured for a status.
pub const FLAT_FALLBACK_RATE: Decimal = Decimal::from_parts(15, 0, 0, false, 2);

/// How line 16 was computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BracketSource {
    /// The configured marginal schedule for the filing status was applied.
    Standard,
    /// No schedule was configured; the flat fallback rate was applied.
    FlatFallback,
}

/// Resolved tax plus the mode that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BracketTax {
    pub tax: Decimal,
    pub source: BracketSource,
}

/// Marginal tax calculator over a set of per-status bracket schedules.
#[derive(Debug, Clone)]
pub struct BracketResolver<'a> {
    schedules: &'a BracketSchedules,
}

impl<'a> BracketResolver<'a> {
    pub fn new(schedules: &'a BracketSchedules) -> Self {
        Self { schedules }
    }

    /// Computes the tax on `taxable_income` for `status`.
    ///
    /// Non-positive income yields zero tax through the standard path. The
    /// flat fallback is reported only when the schedule is actually missing.
    pub fn tax_for(
        &self,
        status: FilingStatus,
        taxable_income: Decimal,
    ) -> BracketTax {
        let table = self.schedules.get(status);
        if table.is_empty() {
            warn!(
                status = %status,
                "no bracket schedule configured; applying flat fallback rate"
            );
            let tax = if taxable_income > Decimal::ZERO {
                round_half_up(taxable_income * FLAT_FALLBACK_RATE)
            } else {
                Decimal::ZERO
            };
            return BracketTax {
                tax,
                source: BracketSource::FlatFallback,
            };
        }

        if taxable_income <= Decimal::ZERO {
            return BracketTax {
                tax: Decimal::ZERO,
                source: BracketSource::Standard,
            };
        }

        let bracket = Self::bracket_for(table, taxable_income);
        let tax = bracket.base + (taxable_income - bracket.over) * bracket.rate;

        BracketTax {
            tax: round_half_up(tax),
            source: BracketSource::Standard,
        }
    }

    /// Selects the last bracket whose threshold is at or below the income.
    ///
    /// Income exactly at a threshold lands in that bracket.
    fn bracket_for(
        table: &[TaxBracket],
        taxable_income: Decimal,
    ) -> &TaxBracket {
        table
            .iter()
            .rev()
            .find(|bracket| taxable_income >= bracket.over)
            .unwrap_or(&table[0])
    }
}
