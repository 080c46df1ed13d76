//! Schedule SE self-employment tax, computed per owner.
//!
//! The worksheet follows Schedule SE Part I:
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | Net profit from Schedule C for this owner |
//! | 2    | Net earnings = net profit × 92.35% |
//! | 3    | Remaining SS wage base = max(0, wage base − W-2 SS wages) |
//! | 4    | Social security tax = min(net earnings, remaining base) × 12.4% |
//! | 5    | Medicare tax = net earnings × 2.9% (uncapped) |
//! | 6    | Total SE tax = step 4 + step 5, rounded to cents |
//! | 7    | Deduction = half of total SE tax, rounded to cents |
//!
//! Net profit under the $400 filing threshold produces a zero result with
//! the `below_threshold` flag set; that is the statutory floor, not a
//! rounding artifact. Intermediate values stay unrounded so the final tax
//! and deduction round exactly once.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use return_core::calculations::schedules::schedule_se::SeSchedule;
//! use return_core::models::YearConfig;
//!
//! let config = YearConfig::for_2025();
//! let schedule = SeSchedule::new(&config);
//!
//! let result = schedule.calculate(dec!(50000), dec!(0));
//!
//! assert_eq!(result.net_earnings, dec!(46175.00));
//! assert_eq!(result.total_tax, dec!(7064.78));
//! assert_eq!(result.deduction, dec!(3532.39));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::calculations::common::{non_negative, round_half_up};
use crate::models::YearConfig;

/// One owner's Schedule SE outcome.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeResult {
    /// Schedule C net profit this run was given.
    pub net_profit: Decimal,

    /// Net earnings after the 92.35% factor. Zero when below the threshold.
    pub net_earnings: Decimal,

    /// Earnings subject to the social security portion after the wage-base
    /// coordination.
    pub ss_taxable_earnings: Decimal,

    /// Social security portion of the tax, unrounded.
    pub social_security_tax: Decimal,

    /// Medicare portion of the tax, unrounded.
    pub medicare_tax: Decimal,

    /// Total SE tax, rounded to cents. Schedule 2 line 4.
    pub total_tax: Decimal,

    /// Deductible half of the SE tax, rounded to cents. Schedule 1 line 15.
    pub deduction: Decimal,

    /// Net profit was under the filing threshold; everything above is zero.
    pub below_threshold: bool,
}

impl SeResult {
    fn below_threshold(net_profit: Decimal) -> Self {
        Self {
            net_profit,
            below_threshold: true,
            ..Self::default()
        }
    }
}

/// Combined SE totals for the return, across both owners.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeSummary {
    pub taxpayer: SeResult,
    pub spouse: SeResult,

    /// Sum of both owners' rounded SE tax; Schedule 2 line 21.
    pub total_tax: Decimal,

    /// Sum of both owners' rounded deductions; Schedule 1 line 15.
    pub total_deduction: Decimal,
}

impl SeSummary {
    pub fn combine(taxpayer: SeResult, spouse: SeResult) -> Self {
        Self {
            total_tax: taxpayer.total_tax + spouse.total_tax,
            total_deduction: taxpayer.deduction + spouse.deduction,
            taxpayer,
            spouse,
        }
    }
}

/// Schedule SE calculator for one tax year's rates.
#[derive(Debug, Clone)]
pub struct SeSchedule {
    wage_base: Decimal,
    ss_rate: Decimal,
    medicare_rate: Decimal,
    net_earnings_factor: Decimal,
    deduction_factor: Decimal,
    minimum_net_profit: Decimal,
}

impl SeSchedule {
    pub fn new(config: &YearConfig) -> Self {
        Self {
            wage_base: config.ss_wage_base,
            ss_rate: config.ss_tax_rate,
            medicare_rate: config.medicare_tax_rate,
            net_earnings_factor: config.se_net_earnings_factor,
            deduction_factor: config.se_deduction_factor,
            minimum_net_profit: config.se_minimum_net_profit,
        }
    }

    /// Runs the worksheet for one owner.
    ///
    /// `ss_wages` is that owner's W-2 social security wages (box 3, falling
    /// back to box 1 when box 3 is blank), which shrink the wage base
    /// available to the social security portion.
    pub fn calculate(
        &self,
        net_profit: Decimal,
        ss_wages: Decimal,
    ) -> SeResult {
        if net_profit < self.minimum_net_profit {
            if net_profit > Decimal::ZERO {
                warn!(
                    net_profit = %net_profit,
                    threshold = %self.minimum_net_profit,
                    "net profit below SE filing threshold; no SE tax due"
                );
            }
            return SeResult::below_threshold(net_profit);
        }

        let net_earnings = net_profit * self.net_earnings_factor;
        let remaining_base = non_negative(self.wage_base - ss_wages);
        let ss_taxable_earnings = net_earnings.min(remaining_base);
        let social_security_tax = ss_taxable_earnings * self.ss_rate;
        let medicare_tax = net_earnings * self.medicare_rate;

        let unrounded_total = social_security_tax + medicare_tax;

        SeResult {
            net_profit,
            net_earnings,
            ss_taxable_earnings,
            social_security_tax,
            medicare_tax,
            total_tax: round_half_up(unrounded_total),
            deduction: round_half_up(unrounded_total * self.deduction_factor),
            below_threshold: false,
        }
    }
}
