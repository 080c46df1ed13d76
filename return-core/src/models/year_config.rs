//! Versioned per-year configuration for the return engine.
//!
//! Everything the IRS republishes annually lives here: standard deductions,
//! QBI thresholds, the ACTC per-child cap, SE tax rates and the Social
//! Security wage base, and the marginal bracket schedules. The engine never
//! hard-codes these values; callers either use the built-in
//! [`YearConfig::for_2025`] tables or supply their own from the `return-data`
//! loaders.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{FilingStatus, TaxBracket};

/// Errors reported by [`YearConfig::validate`].
///
/// The engine itself never surfaces these; loaders validate configuration
/// before handing it to a computation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum YearConfigError {
    #[error("standard deduction for {0} must be positive, got {1}")]
    InvalidStandardDeduction(FilingStatus, Decimal),

    #[error("QBI threshold for {0} must be positive, got {1}")]
    InvalidQbiThreshold(FilingStatus, Decimal),

    #[error("ACTC per-child cap must be non-negative, got {0}")]
    InvalidActcCap(Decimal),

    #[error("social security wage base must be positive, got {0}")]
    InvalidWageBase(Decimal),

    #[error("rate {1} for {0} must be between 0 and 1")]
    InvalidRate(&'static str, Decimal),

    #[error("bracket table for {0} must start at zero, got {1}")]
    BracketTableNotAnchored(FilingStatus, Decimal),

    #[error("bracket table for {0} is not strictly ascending at threshold {1}")]
    BracketTableOutOfOrder(FilingStatus, Decimal),

    #[error("bracket rate {1} for {0} must be between 0 and 1")]
    InvalidBracketRate(FilingStatus, Decimal),
}

/// One decimal amount per filing status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusTable {
    pub single: Decimal,
    pub married_filing_jointly: Decimal,
    pub married_filing_separately: Decimal,
    pub head_of_household: Decimal,
    pub qualifying_surviving_spouse: Decimal,
}

impl StatusTable {
    /// The same amount for every status.
    pub fn uniform(amount: Decimal) -> Self {
        Self {
            single: amount,
            married_filing_jointly: amount,
            married_filing_separately: amount,
            head_of_household: amount,
            qualifying_surviving_spouse: amount,
        }
    }

    pub fn get(&self, status: FilingStatus) -> Decimal {
        match status {
            FilingStatus::Single => self.single,
            FilingStatus::MarriedFilingJointly => self.married_filing_jointly,
            FilingStatus::MarriedFilingSeparately => self.married_filing_separately,
            FilingStatus::HeadOfHousehold => self.head_of_household,
            FilingStatus::QualifyingSurvivingSpouse => self.qualifying_surviving_spouse,
        }
    }
}

/// Marginal bracket schedule per filing status.
///
/// An empty table for a status is a configuration gap, not an error: the
/// bracket resolver falls back to a documented flat rate and records the
/// degraded mode in the result metadata. The shipped 2025 tables carry no
/// qualifying-surviving-spouse schedule, so that status exercises the
/// fallback unless a loader supplies one (the bracket CSV's Y-1 schedule
/// feeds both MFJ and QSS).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BracketSchedules {
    #[serde(default)]
    pub single: Vec<TaxBracket>,
    #[serde(default)]
    pub married_filing_jointly: Vec<TaxBracket>,
    #[serde(default)]
    pub married_filing_separately: Vec<TaxBracket>,
    #[serde(default)]
    pub head_of_household: Vec<TaxBracket>,
    #[serde(default)]
    pub qualifying_surviving_spouse: Vec<TaxBracket>,
}

impl BracketSchedules {
    pub fn get(&self, status: FilingStatus) -> &[TaxBracket] {
        match status {
            FilingStatus::Single => &self.single,
            FilingStatus::MarriedFilingJointly => &self.married_filing_jointly,
            FilingStatus::MarriedFilingSeparately => &self.married_filing_separately,
            FilingStatus::HeadOfHousehold => &self.head_of_household,
            FilingStatus::QualifyingSurvivingSpouse => &self.qualifying_surviving_spouse,
        }
    }

    pub fn set(&mut self, status: FilingStatus, table: Vec<TaxBracket>) {
        match status {
            FilingStatus::Single => self.single = table,
            FilingStatus::MarriedFilingJointly => self.married_filing_jointly = table,
            FilingStatus::MarriedFilingSeparately => self.married_filing_separately = table,
            FilingStatus::HeadOfHousehold => self.head_of_household = table,
            FilingStatus::QualifyingSurvivingSpouse => {
                self.qualifying_surviving_spouse = table;
            }
        }
    }
}

/// Complete per-year configuration consumed by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearConfig {
    pub tax_year: i32,

    /// Form 1040 line 12 amount by filing status.
    pub standard_deduction: StatusTable,

    /// Form 8995 simplified-method income ceiling by filing status.
    pub qbi_threshold: StatusTable,

    /// Refundable additional child tax credit cap per qualifying child.
    pub actc_per_child_cap: Decimal,

    /// Maximum earnings subject to the social security portion of SE tax.
    pub ss_wage_base: Decimal,

    /// Social security SE tax rate (employer + employee portions).
    pub ss_tax_rate: Decimal,

    /// Medicare SE tax rate, uncapped.
    pub medicare_tax_rate: Decimal,

    /// Factor converting Schedule C net profit into SE net earnings.
    pub se_net_earnings_factor: Decimal,

    /// Deductible share of SE tax.
    pub se_deduction_factor: Decimal,

    /// Net profit below which no SE tax is due.
    pub se_minimum_net_profit: Decimal,

    pub brackets: BracketSchedules,
}

impl YearConfig {
    /// Built-in 2025 values, matching the published IRS tables.
    pub fn for_2025() -> Self {
        // Thresholds are whole dollars, rates are hundredths, bases are cents.
        fn b(over: i64, rate_pct: i64, base_cents: i64) -> TaxBracket {
            TaxBracket::new(
                Decimal::from(over),
                Decimal::new(rate_pct, 2),
                Decimal::new(base_cents, 2),
            )
        }

        let single_schedule = vec![
            b(0, 10, 0),
            b(11925, 12, 119250),
            b(48475, 22, 557850),
            b(103350, 24, 1765100),
            b(197300, 32, 4019900),
            b(250525, 35, 5723100),
            b(626350, 37, 18876975),
        ];
        let mfj_schedule = vec![
            b(0, 10, 0),
            b(23850, 12, 238500),
            b(96950, 22, 1115700),
            b(206700, 24, 3530200),
            b(394600, 32, 8039800),
            b(501050, 35, 11446200),
            b(751600, 37, 20215450),
        ];
        let mfs_schedule = vec![
            b(0, 10, 0),
            b(11925, 12, 119250),
            b(48475, 22, 557850),
            b(103350, 24, 1765100),
            b(197300, 32, 4019900),
            b(250525, 35, 5723100),
            b(375801, 37, 10107760),
        ];
        let hoh_schedule = vec![
            b(0, 10, 0),
            b(17000, 12, 170000),
            b(64850, 22, 744200),
            b(103350, 24, 1591200),
            b(197300, 32, 3846000),
            b(250500, 35, 5548400),
            b(626350, 37, 18703150),
        ];

        Self {
            tax_year: 2025,
            standard_deduction: StatusTable {
                single: Decimal::from(15750),
                married_filing_jointly: Decimal::from(31500),
                married_filing_separately: Decimal::from(15750),
                head_of_household: Decimal::from(23625),
                qualifying_surviving_spouse: Decimal::from(31500),
            },
            qbi_threshold: StatusTable {
                single: Decimal::from(191950),
                married_filing_jointly: Decimal::from(383900),
                married_filing_separately: Decimal::from(191950),
                head_of_household: Decimal::from(191950),
                qualifying_surviving_spouse: Decimal::from(191950),
            },
            actc_per_child_cap: Decimal::from(1700),
            ss_wage_base: Decimal::from(176100),
            ss_tax_rate: Decimal::new(124, 3),
            medicare_tax_rate: Decimal::new(29, 3),
            se_net_earnings_factor: Decimal::new(9235, 4),
            se_deduction_factor: Decimal::new(50, 2),
            se_minimum_net_profit: Decimal::from(400),
            brackets: BracketSchedules {
                single: single_schedule,
                married_filing_jointly: mfj_schedule,
                married_filing_separately: mfs_schedule,
                head_of_household: hoh_schedule,
                // No published QSS schedule in the source tables; the bracket
                // resolver's flat fallback covers this status.
                qualifying_surviving_spouse: Vec::new(),
            },
        }
    }

    /// Checks deduction, threshold, rate, and bracket-table sanity.
    ///
    /// Loaders call this before handing a config to the engine; the engine
    /// itself assumes a validated config and never fails.
    pub fn validate(&self) -> Result<(), YearConfigError> {
        for status in FilingStatus::ALL {
            let deduction = self.standard_deduction.get(status);
            if deduction <= Decimal::ZERO {
                return Err(YearConfigError::InvalidStandardDeduction(status, deduction));
            }
            let threshold = self.qbi_threshold.get(status);
            if threshold <= Decimal::ZERO {
                return Err(YearConfigError::InvalidQbiThreshold(status, threshold));
            }
        }
        if self.actc_per_child_cap < Decimal::ZERO {
            return Err(YearConfigError::InvalidActcCap(self.actc_per_child_cap));
        }
        if self.ss_wage_base <= Decimal::ZERO {
            return Err(YearConfigError::InvalidWageBase(self.ss_wage_base));
        }
        for (name, rate) in [
            ("ss_tax_rate", self.ss_tax_rate),
            ("medicare_tax_rate", self.medicare_tax_rate),
            ("se_net_earnings_factor", self.se_net_earnings_factor),
            ("se_deduction_factor", self.se_deduction_factor),
        ] {
            if rate < Decimal::ZERO || rate > Decimal::ONE {
                return Err(YearConfigError::InvalidRate(name, rate));
            }
        }
        for status in FilingStatus::ALL {
            self.validate_bracket_table(status)?;
        }
        Ok(())
    }

    fn validate_bracket_table(&self, status: FilingStatus) -> Result<(), YearConfigError> {
        let table = self.brackets.get(status);
        let Some(first) = table.first() else {
            // Empty table means the flat fallback applies; not a defect.
            return Ok(());
        };
        if first.over != Decimal::ZERO {
            return Err(YearConfigError::BracketTableNotAnchored(status, first.over));
        }
        for pair in table.windows(2) {
            if pair[1].over <= pair[0].over {
                return Err(YearConfigError::BracketTableOutOfOrder(
                    status,
                    pair[1].over,
                ));
            }
        }
        for bracket in table {
            if bracket.rate < Decimal::ZERO || bracket.rate > Decimal::ONE {
                return Err(YearConfigError::InvalidBracketRate(status, bracket.rate));
            }
        }
        Ok(())
    }
}

impl Default for YearConfig {
    fn default() -> Self {
        Self::for_2025()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn for_2025_passes_validation() {
        let config = YearConfig::for_2025();

        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn for_2025_standard_deductions_match_published_values() {
        let config = YearConfig::for_2025();

        assert_eq!(config.standard_deduction.get(FilingStatus::Single), dec!(15750));
        assert_eq!(
            config
                .standard_deduction
                .get(FilingStatus::MarriedFilingJointly),
            dec!(31500)
        );
        assert_eq!(
            config.standard_deduction.get(FilingStatus::HeadOfHousehold),
            dec!(23625)
        );
    }

    #[test]
    fn for_2025_has_no_qss_bracket_schedule() {
        let config = YearConfig::for_2025();

        assert!(
            config
                .brackets
                .get(FilingStatus::QualifyingSurvivingSpouse)
                .is_empty()
        );
    }

    #[test]
    fn for_2025_single_schedule_has_seven_brackets() {
        let config = YearConfig::for_2025();
        let table = config.brackets.get(FilingStatus::Single);

        assert_eq!(table.len(), 7);
        assert_eq!(table[0].over, dec!(0));
        assert_eq!(table[1].over, dec!(11925));
        assert_eq!(table[1].base, dec!(1192.50));
        assert_eq!(table[6].rate, dec!(0.37));
    }

    #[test]
    fn validate_rejects_zero_standard_deduction() {
        let mut config = YearConfig::for_2025();
        config.standard_deduction.single = dec!(0);

        assert_eq!(
            config.validate(),
            Err(YearConfigError::InvalidStandardDeduction(
                FilingStatus::Single,
                dec!(0)
            ))
        );
    }

    #[test]
    fn validate_rejects_unanchored_bracket_table() {
        let mut config = YearConfig::for_2025();
        config.brackets.single[0].over = dec!(100);

        assert_eq!(
            config.validate(),
            Err(YearConfigError::BracketTableNotAnchored(
                FilingStatus::Single,
                dec!(100)
            ))
        );
    }

    #[test]
    fn validate_rejects_out_of_order_brackets() {
        let mut config = YearConfig::for_2025();
        config.brackets.single[2].over = dec!(5000);

        assert_eq!(
            config.validate(),
            Err(YearConfigError::BracketTableOutOfOrder(
                FilingStatus::Single,
                dec!(5000)
            ))
        );
    }

    #[test]
    fn validate_rejects_rate_above_one() {
        let mut config = YearConfig::for_2025();
        config.ss_tax_rate = dec!(1.5);

        assert_eq!(
            config.validate(),
            Err(YearConfigError::InvalidRate("ss_tax_rate", dec!(1.5)))
        );
    }

    #[test]
    fn validate_accepts_empty_bracket_table() {
        let mut config = YearConfig::for_2025();
        config.brackets.single = Vec::new();

        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn status_table_uniform_applies_everywhere() {
        let table = StatusTable::uniform(dec!(1234));

        for status in FilingStatus::ALL {
            assert_eq!(table.get(status), dec!(1234));
        }
    }

    #[test]
    fn bracket_schedules_set_replaces_table() {
        let mut schedules = BracketSchedules::default();
        schedules.set(
            FilingStatus::QualifyingSurvivingSpouse,
            vec![TaxBracket::new(dec!(0), dec!(0.10), dec!(0))],
        );

        assert_eq!(
            schedules.get(FilingStatus::QualifyingSurvivingSpouse).len(),
            1
        );
    }
}
