//! Year constants loading from TOML.
//!
//! The constants file carries the annually republished amounts that are not
//! bracket schedules: standard deductions, QBI thresholds, the ACTC
//! per-child cap, and the SE tax rates and wage base. Every field is
//! optional; the loader merges the file over a base configuration (normally
//! the built-in year) and validates the result, so a partial file that
//! overrides one table is as valid as a complete one.
//!
//! ```toml
//! tax_year = 2025
//! actc_per_child_cap = 1700
//! ss_wage_base = 176100
//! ss_tax_rate = "0.124"
//!
//! [standard_deduction]
//! single = 15750
//! married_filing_jointly = 31500
//! married_filing_separately = 15750
//! head_of_household = 23625
//! qualifying_surviving_spouse = 31500
//! ```

use std::fs;
use std::path::Path;

use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

use return_core::models::{StatusTable, YearConfig, YearConfigError};

/// Errors that can occur when loading a constants file.
#[derive(Debug, Error)]
pub enum ConstantsFileError {
    #[error("failed to read constants file: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("invalid configuration: {0}")]
    Invalid(#[from] YearConfigError),
}

/// One amount per filing status, in the file's snake_case spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StatusAmounts {
    pub single: Decimal,
    pub married_filing_jointly: Decimal,
    pub married_filing_separately: Decimal,
    pub head_of_household: Decimal,
    pub qualifying_surviving_spouse: Decimal,
}

impl From<StatusAmounts> for StatusTable {
    fn from(amounts: StatusAmounts) -> Self {
        StatusTable {
            single: amounts.single,
            married_filing_jointly: amounts.married_filing_jointly,
            married_filing_separately: amounts.married_filing_separately,
            head_of_household: amounts.head_of_household,
            qualifying_surviving_spouse: amounts.qualifying_surviving_spouse,
        }
    }
}

/// Parsed constants file; every field optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConstantsFile {
    pub tax_year: Option<i32>,
    pub standard_deduction: Option<StatusAmounts>,
    pub qbi_threshold: Option<StatusAmounts>,
    pub actc_per_child_cap: Option<Decimal>,
    pub ss_wage_base: Option<Decimal>,
    pub ss_tax_rate: Option<Decimal>,
    pub medicare_tax_rate: Option<Decimal>,
    pub se_net_earnings_factor: Option<Decimal>,
    pub se_deduction_factor: Option<Decimal>,
    pub se_minimum_net_profit: Option<Decimal>,
}

/// Loader for year constants from TOML files.
pub struct ConstantsLoader;

impl ConstantsLoader {
    pub fn parse(text: &str) -> Result<ConstantsFile, ConstantsFileError> {
        Ok(toml::from_str(text)?)
    }

    /// Merges file values over `base` and validates the result.
    pub fn merge(
        file: ConstantsFile,
        mut base: YearConfig,
    ) -> Result<YearConfig, ConstantsFileError> {
        if let Some(tax_year) = file.tax_year {
            base.tax_year = tax_year;
        }
        if let Some(table) = file.standard_deduction {
            base.standard_deduction = table.into();
        }
        if let Some(table) = file.qbi_threshold {
            base.qbi_threshold = table.into();
        }
        if let Some(cap) = file.actc_per_child_cap {
            base.actc_per_child_cap = cap;
        }
        if let Some(wage_base) = file.ss_wage_base {
            base.ss_wage_base = wage_base;
        }
        if let Some(rate) = file.ss_tax_rate {
            base.ss_tax_rate = rate;
        }
        if let Some(rate) = file.medicare_tax_rate {
            base.medicare_tax_rate = rate;
        }
        if let Some(factor) = file.se_net_earnings_factor {
            base.se_net_earnings_factor = factor;
        }
        if let Some(factor) = file.se_deduction_factor {
            base.se_deduction_factor = factor;
        }
        if let Some(minimum) = file.se_minimum_net_profit {
            base.se_minimum_net_profit = minimum;
        }

        base.validate()?;
        Ok(base)
    }

    /// Reads, parses, and merges a constants file over `base`.
    pub fn load(
        path: &Path,
        base: YearConfig,
    ) -> Result<YearConfig, ConstantsFileError> {
        let text = fs::read_to_string(path)?;
        Self::merge(Self::parse(&text)?, base)
    }
}
