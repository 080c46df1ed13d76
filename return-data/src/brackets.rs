//! Bracket schedule loading from CSV.
//!
//! The CSV uses the IRS rate-schedule designations, one row per bracket:
//!
//! - `tax_year`: the tax year (e.g., 2025)
//! - `schedule`: the IRS schedule code (X, Y-1, Y-2, Z)
//! - `min_income`: where this bracket starts
//! - `max_income`: where it ends (empty for the unbounded top bracket)
//! - `base_tax`: accumulated tax at `min_income`
//! - `rate`: marginal rate as a decimal (e.g., 0.10)
//!
//! Schedule X covers Single, Y-1 covers both Married Filing Jointly and
//! Qualifying Surviving Spouse, Y-2 covers Married Filing Separately, and
//! Z covers Head of Household. Each schedule must start at zero and be
//! contiguous; a defective file is a loader error, never a defective
//! engine configuration.

use std::io::Read;

use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

use return_core::models::{BracketSchedules, FilingStatus, TaxBracket};

/// Errors that can occur when loading bracket data.
#[derive(Debug, Error)]
pub enum BracketCsvError {
    #[error("CSV parse error: {0}")]
    CsvParse(String),

    #[error("invalid schedule code: {0}")]
    InvalidSchedule(String),

    #[error("no bracket rows for tax year {0}")]
    EmptyYear(i32),

    #[error("schedule {schedule} does not start at zero (first min_income {min_income})")]
    NotAnchored {
        schedule: String,
        min_income: Decimal,
    },

    #[error(
        "schedule {schedule} is not contiguous: bracket ending at {expected} \
         is followed by min_income {found}"
    )]
    Discontiguous {
        schedule: String,
        expected: Decimal,
        found: Decimal,
    },

    #[error("schedule {schedule} has an unbounded bracket before the last row")]
    UnboundedBeforeEnd { schedule: String },
}

impl From<csv::Error> for BracketCsvError {
    fn from(err: csv::Error) -> Self {
        BracketCsvError::CsvParse(err.to_string())
    }
}

/// Maps an IRS schedule code to the filing statuses it covers.
fn schedule_statuses(schedule: &str) -> Result<&'static [FilingStatus], BracketCsvError> {
    match schedule {
        "X" => Ok(&[FilingStatus::Single]),
        "Y-1" => Ok(&[
            FilingStatus::MarriedFilingJointly,
            FilingStatus::QualifyingSurvivingSpouse,
        ]),
        "Y-2" => Ok(&[FilingStatus::MarriedFilingSeparately]),
        "Z" => Ok(&[FilingStatus::HeadOfHousehold]),
        _ => Err(BracketCsvError::InvalidSchedule(schedule.to_string())),
    }
}

/// A single record from the bracket CSV file.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct BracketRecord {
    pub tax_year: i32,
    pub schedule: String,
    pub min_income: Decimal,
    #[serde(deserialize_with = "deserialize_optional_decimal")]
    pub max_income: Option<Decimal>,
    pub base_tax: Decimal,
    pub rate: Decimal,
}

fn deserialize_optional_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => s
            .trim()
            .parse::<Decimal>()
            .map(Some)
            .map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

/// Loader for bracket schedules from CSV files.
pub struct BracketCsvLoader;

impl BracketCsvLoader {
    /// Parses bracket records from a CSV reader.
    ///
    /// The reader can be any type that implements `Read`, such as a file or
    /// a string slice.
    pub fn parse<R: Read>(reader: R) -> Result<Vec<BracketRecord>, BracketCsvError> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut records = Vec::new();

        for result in csv_reader.deserialize() {
            let record: BracketRecord = result?;
            records.push(record);
        }

        Ok(records)
    }

    /// Builds the per-status schedules for one tax year.
    ///
    /// Rows keep their file order within a schedule; each schedule is
    /// checked for a zero anchor and contiguity before conversion to the
    /// engine's `{over, rate, base}` form. Schedule Y-1 populates both MFJ
    /// and QSS.
    pub fn build(
        records: &[BracketRecord],
        tax_year: i32,
    ) -> Result<BracketSchedules, BracketCsvError> {
        let mut groups: std::collections::BTreeMap<&str, Vec<&BracketRecord>> =
            std::collections::BTreeMap::new();
        for record in records.iter().filter(|r| r.tax_year == tax_year) {
            groups.entry(record.schedule.as_str()).or_default().push(record);
        }
        if groups.is_empty() {
            return Err(BracketCsvError::EmptyYear(tax_year));
        }

        let mut schedules = BracketSchedules::default();
        for (schedule, rows) in groups {
            let statuses = schedule_statuses(schedule)?;
            validate_schedule(schedule, &rows)?;

            let table: Vec<TaxBracket> = rows
                .iter()
                .map(|r| TaxBracket::new(r.min_income, r.rate, r.base_tax))
                .collect();
            for status in statuses {
                schedules.set(*status, table.clone());
            }
        }

        Ok(schedules)
    }

    /// Parses and builds in one step.
    pub fn load<R: Read>(
        reader: R,
        tax_year: i32,
    ) -> Result<BracketSchedules, BracketCsvError> {
        let records = Self::parse(reader)?;
        Self::build(&records, tax_year)
    }
}

fn validate_schedule(
    schedule: &str,
    rows: &[&BracketRecord],
) -> Result<(), BracketCsvError> {
    let first = rows[0];
    if first.min_income != Decimal::ZERO {
        return Err(BracketCsvError::NotAnchored {
            schedule: schedule.to_string(),
            min_income: first.min_income,
        });
    }

    for pair in rows.windows(2) {
        let Some(expected) = pair[0].max_income else {
            return Err(BracketCsvError::UnboundedBeforeEnd {
                schedule: schedule.to_string(),
            });
        };
        if pair[1].min_income != expected {
            return Err(BracketCsvError::Discontiguous {
                schedule: schedule.to_string(),
                expected,
                found: pair[1].min_income,
            });
        }
    }

    Ok(())
}
