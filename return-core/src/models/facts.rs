//! Taxpayer input facts.
//!
//! Everything the engine consumes for one computation lives here: the filing
//! status, dependent counts, and the typed entries for each supported income
//! document and schedule. All numeric fields tolerate absent or malformed
//! input by coercing to zero at deserialization time, so a facts file can
//! always be ingested and computed. Saved returns from older releases used
//! shorter field spellings in places; those are accepted as serde aliases and
//! normalized into the single typed field on ingestion.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

use crate::models::FilingStatus;

/// Which person on a joint return an entry belongs to.
///
/// Anything other than the spouse tag resolves to the primary taxpayer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Owner {
    #[default]
    Taxpayer,
    Spouse,
}

/// Form 8949 reporting category. A, B, C are short-term boxes; D, E, F are
/// long-term boxes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SaleCategory {
    A,
    B,
    C,
    D,
    E,
    F,
}

impl SaleCategory {
    pub const ALL: [SaleCategory; 6] = [Self::A, Self::B, Self::C, Self::D, Self::E, Self::F];

    pub fn is_long_term(&self) -> bool {
        matches!(self, Self::D | Self::E | Self::F)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::E => "E",
            Self::F => "F",
        }
    }
}

/// Holding-period term for a capital loss carryover.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CarryoverTerm {
    #[default]
    #[serde(rename = "ST")]
    ShortTerm,
    #[serde(rename = "LT")]
    LongTerm,
}

// ---------------------------------------------------------------------------
// Lenient field deserializers
//
// Saved facts come from hand-edited JSON and from exports of the older form
// UI, where every numeric input went through a parse-or-zero step. The same
// contract applies here: a missing, null, or unparsable value is zero (or
// None for dates), never a deserialization error.
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
#[serde(untagged)]
enum LenientNumber {
    Value(Decimal),
    Text(String),
    Other(IgnoredAny),
}

fn lenient_decimal<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<LenientNumber>::deserialize(deserializer)? {
        Some(LenientNumber::Value(value)) => Ok(value),
        Some(LenientNumber::Text(text)) => Ok(text.trim().parse().unwrap_or(Decimal::ZERO)),
        _ => Ok(Decimal::ZERO),
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LenientCount {
    Value(u32),
    Text(String),
    Other(IgnoredAny),
}

fn lenient_count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<LenientCount>::deserialize(deserializer)? {
        Some(LenientCount::Value(value)) => Ok(value),
        Some(LenientCount::Text(text)) => Ok(text.trim().parse().unwrap_or(0)),
        _ => Ok(0),
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LenientDate {
    Value(NaiveDate),
    Text(String),
    Other(IgnoredAny),
}

fn lenient_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<LenientDate>::deserialize(deserializer)? {
        Some(LenientDate::Value(date)) => Ok(Some(date)),
        Some(LenientDate::Text(text)) => {
            let text = text.trim();
            Ok(NaiveDate::parse_from_str(text, "%Y-%m-%d")
                .or_else(|_| NaiveDate::parse_from_str(text, "%m/%d/%Y"))
                .ok())
        }
        _ => Ok(None),
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LenientFlag {
    Bool(bool),
    Number(Decimal),
    Text(String),
    Other(IgnoredAny),
}

/// Truthiness in the style of the historical form exports: numbers are true
/// when nonzero, strings when non-empty.
fn lenient_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<LenientFlag>::deserialize(deserializer)? {
        Some(LenientFlag::Bool(value)) => Ok(value),
        Some(LenientFlag::Number(value)) => Ok(!value.is_zero()),
        Some(LenientFlag::Text(text)) => Ok(!text.is_empty()),
        _ => Ok(false),
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LenientOwner {
    Value(Owner),
    Other(IgnoredAny),
}

fn lenient_owner<'de, D>(deserializer: D) -> Result<Owner, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<LenientOwner>::deserialize(deserializer)? {
        Some(LenientOwner::Value(owner)) => Ok(owner),
        _ => Ok(Owner::Taxpayer),
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LenientCategory {
    Value(SaleCategory),
    Other(IgnoredAny),
}

fn lenient_category<'de, D>(deserializer: D) -> Result<Option<SaleCategory>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<LenientCategory>::deserialize(deserializer)? {
        Some(LenientCategory::Value(category)) => Ok(Some(category)),
        _ => Ok(None),
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LenientTerm {
    Value(CarryoverTerm),
    Other(IgnoredAny),
}

fn lenient_term<'de, D>(deserializer: D) -> Result<CarryoverTerm, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<LenientTerm>::deserialize(deserializer)? {
        Some(LenientTerm::Value(term)) => Ok(term),
        _ => Ok(CarryoverTerm::ShortTerm),
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LenientStatus {
    Value(FilingStatus),
    Other(IgnoredAny),
}

fn lenient_status<'de, D>(deserializer: D) -> Result<FilingStatus, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<LenientStatus>::deserialize(deserializer)? {
        Some(LenientStatus::Value(status)) => Ok(status),
        _ => Ok(FilingStatus::Single),
    }
}

// ---------------------------------------------------------------------------
// Income documents
// ---------------------------------------------------------------------------

/// One W-2 wage statement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WageStatement {
    #[serde(default)]
    pub employer: String,

    #[serde(default, deserialize_with = "lenient_owner")]
    pub owner: Owner,

    /// Box 1 wages.
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub wages: Decimal,

    /// Box 2 federal income tax withheld.
    #[serde(default, alias = "fedTax", deserialize_with = "lenient_decimal")]
    pub federal_withholding: Decimal,

    /// Box 3 Social Security wages.
    #[serde(default, alias = "ssWages", deserialize_with = "lenient_decimal")]
    pub social_security_wages: Decimal,

    /// Box 4 Social Security tax withheld.
    #[serde(default, alias = "ssTax", deserialize_with = "lenient_decimal")]
    pub social_security_tax: Decimal,

    /// Box 5 Medicare wages.
    #[serde(default, alias = "medWages", deserialize_with = "lenient_decimal")]
    pub medicare_wages: Decimal,

    /// Box 6 Medicare tax withheld.
    #[serde(default, alias = "medTax", deserialize_with = "lenient_decimal")]
    pub medicare_tax: Decimal,
}

impl WageStatement {
    /// Social Security wages for the SE wage-base coordination.
    ///
    /// Employers that leave box 3 blank are treated as having box 1 fully
    /// covered, so an empty or zero box 3 falls back to box 1 wages.
    pub fn effective_social_security_wages(&self) -> Decimal {
        if self.social_security_wages.is_zero() {
            self.wages
        } else {
            self.social_security_wages
        }
    }
}

/// One 1099-INT interest statement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterestStatement {
    #[serde(default)]
    pub payer: String,

    /// Box 1 interest income.
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub amount: Decimal,

    #[serde(default, alias = "fedTax", deserialize_with = "lenient_decimal")]
    pub federal_withholding: Decimal,
}

/// One 1099-DIV dividend statement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DividendStatement {
    #[serde(default)]
    pub payer: String,

    /// Box 1a total ordinary dividends.
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub ordinary: Decimal,

    /// Box 1b qualified dividends (informational for the QBI capital-gain
    /// limit; all dividends are taxed at ordinary rates here).
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub qualified: Decimal,

    #[serde(default, alias = "fedTax", deserialize_with = "lenient_decimal")]
    pub federal_withholding: Decimal,
}

/// One 1099-MISC statement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MiscStatement {
    #[serde(default)]
    pub payer: String,

    #[serde(default, deserialize_with = "lenient_decimal")]
    pub rents: Decimal,

    #[serde(default, deserialize_with = "lenient_decimal")]
    pub royalties: Decimal,

    #[serde(default, deserialize_with = "lenient_decimal")]
    pub other_income: Decimal,

    #[serde(default, alias = "fedTax", deserialize_with = "lenient_decimal")]
    pub federal_withholding: Decimal,
}

/// One 1099-R retirement distribution statement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RetirementStatement {
    #[serde(default)]
    pub payer: String,

    /// Box 1 gross distribution.
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub gross_distribution: Decimal,

    /// Box 2a taxable amount. Left at zero when the payer reported none;
    /// never inferred from the gross amount.
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub taxable_amount: Decimal,

    #[serde(default, alias = "fedTax", deserialize_with = "lenient_decimal")]
    pub federal_withholding: Decimal,

    /// IRA/SEP/SIMPLE checkbox; splits the distribution between lines 4 and 5.
    #[serde(default, alias = "isIRA", deserialize_with = "lenient_flag")]
    pub is_ira: bool,
}

/// One SSA-1099 Social Security benefit statement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BenefitStatement {
    #[serde(default, alias = "person", deserialize_with = "lenient_owner")]
    pub owner: Owner,

    /// Box 5 net benefits.
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub net_benefits: Decimal,

    #[serde(default, alias = "fedTax", deserialize_with = "lenient_decimal")]
    pub federal_withholding: Decimal,
}

// ---------------------------------------------------------------------------
// Schedule activity entries
// ---------------------------------------------------------------------------

/// One Schedule C business activity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessEntry {
    #[serde(default)]
    pub name: String,

    #[serde(default, deserialize_with = "lenient_owner")]
    pub owner: Owner,

    #[serde(default, deserialize_with = "lenient_decimal")]
    pub gross_receipts: Decimal,

    #[serde(default, deserialize_with = "lenient_decimal")]
    pub total_expenses: Decimal,
}

/// One Schedule D capital transaction: either a current-year sale or a
/// prior-year loss carryover. The two carry disjoint fields, so they are
/// separate variants rather than one struct with an unused half.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum CapitalTransaction {
    #[serde(rename_all = "camelCase")]
    Sale {
        description: String,
        /// Form 8949 box, when the preparer assigned one. Absent means the
        /// holding period decides the term.
        category: Option<SaleCategory>,
        date_acquired: Option<NaiveDate>,
        date_sold: Option<NaiveDate>,
        proceeds: Decimal,
        basis: Decimal,
    },
    #[serde(rename_all = "camelCase")]
    Carryover { term: CarryoverTerm, amount: Decimal },
}

impl CapitalTransaction {
    pub fn sale(proceeds: Decimal, basis: Decimal) -> Self {
        Self::Sale {
            description: String::new(),
            category: None,
            date_acquired: None,
            date_sold: None,
            proceeds,
            basis,
        }
    }

    pub fn carryover(term: CarryoverTerm, amount: Decimal) -> Self {
        Self::Carryover { term, amount }
    }
}

// Entries written by the historical UI carry a `type` discriminator of
// "sale" or "carryover"; anything else (including a missing tag) was read
// as a sale there, and the same rule applies on ingestion here.
impl<'de> Deserialize<'de> for CapitalTransaction {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct Raw {
            #[serde(rename = "type", default)]
            kind: String,
            #[serde(default)]
            description: String,
            #[serde(default, deserialize_with = "lenient_category")]
            category: Option<SaleCategory>,
            #[serde(default, deserialize_with = "lenient_date")]
            date_acquired: Option<NaiveDate>,
            #[serde(default, deserialize_with = "lenient_date")]
            date_sold: Option<NaiveDate>,
            #[serde(default, deserialize_with = "lenient_decimal")]
            proceeds: Decimal,
            #[serde(default, deserialize_with = "lenient_decimal")]
            basis: Decimal,
            #[serde(default, alias = "carryoverTerm", deserialize_with = "lenient_term")]
            term: CarryoverTerm,
            #[serde(default, alias = "carryoverAmount", deserialize_with = "lenient_decimal")]
            amount: Decimal,
        }

        let raw = Raw::deserialize(deserializer)?;
        if raw.kind == "carryover" {
            Ok(Self::Carryover {
                term: raw.term,
                amount: raw.amount,
            })
        } else {
            Ok(Self::Sale {
                description: raw.description,
                category: raw.category,
                date_acquired: raw.date_acquired,
                date_sold: raw.date_sold,
                proceeds: raw.proceeds,
                basis: raw.basis,
            })
        }
    }
}

/// One Schedule E rental or royalty property.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentalEntry {
    #[serde(default)]
    pub description: String,

    #[serde(default, deserialize_with = "lenient_decimal")]
    pub rents: Decimal,

    #[serde(default, deserialize_with = "lenient_decimal")]
    pub royalties: Decimal,

    #[serde(default, deserialize_with = "lenient_decimal")]
    pub expenses: Decimal,
}

/// Dependent counts for Schedule 8812.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dependents {
    /// Children under 17 qualifying for the child tax credit.
    #[serde(default, deserialize_with = "lenient_count")]
    pub qualifying_children: u32,

    /// Dependents qualifying only for the credit for other dependents.
    #[serde(default, deserialize_with = "lenient_count")]
    pub other_dependents: u32,
}

/// Schedule B Part III foreign account and trust disclosure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForeignDisclosure {
    #[serde(default, alias = "foreignAccounts", deserialize_with = "lenient_flag")]
    pub has_foreign_accounts: bool,

    #[serde(default, alias = "foreignTrust", deserialize_with = "lenient_flag")]
    pub has_foreign_trust: bool,

    #[serde(default)]
    pub country: String,
}

/// Schedule 3 credit and payment amounts, supplied directly by the preparer.
///
/// Part I fields are nonrefundable credits; Part II fields are refundable
/// credits and payments. Aliases cover the abbreviated spellings written by
/// older exports; the long form always wins when both are present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdditionalCredits {
    #[serde(default, alias = "foreignTax", deserialize_with = "lenient_decimal")]
    pub foreign_tax_credit: Decimal,

    #[serde(default, alias = "childCare", deserialize_with = "lenient_decimal")]
    pub child_care_credit: Decimal,

    #[serde(default, alias = "education", deserialize_with = "lenient_decimal")]
    pub education_credit: Decimal,

    #[serde(default, alias = "retirement", deserialize_with = "lenient_decimal")]
    pub retirement_credit: Decimal,

    #[serde(default, alias = "energyClean", deserialize_with = "lenient_decimal")]
    pub energy_clean_credit: Decimal,

    #[serde(default, alias = "energyEfficient", deserialize_with = "lenient_decimal")]
    pub energy_efficient_credit: Decimal,

    #[serde(default, deserialize_with = "lenient_decimal")]
    pub other_nonrefundable: Decimal,

    #[serde(default, alias = "premiumTax", deserialize_with = "lenient_decimal")]
    pub premium_tax_credit: Decimal,

    #[serde(default, deserialize_with = "lenient_decimal")]
    pub extension_payment: Decimal,

    #[serde(default, alias = "excessSS", deserialize_with = "lenient_decimal")]
    pub excess_social_security: Decimal,

    #[serde(default, deserialize_with = "lenient_decimal")]
    pub fuel_credit: Decimal,

    #[serde(default, deserialize_with = "lenient_decimal")]
    pub other_refundable: Decimal,
}

/// Complete set of facts for one return computation.
///
/// A default-constructed value is a valid (if empty) return: every engine
/// operation accepts it and produces an all-zero result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxpayerFacts {
    #[serde(default, deserialize_with = "lenient_status")]
    pub filing_status: FilingStatus,

    #[serde(default)]
    pub dependents: Dependents,

    #[serde(default, alias = "w2")]
    pub wage_statements: Vec<WageStatement>,

    #[serde(default, alias = "int")]
    pub interest_statements: Vec<InterestStatement>,

    #[serde(default, alias = "div")]
    pub dividend_statements: Vec<DividendStatement>,

    #[serde(default, alias = "misc")]
    pub misc_statements: Vec<MiscStatement>,

    #[serde(default, alias = "r")]
    pub retirement_statements: Vec<RetirementStatement>,

    #[serde(default, alias = "ssa")]
    pub benefit_statements: Vec<BenefitStatement>,

    #[serde(default, alias = "scheduleC")]
    pub businesses: Vec<BusinessEntry>,

    #[serde(default, alias = "scheduleD")]
    pub capital_transactions: Vec<CapitalTransaction>,

    #[serde(default, alias = "scheduleE")]
    pub rental_properties: Vec<RentalEntry>,

    #[serde(default, alias = "scheduleB")]
    pub foreign_disclosure: ForeignDisclosure,

    #[serde(default, alias = "schedule3")]
    pub additional_credits: AdditionalCredits,
}

impl TaxpayerFacts {
    /// Sum of box 1 wages across all W-2s.
    pub fn total_wages(&self) -> Decimal {
        self.wage_statements.iter().map(|w| w.wages).sum()
    }

    /// Effective Social Security wages for one owner, for the SE wage-base
    /// coordination.
    pub fn social_security_wages_for(&self, owner: Owner) -> Decimal {
        self.wage_statements
            .iter()
            .filter(|w| w.owner == owner)
            .map(WageStatement::effective_social_security_wages)
            .sum()
    }

    /// Federal withholding reported on W-2s.
    pub fn wage_withholding(&self) -> Decimal {
        self.wage_statements
            .iter()
            .map(|w| w.federal_withholding)
            .sum()
    }

    /// Federal withholding reported on every non-W-2 document (1099-INT,
    /// 1099-DIV, 1099-MISC, 1099-R, SSA-1099).
    pub fn other_withholding(&self) -> Decimal {
        let interest: Decimal = self
            .interest_statements
            .iter()
            .map(|f| f.federal_withholding)
            .sum();
        let dividends: Decimal = self
            .dividend_statements
            .iter()
            .map(|f| f.federal_withholding)
            .sum();
        let misc: Decimal = self
            .misc_statements
            .iter()
            .map(|f| f.federal_withholding)
            .sum();
        let retirement: Decimal = self
            .retirement_statements
            .iter()
            .map(|f| f.federal_withholding)
            .sum();
        let benefits: Decimal = self
            .benefit_statements
            .iter()
            .map(|f| f.federal_withholding)
            .sum();
        interest + dividends + misc + retirement + benefits
    }
}
