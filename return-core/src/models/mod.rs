mod facts;
mod filing_status;
mod tax_bracket;
mod year_config;

pub use facts::{
    AdditionalCredits, BenefitStatement, BusinessEntry, CapitalTransaction, CarryoverTerm,
    Dependents, DividendStatement, ForeignDisclosure, InterestStatement, MiscStatement, Owner,
    RentalEntry, RetirementStatement, SaleCategory, TaxpayerFacts, WageStatement,
};
pub use filing_status::FilingStatus;
pub use tax_bracket::TaxBracket;
pub use year_config::{BracketSchedules, StatusTable, YearConfig, YearConfigError};
