//! Form 1040 orchestrator.
//!
//! Sequences every schedule and worksheet into a complete return in the
//! strict order the form imposes: income documents and Schedules C/D/E
//! first, Schedule SE per owner, then the Social Security worksheet (which
//! needs everything above it), total income through taxable income, the
//! bracket tax, credits, other taxes, payments, and settlement.
//!
//! Computed amounts land in a line map keyed by the printed form line:
//!
//! | Line | Description |
//! |------|-------------|
//! | 1z   | Wages (sum of W-2 box 1) |
//! | 2b   | Taxable interest |
//! | 3b   | Ordinary dividends |
//! | 4b   | Taxable IRA distributions |
//! | 5b   | Taxable pensions and annuities |
//! | 6a   | Social Security benefits |
//! | 6b   | Taxable Social Security benefits |
//! | 7    | Capital gain or loss, after the loss floor |
//! | 8    | Other income from Schedule 1 (C + E + 1099-MISC) |
//! | 9    | Total income |
//! | 10   | Adjustments (deductible half of SE tax) |
//! | 11   | Adjusted gross income |
//! | 12   | Standard deduction |
//! | 13   | QBI deduction |
//! | 14   | Line 12 + line 13 |
//! | 15   | Taxable income |
//! | 16   | Tax from the bracket schedules |
//! | 19   | Child tax credit and credit for other dependents |
//! | 20   | Schedule 3 nonrefundable credits |
//! | 21   | Total credits |
//! | 22   | Tax after credits |
//! | 23   | Other taxes (SE tax) |
//! | 24   | Total tax |
//! | 25a  | W-2 withholding |
//! | 25b  | 1099 and SSA-1099 withholding |
//! | 25d  | Total withholding |
//! | 28   | Additional child tax credit |
//! | 31   | Schedule 3 refundable credits and payments |
//! | 32   | Other payments and refundable credits |
//! | 33   | Total payments |
//! | 34   | Overpayment |
//! | 37   | Amount owed |
//!
//! The computation is total: every fact set and every validated config
//! produce a complete result. Degraded conditions (missing bracket table,
//! loss clamp, QBI gate, SE threshold, ACTC earned-income gate) surface as
//! flags on the sub-results and as warn-level log events, never as errors.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use return_core::models::{TaxpayerFacts, WageStatement, YearConfig};
//!
//! let facts = TaxpayerFacts {
//!     wage_statements: vec![WageStatement {
//!         wages: dec!(60000),
//!         federal_withholding: dec!(5000),
//!         ..WageStatement::default()
//!     }],
//!     ..TaxpayerFacts::default()
//! };
//!
//! let result = return_core::compute_return(&facts, &YearConfig::for_2025());
//!
//! assert_eq!(result.lines["15"], dec!(44250));
//! assert_eq!(result.lines["16"], dec!(5071.50));
//! assert_eq!(result.lines["37"], dec!(71.50));
//! ```

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::bracket_tax::{BracketResolver, BracketSource};
use crate::calculations::common::non_negative;
use crate::calculations::schedules::{
    ScheduleBResult, ScheduleCResult, ScheduleDResult, ScheduleEResult, ScheduleThreeResult,
    SeSchedule, SeSummary, schedule_b, schedule_c, schedule_d, schedule_e, schedule_three,
};
use crate::calculations::worksheets::{
    BenefitsResult, ChildCreditInput, ChildCreditResult, QbiResult, child_credit, qbi_deduction,
    social_security,
};
use crate::models::{FilingStatus, Owner, TaxpayerFacts, YearConfig};

/// Return-level metadata echoed alongside the line map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReturnMeta {
    pub filing_status: FilingStatus,
    pub tax_year: i32,

    /// How line 16 was computed; [`BracketSource::FlatFallback`] marks the
    /// degraded flat-rate mode.
    pub bracket_source: BracketSource,
}

/// Complete computed return: the Form 1040 line map, metadata, and every
/// sub-schedule and worksheet result.
///
/// The line map is ordered, so serialization is byte-stable for identical
/// inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Form1040 {
    pub lines: BTreeMap<String, Decimal>,
    pub meta: ReturnMeta,

    pub schedule_c: ScheduleCResult,
    pub schedule_se: SeSummary,
    pub schedule_d: ScheduleDResult,
    pub schedule_e: ScheduleEResult,
    pub schedule_b: ScheduleBResult,
    pub schedule_three: ScheduleThreeResult,
    pub social_security: BenefitsResult,
    pub qbi: QbiResult,
    pub child_credit: ChildCreditResult,
}

impl Form1040 {
    /// Looks up a line amount, treating absent lines as zero.
    pub fn line(&self, id: &str) -> Decimal {
        self.lines.get(id).copied().unwrap_or(Decimal::ZERO)
    }
}

/// Computes a complete return for one fact set under one year's config.
pub fn compute_return(facts: &TaxpayerFacts, config: &YearConfig) -> Form1040 {
    Form1040Worksheet::new(config).calculate(facts)
}

/// Form 1040 calculator bound to one year's configuration.
#[derive(Debug, Clone)]
pub struct Form1040Worksheet<'a> {
    config: &'a YearConfig,
}

impl<'a> Form1040Worksheet<'a> {
    pub fn new(config: &'a YearConfig) -> Self {
        Self { config }
    }

    /// Runs the full pipeline. Total: never fails, never panics.
    pub fn calculate(&self, facts: &TaxpayerFacts) -> Form1040 {
        let status = facts.filing_status;

        // Independent schedules first.
        let schedule_c = schedule_c::calculate(&facts.businesses);
        let schedule_d = schedule_d::calculate(&facts.capital_transactions, status);
        let schedule_e = schedule_e::calculate(&facts.rental_properties);
        let schedule_b = schedule_b::calculate(
            &facts.interest_statements,
            &facts.dividend_statements,
            &facts.foreign_disclosure,
        );
        let schedule_three = schedule_three::calculate(&facts.additional_credits);

        // Schedule SE runs per owner against that owner's Schedule C net and
        // W-2 social security wages.
        let se_schedule = SeSchedule::new(self.config);
        let schedule_se = SeSummary::combine(
            se_schedule.calculate(
                schedule_c.net_for(Owner::Taxpayer),
                facts.social_security_wages_for(Owner::Taxpayer),
            ),
            se_schedule.calculate(
                schedule_c.net_for(Owner::Spouse),
                facts.social_security_wages_for(Owner::Spouse),
            ),
        );

        // Income document lines.
        let wages = facts.total_wages();
        let interest = schedule_b.total_interest;
        let dividends = schedule_b.total_dividends;
        let (ira_taxable, pension_taxable) = facts.retirement_statements.iter().fold(
            (Decimal::ZERO, Decimal::ZERO),
            |(ira, pension), statement| {
                if statement.is_ira {
                    (ira + statement.taxable_amount, pension)
                } else {
                    (ira, pension + statement.taxable_amount)
                }
            },
        );
        let retirement_taxable = ira_taxable + pension_taxable;
        let misc_income: Decimal = facts
            .misc_statements
            .iter()
            .map(|f| f.rents + f.royalties + f.other_income)
            .sum();

        // The benefits worksheet sees every other income component already
        // computed for the return; 1099-MISC income is not part of its
        // "other income" and the capital amount is the post-clamp line 7.
        let net_benefits: Decimal = facts
            .benefit_statements
            .iter()
            .map(|f| f.net_benefits)
            .sum();
        let other_income_for_benefits = wages
            + interest
            + dividends
            + retirement_taxable
            + schedule_c.combined_net
            + schedule_d.line7_amount
            + schedule_e.net;
        let social_security =
            social_security::calculate(net_benefits, other_income_for_benefits, status);

        // Total income through taxable income.
        let line_8 = schedule_c.combined_net + schedule_e.net + misc_income;
        let line_9 = wages
            + interest
            + dividends
            + retirement_taxable
            + social_security.taxable_amount
            + schedule_d.line7_amount
            + line_8;
        let line_10 = schedule_se.total_deduction;
        let line_11 = non_negative(line_9 - line_10);

        // Net capital gain for the income limit is the Schedule D amount
        // when positive; qualified dividends do not reduce the limit.
        let line_12 = self.config.standard_deduction.get(status);
        let taxable_before_qbi = non_negative(line_11 - line_12);
        let qbi = qbi_deduction::calculate(
            non_negative(schedule_c.combined_net - schedule_se.total_deduction),
            taxable_before_qbi,
            non_negative(schedule_d.line7_amount),
            self.config.qbi_threshold.get(status),
        );
        let line_13 = qbi.deduction;
        let line_14 = line_12 + line_13;
        let line_15 = non_negative(line_11 - line_14);

        let bracket = BracketResolver::new(&self.config.brackets).tax_for(status, line_15);
        let line_16 = bracket.tax;

        // Credits. Earned income for Schedule 8812 is wages plus positive
        // self-employment earnings after the SE deduction; MAGI equals AGI.
        let earned_income =
            wages + non_negative(schedule_c.combined_net - schedule_se.total_deduction);
        let child_credit = child_credit::calculate(
            &ChildCreditInput {
                qualifying_children: facts.dependents.qualifying_children,
                other_dependents: facts.dependents.other_dependents,
                modified_agi: line_11,
                filing_status: status,
                earned_income,
                tax_before_credits: line_16,
            },
            self.config.actc_per_child_cap,
        );

        let line_19 = child_credit.nonrefundable_credit;
        let line_20 = schedule_three.total_nonrefundable;
        let line_21 = line_19 + line_20;
        let line_22 = non_negative(line_16 - line_21);
        let line_23 = schedule_se.total_tax;
        let line_24 = line_22 + line_23;

        // Payments and settlement.
        let line_25a = facts.wage_withholding();
        let line_25b = facts.other_withholding();
        let line_25d = line_25a + line_25b;
        let line_28 = child_credit.additional_credit;
        let line_31 = schedule_three.total_refundable;
        let line_32 = line_28 + line_31;
        let line_33 = line_25d + line_32;

        let line_34 = non_negative(line_33 - line_24);
        let line_37 = non_negative(line_24 - line_33);

        let mut lines = BTreeMap::new();
        for (id, amount) in [
            ("1z", wages),
            ("2b", interest),
            ("3b", dividends),
            ("4b", ira_taxable),
            ("5b", pension_taxable),
            ("6a", social_security.total_benefits),
            ("6b", social_security.taxable_amount),
            ("7", schedule_d.line7_amount),
            ("8", line_8),
            ("9", line_9),
            ("10", line_10),
            ("11", line_11),
            ("12", line_12),
            ("13", line_13),
            ("14", line_14),
            ("15", line_15),
            ("16", line_16),
            ("19", line_19),
            ("20", line_20),
            ("21", line_21),
            ("22", line_22),
            ("23", line_23),
            ("24", line_24),
            ("25a", line_25a),
            ("25b", line_25b),
            ("25d", line_25d),
            ("28", line_28),
            ("31", line_31),
            ("32", line_32),
            ("33", line_33),
            ("34", line_34),
            ("37", line_37),
        ] {
            lines.insert(id.to_string(), amount);
        }

        Form1040 {
            lines,
            meta: ReturnMeta {
                filing_status: status,
                tax_year: self.config.tax_year,
                bracket_source: bracket.source,
            },
            schedule_c,
            schedule_se,
            schedule_d,
            schedule_e,
            schedule_b,
            schedule_three,
            social_security,
            qbi,
            child_credit,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use crate::models::{
        AdditionalCredits, BenefitStatement, BusinessEntry, CapitalTransaction, CarryoverTerm,
        Dependents, DividendStatement, InterestStatement, MiscStatement, RetirementStatement,
        WageStatement,
    };

    use super::*;

    fn config() -> YearConfig {
        YearConfig::for_2025()
    }

    fn w2(wages: Decimal, withholding: Decimal) -> WageStatement {
        WageStatement {
            wages,
            federal_withholding: withholding,
            ..WageStatement::default()
        }
    }

    // =========================================================================
    // Wage-only return
    // =========================================================================

    #[test]
    fn single_w2_return_computes_end_to_end() {
        let facts = TaxpayerFacts {
            wage_statements: vec![w2(dec!(60000), dec!(5000))],
            ..TaxpayerFacts::default()
        };

        let result = compute_return(&facts, &config());

        assert_eq!(result.line("1z"), dec!(60000));
        assert_eq!(result.line("9"), dec!(60000));
        assert_eq!(result.line("11"), dec!(60000));
        assert_eq!(result.line("12"), dec!(15750));
        assert_eq!(result.line("15"), dec!(44250));
        assert_eq!(result.line("16"), dec!(5071.50));
        assert_eq!(result.line("24"), dec!(5071.50));
        assert_eq!(result.line("25a"), dec!(5000));
        assert_eq!(result.line("33"), dec!(5000));
        assert_eq!(result.line("34"), dec!(0));
        assert_eq!(result.line("37"), dec!(71.50));
        assert_eq!(result.meta.bracket_source, BracketSource::Standard);
    }

    #[test]
    fn withholding_above_tax_produces_a_refund() {
        let facts = TaxpayerFacts {
            wage_statements: vec![w2(dec!(60000), dec!(8000))],
            ..TaxpayerFacts::default()
        };

        let result = compute_return(&facts, &config());

        assert_eq!(result.line("34"), dec!(2928.50));
        assert_eq!(result.line("37"), dec!(0));
    }

    // =========================================================================
    // Self-employment return
    // =========================================================================

    #[test]
    fn sole_proprietor_return_flows_through_se_and_qbi() {
        let facts = TaxpayerFacts {
            businesses: vec![BusinessEntry {
                gross_receipts: dec!(80000),
                total_expenses: dec!(30000),
                ..BusinessEntry::default()
            }],
            ..TaxpayerFacts::default()
        };

        let result = compute_return(&facts, &config());

        assert_eq!(result.schedule_se.taxpayer.net_earnings, dec!(46175.0000));
        assert_eq!(result.schedule_se.total_tax, dec!(7064.78));
        assert_eq!(result.schedule_se.total_deduction, dec!(3532.39));

        assert_eq!(result.line("8"), dec!(50000));
        assert_eq!(result.line("10"), dec!(3532.39));
        assert_eq!(result.line("11"), dec!(46467.61));
        // QBI: min(20% × 46467.61, 20% × 30717.61) truncated to dollars.
        assert_eq!(result.line("13"), dec!(6143));
        assert_eq!(result.line("15"), dec!(24574.61));
        assert_eq!(result.line("16"), dec!(2710.45));
        assert_eq!(result.line("23"), dec!(7064.78));
        assert_eq!(result.line("24"), dec!(9775.23));
    }

    #[test]
    fn qbi_income_limit_ignores_qualified_dividends() {
        let facts = TaxpayerFacts {
            businesses: vec![BusinessEntry {
                gross_receipts: dec!(50000),
                ..BusinessEntry::default()
            }],
            dividend_statements: vec![DividendStatement {
                ordinary: dec!(10000),
                qualified: dec!(10000),
                ..DividendStatement::default()
            }],
            ..TaxpayerFacts::default()
        };

        let result = compute_return(&facts, &config());

        // Line 7 is zero, so the income limit is 20% × 40717.61 with no
        // capital reduction; the qualified dividends stay out of it.
        assert_eq!(result.line("11"), dec!(56467.61));
        assert_eq!(result.line("3b"), dec!(10000));
        assert_eq!(result.line("13"), dec!(8143));
    }

    #[test]
    fn spouse_business_runs_its_own_se_worksheet() {
        let facts = TaxpayerFacts {
            filing_status: FilingStatus::MarriedFilingJointly,
            businesses: vec![
                BusinessEntry {
                    owner: Owner::Taxpayer,
                    gross_receipts: dec!(50000),
                    ..BusinessEntry::default()
                },
                BusinessEntry {
                    owner: Owner::Spouse,
                    gross_receipts: dec!(300),
                    ..BusinessEntry::default()
                },
            ],
            ..TaxpayerFacts::default()
        };

        let result = compute_return(&facts, &config());

        assert!(!result.schedule_se.taxpayer.below_threshold);
        assert!(result.schedule_se.spouse.below_threshold);
        assert_eq!(result.schedule_se.total_tax, result.schedule_se.taxpayer.total_tax);
    }

    #[test]
    fn w2_wages_shrink_the_owners_se_wage_base() {
        let facts = TaxpayerFacts {
            wage_statements: vec![w2(dec!(150000), dec!(0))],
            businesses: vec![BusinessEntry {
                gross_receipts: dec!(50000),
                ..BusinessEntry::default()
            }],
            ..TaxpayerFacts::default()
        };

        let result = compute_return(&facts, &config());

        // Remaining base 176100 − 150000 = 26100.
        assert_eq!(result.schedule_se.taxpayer.ss_taxable_earnings, dec!(26100));
    }

    // =========================================================================
    // Child credit return
    // =========================================================================

    #[test]
    fn high_income_mfj_family_phases_out_part_of_the_credit() {
        let facts = TaxpayerFacts {
            filing_status: FilingStatus::MarriedFilingJointly,
            dependents: Dependents {
                qualifying_children: 2,
                other_dependents: 0,
            },
            wage_statements: vec![w2(dec!(410000), dec!(80000))],
            ..TaxpayerFacts::default()
        };

        let result = compute_return(&facts, &config());

        assert_eq!(result.child_credit.phase_out, dec!(500));
        assert_eq!(result.child_credit.credit_after_phaseout, dec!(3500));
        assert_eq!(result.line("19"), dec!(3500));
        assert_eq!(result.line("28"), dec!(0));
    }

    #[test]
    fn actc_refunds_credit_a_low_tax_return_cannot_use() {
        let facts = TaxpayerFacts {
            dependents: Dependents {
                qualifying_children: 1,
                other_dependents: 0,
            },
            wage_statements: vec![w2(dec!(16000), dec!(0))],
            ..TaxpayerFacts::default()
        };

        let result = compute_return(&facts, &config());

        // Taxable income 250, tax 25. Nonrefundable credit capped at 25;
        // the remaining 1975 is refundable up to the 1700 per-child cap.
        assert_eq!(result.line("16"), dec!(25.00));
        assert_eq!(result.line("19"), dec!(25.00));
        assert_eq!(result.line("28"), dec!(1700));
        assert_eq!(result.line("34"), dec!(1700.00));
    }

    // =========================================================================
    // Capital loss return
    // =========================================================================

    #[test]
    fn short_term_carryover_is_clamped_at_the_floor() {
        let facts = TaxpayerFacts {
            capital_transactions: vec![CapitalTransaction::carryover(
                CarryoverTerm::ShortTerm,
                dec!(8000),
            )],
            ..TaxpayerFacts::default()
        };

        let result = compute_return(&facts, &config());

        assert_eq!(result.line("7"), dec!(-3000));
        assert!(result.schedule_d.loss_limited);
        assert_eq!(result.line("9"), dec!(-3000));
        assert_eq!(result.line("11"), dec!(0));
        assert_eq!(result.line("16"), dec!(0));
    }

    // =========================================================================
    // Social Security return
    // =========================================================================

    #[test]
    fn benefits_worksheet_feeds_lines_6a_and_6b() {
        let facts = TaxpayerFacts {
            wage_statements: vec![w2(dec!(40000), dec!(0))],
            benefit_statements: vec![BenefitStatement {
                net_benefits: dec!(20000),
                ..BenefitStatement::default()
            }],
            ..TaxpayerFacts::default()
        };

        let result = compute_return(&facts, &config());

        assert_eq!(result.line("6a"), dec!(20000));
        assert_eq!(result.line("6b"), dec!(17000.00));
        assert_eq!(result.line("9"), dec!(57000.00));
    }

    #[test]
    fn ssa_withholding_lands_on_line_25b() {
        let facts = TaxpayerFacts {
            benefit_statements: vec![BenefitStatement {
                net_benefits: dec!(10000),
                federal_withholding: dec!(700),
                ..BenefitStatement::default()
            }],
            ..TaxpayerFacts::default()
        };

        let result = compute_return(&facts, &config());

        assert_eq!(result.line("25a"), dec!(0));
        assert_eq!(result.line("25b"), dec!(700));
        assert_eq!(result.line("25d"), dec!(700));
    }

    // =========================================================================
    // Retirement and misc income splits
    // =========================================================================

    #[test]
    fn retirement_distributions_split_by_the_ira_flag() {
        let facts = TaxpayerFacts {
            retirement_statements: vec![
                RetirementStatement {
                    taxable_amount: dec!(12000),
                    is_ira: true,
                    ..RetirementStatement::default()
                },
                RetirementStatement {
                    taxable_amount: dec!(8000),
                    is_ira: false,
                    ..RetirementStatement::default()
                },
            ],
            ..TaxpayerFacts::default()
        };

        let result = compute_return(&facts, &config());

        assert_eq!(result.line("4b"), dec!(12000));
        assert_eq!(result.line("5b"), dec!(8000));
        assert_eq!(result.line("9"), dec!(20000));
    }

    #[test]
    fn misc_income_flows_to_line_8_but_not_the_benefits_worksheet() {
        let facts = TaxpayerFacts {
            misc_statements: vec![MiscStatement {
                rents: dec!(3000),
                royalties: dec!(1000),
                other_income: dec!(500),
                ..MiscStatement::default()
            }],
            benefit_statements: vec![BenefitStatement {
                net_benefits: dec!(40000),
                ..BenefitStatement::default()
            }],
            ..TaxpayerFacts::default()
        };

        let result = compute_return(&facts, &config());

        assert_eq!(result.line("8"), dec!(4500));
        // Provisional income = 0 other income + 20000 half-benefits.
        assert_eq!(result.social_security.provisional_income, dec!(20000.0));
        assert_eq!(result.line("6b"), dec!(0));
    }

    // =========================================================================
    // Schedule 3 and interest/dividends
    // =========================================================================

    #[test]
    fn schedule_three_credits_reach_lines_20_and_31() {
        let facts = TaxpayerFacts {
            wage_statements: vec![w2(dec!(60000), dec!(0))],
            additional_credits: AdditionalCredits {
                foreign_tax_credit: dec!(300),
                premium_tax_credit: dec!(450),
                ..AdditionalCredits::default()
            },
            ..TaxpayerFacts::default()
        };

        let result = compute_return(&facts, &config());

        assert_eq!(result.line("20"), dec!(300));
        assert_eq!(result.line("22"), dec!(4771.50));
        assert_eq!(result.line("31"), dec!(450));
        assert_eq!(result.line("33"), dec!(450));
    }

    #[test]
    fn interest_and_dividends_reach_lines_2b_and_3b() {
        let facts = TaxpayerFacts {
            interest_statements: vec![InterestStatement {
                amount: dec!(1800),
                ..InterestStatement::default()
            }],
            dividend_statements: vec![DividendStatement {
                ordinary: dec!(900),
                qualified: dec!(600),
                ..DividendStatement::default()
            }],
            ..TaxpayerFacts::default()
        };

        let result = compute_return(&facts, &config());

        assert_eq!(result.line("2b"), dec!(1800));
        assert_eq!(result.line("3b"), dec!(900));
        assert!(result.schedule_b.required);
    }

    // =========================================================================
    // Degraded modes and totality
    // =========================================================================

    #[test]
    fn qss_return_uses_the_flat_fallback() {
        let facts = TaxpayerFacts {
            filing_status: FilingStatus::QualifyingSurvivingSpouse,
            wage_statements: vec![w2(dec!(71500), dec!(0))],
            ..TaxpayerFacts::default()
        };

        let result = compute_return(&facts, &config());

        // Taxable 71500 − 31500 = 40000 at the flat 15%.
        assert_eq!(result.line("16"), dec!(6000.00));
        assert_eq!(result.meta.bracket_source, BracketSource::FlatFallback);
    }

    #[test]
    fn default_facts_compute_an_all_zero_return() {
        let result = compute_return(&TaxpayerFacts::default(), &config());

        for (id, amount) in &result.lines {
            assert_eq!(*amount, dec!(0), "line {id}");
        }
        assert_eq!(result.meta.tax_year, 2025);
    }

    #[test]
    fn settlement_lines_are_mutually_exclusive() {
        let cases = [
            TaxpayerFacts {
                wage_statements: vec![w2(dec!(60000), dec!(5000))],
                ..TaxpayerFacts::default()
            },
            TaxpayerFacts {
                wage_statements: vec![w2(dec!(60000), dec!(9000))],
                ..TaxpayerFacts::default()
            },
            TaxpayerFacts::default(),
        ];

        for facts in cases {
            let result = compute_return(&facts, &config());

            assert!(
                result.line("34") == dec!(0) || result.line("37") == dec!(0),
                "lines 34 and 37 both nonzero"
            );
        }
    }

    #[test]
    fn identical_inputs_serialize_identically() {
        let facts = TaxpayerFacts {
            wage_statements: vec![w2(dec!(60000), dec!(5000))],
            interest_statements: vec![InterestStatement {
                amount: dec!(250),
                ..InterestStatement::default()
            }],
            ..TaxpayerFacts::default()
        };

        let first = serde_json::to_string(&compute_return(&facts, &config())).unwrap();
        let second = serde_json::to_string(&compute_return(&facts, &config())).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn line_lookup_treats_unknown_lines_as_zero() {
        let result = compute_return(&TaxpayerFacts::default(), &config());

        assert_eq!(result.line("17"), dec!(0));
    }
}
