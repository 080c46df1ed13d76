//! Schedule D capital gains and losses.
//!
//! Transactions are either current-year sales or prior-year loss
//! carryovers. Sales net proceeds against basis and land in the short- or
//! long-term pool; carryovers subtract their magnitude from the stated
//! term's pool. The combined net is clamped at the capital-loss floor
//! (−3000, or −1500 for married filing separately) before it flows to
//! Form 1040 line 7; unused loss beyond the floor is flagged but not
//! carried forward.
//!
//! Two term rules coexist deliberately. The net split uses the Form 8949
//! category when present, otherwise the holding period. The per-box
//! disclosure totals, however, file uncategorized sales under box A
//! regardless of holding period, so the two can disagree. That observed
//! behavior is kept rather than reconciled.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::models::{CapitalTransaction, CarryoverTerm, FilingStatus, SaleCategory};

/// Per-box Form 8949 disclosure totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoxTotals {
    pub proceeds: Decimal,
    pub basis: Decimal,
}

impl BoxTotals {
    pub fn gain(&self) -> Decimal {
        self.proceeds - self.basis
    }
}

/// Complete Schedule D outcome.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleDResult {
    /// Net short-term gain or loss, including carryovers.
    pub short_term_net: Decimal,

    /// Net long-term gain or loss, including carryovers.
    pub long_term_net: Decimal,

    /// Short plus long, before the loss floor.
    pub total_net: Decimal,

    /// Amount flowing to Form 1040 line 7, after the loss floor clamp.
    pub line7_amount: Decimal,

    /// The loss floor clamped the total; excess loss is not tracked.
    pub loss_limited: bool,

    /// Long-term gain present alongside an overall gain; advisory for
    /// preferential-rate reporting downstream.
    pub has_long_term_gain: bool,

    /// Disclosure totals for boxes A through F, indexed in category order.
    pub boxes: [BoxTotals; 6],
}

impl ScheduleDResult {
    pub fn box_totals(&self, category: SaleCategory) -> &BoxTotals {
        &self.boxes[category as usize]
    }
}

/// Capital loss floor for a filing status.
pub fn loss_floor(status: FilingStatus) -> Decimal {
    if status == FilingStatus::MarriedFilingSeparately {
        Decimal::from(-1500)
    } else {
        Decimal::from(-3000)
    }
}

/// Nets all capital transactions and applies the loss limitation.
pub fn calculate(
    transactions: &[CapitalTransaction],
    status: FilingStatus,
) -> ScheduleDResult {
    let mut result = ScheduleDResult::default();

    for transaction in transactions {
        match transaction {
            CapitalTransaction::Carryover { term, amount } => match term {
                CarryoverTerm::ShortTerm => result.short_term_net -= amount,
                CarryoverTerm::LongTerm => result.long_term_net -= amount,
            },
            CapitalTransaction::Sale {
                category,
                date_acquired,
                date_sold,
                proceeds,
                basis,
                ..
            } => {
                let gain = proceeds - basis;

                let long_term = match category {
                    Some(category) => category.is_long_term(),
                    None => is_long_term(*date_acquired, *date_sold),
                };
                if long_term {
                    result.long_term_net += gain;
                } else {
                    result.short_term_net += gain;
                }

                // Disclosure only; uncategorized sales always file under
                // box A even when the holding period says long-term.
                let disclosure_box = category.unwrap_or(SaleCategory::A);
                let totals = &mut result.boxes[disclosure_box as usize];
                totals.proceeds += proceeds;
                totals.basis += basis;
            }
        }
    }

    result.total_net = result.short_term_net + result.long_term_net;

    let floor = loss_floor(status);
    if result.total_net < floor {
        warn!(
            total_net = %result.total_net,
            floor = %floor,
            "capital loss exceeds the deductible floor; clamping line 7"
        );
        result.line7_amount = floor;
        result.loss_limited = true;
    } else {
        result.line7_amount = result.total_net;
    }

    result.has_long_term_gain =
        result.long_term_net > Decimal::ZERO && result.total_net > Decimal::ZERO;

    result
}

/// Holding-period term derivation for sales without a category.
///
/// Long-term means held more than one year: more than a calendar year
/// apart, or exactly one year apart with a later month, or the same month
/// one year later with a strictly greater day of month. Missing dates read
/// as short-term.
fn is_long_term(
    acquired: Option<NaiveDate>,
    sold: Option<NaiveDate>,
) -> bool {
    let (Some(acquired), Some(sold)) = (acquired, sold) else {
        return false;
    };

    let year_diff = sold.year() - acquired.year();
    if year_diff > 1 {
        return true;
    }
    if year_diff == 1 {
        let month_diff = sold.month() as i32 - acquired.month() as i32;
        if month_diff > 0 {
            return true;
        }
        if month_diff == 0 {
            return sold.day() > acquired.day();
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sale_with_category(category: SaleCategory, proceeds: Decimal, basis: Decimal) -> CapitalTransaction {
        CapitalTransaction::Sale {
            description: String::new(),
            category: Some(category),
            date_acquired: None,
            date_sold: None,
            proceeds,
            basis,
        }
    }

    fn sale_with_dates(
        acquired: NaiveDate,
        sold: NaiveDate,
        proceeds: Decimal,
        basis: Decimal,
    ) -> CapitalTransaction {
        CapitalTransaction::Sale {
            description: String::new(),
            category: None,
            date_acquired: Some(acquired),
            date_sold: Some(sold),
            proceeds,
            basis,
        }
    }

    // =========================================================================
    // Term classification tests
    // =========================================================================

    #[test]
    fn category_a_through_c_are_short_term() {
        for category in [SaleCategory::A, SaleCategory::B, SaleCategory::C] {
            let result = calculate(
                &[sale_with_category(category, dec!(1000), dec!(400))],
                FilingStatus::Single,
            );

            assert_eq!(result.short_term_net, dec!(600), "category {category:?}");
            assert_eq!(result.long_term_net, dec!(0));
        }
    }

    #[test]
    fn category_d_through_f_are_long_term() {
        for category in [SaleCategory::D, SaleCategory::E, SaleCategory::F] {
            let result = calculate(
                &[sale_with_category(category, dec!(1000), dec!(400))],
                FilingStatus::Single,
            );

            assert_eq!(result.long_term_net, dec!(600), "category {category:?}");
            assert_eq!(result.short_term_net, dec!(0));
        }
    }

    #[test]
    fn holding_over_a_calendar_year_is_long_term() {
        let result = calculate(
            &[sale_with_dates(
                date(2022, 6, 1),
                date(2024, 1, 2),
                dec!(5000),
                dec!(3000),
            )],
            FilingStatus::Single,
        );

        assert_eq!(result.long_term_net, dec!(2000));
    }

    #[test]
    fn one_year_and_later_month_is_long_term() {
        let result = calculate(
            &[sale_with_dates(
                date(2023, 3, 10),
                date(2024, 4, 1),
                dec!(100),
                dec!(40),
            )],
            FilingStatus::Single,
        );

        assert_eq!(result.long_term_net, dec!(60));
    }

    #[test]
    fn exactly_one_year_same_day_is_short_term() {
        let result = calculate(
            &[sale_with_dates(
                date(2023, 3, 10),
                date(2024, 3, 10),
                dec!(100),
                dec!(40),
            )],
            FilingStatus::Single,
        );

        assert_eq!(result.short_term_net, dec!(60));
        assert_eq!(result.long_term_net, dec!(0));
    }

    #[test]
    fn one_year_and_one_day_is_long_term() {
        let result = calculate(
            &[sale_with_dates(
                date(2023, 3, 10),
                date(2024, 3, 11),
                dec!(100),
                dec!(40),
            )],
            FilingStatus::Single,
        );

        assert_eq!(result.long_term_net, dec!(60));
    }

    #[test]
    fn one_year_earlier_month_is_short_term() {
        let result = calculate(
            &[sale_with_dates(
                date(2023, 8, 10),
                date(2024, 2, 1),
                dec!(100),
                dec!(40),
            )],
            FilingStatus::Single,
        );

        assert_eq!(result.short_term_net, dec!(60));
    }

    #[test]
    fn missing_dates_read_as_short_term() {
        let result = calculate(
            &[CapitalTransaction::sale(dec!(100), dec!(40))],
            FilingStatus::Single,
        );

        assert_eq!(result.short_term_net, dec!(60));
    }

    // =========================================================================
    // Carryover tests
    // =========================================================================

    #[test]
    fn carryover_reduces_matching_term() {
        let result = calculate(
            &[
                sale_with_category(SaleCategory::A, dec!(5000), dec!(1000)),
                CapitalTransaction::carryover(CarryoverTerm::ShortTerm, dec!(1500)),
                CapitalTransaction::carryover(CarryoverTerm::LongTerm, dec!(700)),
            ],
            FilingStatus::Single,
        );

        assert_eq!(result.short_term_net, dec!(2500));
        assert_eq!(result.long_term_net, dec!(-700));
        assert_eq!(result.total_net, dec!(1800));
    }

    #[test]
    fn carryover_does_not_touch_disclosure_boxes() {
        let result = calculate(
            &[CapitalTransaction::carryover(
                CarryoverTerm::ShortTerm,
                dec!(2000),
            )],
            FilingStatus::Single,
        );

        for category in SaleCategory::ALL {
            assert_eq!(*result.box_totals(category), BoxTotals::default());
        }
    }

    // =========================================================================
    // Loss limitation tests
    // =========================================================================

    #[test]
    fn large_loss_is_clamped_to_3000() {
        let result = calculate(
            &[CapitalTransaction::carryover(
                CarryoverTerm::ShortTerm,
                dec!(8000),
            )],
            FilingStatus::Single,
        );

        assert_eq!(result.total_net, dec!(-8000));
        assert_eq!(result.line7_amount, dec!(-3000));
        assert!(result.loss_limited);
    }

    #[test]
    fn mfs_floor_is_1500() {
        let result = calculate(
            &[CapitalTransaction::carryover(
                CarryoverTerm::LongTerm,
                dec!(2000),
            )],
            FilingStatus::MarriedFilingSeparately,
        );

        assert_eq!(result.line7_amount, dec!(-1500));
        assert!(result.loss_limited);
    }

    #[test]
    fn loss_at_exactly_the_floor_is_not_limited() {
        let result = calculate(
            &[CapitalTransaction::carryover(
                CarryoverTerm::ShortTerm,
                dec!(3000),
            )],
            FilingStatus::Single,
        );

        assert_eq!(result.line7_amount, dec!(-3000));
        assert!(!result.loss_limited);
    }

    #[test]
    fn gains_pass_through_unclamped() {
        let result = calculate(
            &[sale_with_category(SaleCategory::D, dec!(50000), dec!(10000))],
            FilingStatus::Single,
        );

        assert_eq!(result.line7_amount, dec!(40000));
        assert!(!result.loss_limited);
        assert!(result.has_long_term_gain);
    }

    // =========================================================================
    // Disclosure box tests
    // =========================================================================

    #[test]
    fn boxes_accumulate_by_category() {
        let result = calculate(
            &[
                sale_with_category(SaleCategory::B, dec!(1000), dec!(600)),
                sale_with_category(SaleCategory::B, dec!(500), dec!(200)),
                sale_with_category(SaleCategory::E, dec!(2000), dec!(2500)),
            ],
            FilingStatus::Single,
        );

        assert_eq!(result.box_totals(SaleCategory::B).proceeds, dec!(1500));
        assert_eq!(result.box_totals(SaleCategory::B).basis, dec!(800));
        assert_eq!(result.box_totals(SaleCategory::B).gain(), dec!(700));
        assert_eq!(result.box_totals(SaleCategory::E).gain(), dec!(-500));
    }

    #[test]
    fn uncategorized_long_term_sale_files_under_box_a() {
        // Held well over a year: the net split says long-term, but the
        // disclosure box stays A.
        let result = calculate(
            &[sale_with_dates(
                date(2020, 1, 1),
                date(2024, 1, 1),
                dec!(900),
                dec!(100),
            )],
            FilingStatus::Single,
        );

        assert_eq!(result.long_term_net, dec!(800));
        assert_eq!(result.box_totals(SaleCategory::A).proceeds, dec!(900));
        assert_eq!(result.box_totals(SaleCategory::D).proceeds, dec!(0));
    }

    #[test]
    fn empty_transactions_yield_zero_result() {
        let result = calculate(&[], FilingStatus::Single);

        assert_eq!(result, ScheduleDResult::default());
    }
}
