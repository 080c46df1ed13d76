//! Shared decimal helpers for the schedule and worksheet calculators.

use rust_decimal::Decimal;

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// Values at exactly 0.005 round away from zero, per standard financial
/// convention.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use return_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(123.454)), dec!(123.45));
/// assert_eq!(round_half_up(dec!(123.455)), dec!(123.46));
/// assert_eq!(round_half_up(dec!(-123.455)), dec!(-123.46)); // Away from zero
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Returns the maximum of two decimal values.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use return_core::calculations::common::max;
///
/// assert_eq!(max(dec!(100.00), dec!(200.00)), dec!(200.00));
/// assert_eq!(max(dec!(-100.00), dec!(-200.00)), dec!(-100.00));
/// ```
pub fn max(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    if a > b { a } else { b }
}

/// Clamps a value to zero or more.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use return_core::calculations::common::non_negative;
///
/// assert_eq!(non_negative(dec!(-42.00)), dec!(0));
/// assert_eq!(non_negative(dec!(42.00)), dec!(42.00));
/// ```
pub fn non_negative(value: Decimal) -> Decimal {
    max(value, Decimal::ZERO)
}

/// Truncates a non-negative amount to whole currency units.
///
/// Form 8995 reports its deduction in whole dollars; cents are dropped, not
/// rounded.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use return_core::calculations::common::floor_to_dollar;
///
/// assert_eq!(floor_to_dollar(dec!(1234.99)), dec!(1234));
/// assert_eq!(floor_to_dollar(dec!(1234.00)), dec!(1234));
/// ```
pub fn floor_to_dollar(value: Decimal) -> Decimal {
    value.trunc()
}
