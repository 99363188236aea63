//! Monetary rounding.
//!
//! Every amount the engine produces goes through [`round`], so sums computed
//! by callers from engine outputs are reproducible.
//!
//! Calculation steps multiply and add with saturating arithmetic: a result
//! beyond the `Decimal` range clamps to `Decimal::MAX` or `Decimal::MIN`
//! instead of panicking.

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of decimal places monetary amounts are rounded to.
pub const DECIMAL_PLACES: u32 = 2;

/// Rounds a monetary amount to two decimal places.
///
/// Midpoints round away from zero, so `round(-x) == -round(x)`.
///
/// # Examples
///
/// ```
/// use finance_engine::calculation::round;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round(Decimal::from_str("2.345").unwrap()), Decimal::from_str("2.35").unwrap());
/// assert_eq!(round(Decimal::from_str("-2.345").unwrap()), Decimal::from_str("-2.35").unwrap());
/// ```
pub fn round(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// `percent` percent of `amount`.
pub(crate) fn percent_of(amount: Decimal, percent: Decimal) -> Decimal {
    amount.saturating_mul(percent) / Decimal::ONE_HUNDRED
}

/// Sums amounts, clamping at the `Decimal` range.
pub(crate) fn saturating_sum<I>(values: I) -> Decimal
where
    I: IntoIterator<Item = Decimal>,
{
    values
        .into_iter()
        .fold(Decimal::ZERO, |acc, value| acc.saturating_add(value))
}

/// Divides, degrading to zero when the divisor is zero.
pub(crate) fn divide_or_zero(numerator: Decimal, divisor: Decimal) -> Decimal {
    numerator.checked_div(divisor).unwrap_or(Decimal::ZERO)
}
