//! Line total calculation.
//!
//! This module computes the tax, discount, retention, subtotal and total of a
//! single document line.

use rust_decimal::Decimal;

use super::rounding::{percent_of, round};
use crate::models::{CalculationConfig, LineItem, LineTotals};

/// Returns the tax contained in a tax-inclusive amount.
///
/// Computed as `amount - amount / (1 + tax_percent / 100)`. A divisor of zero
/// (a tax rate of -100%) yields zero.
///
/// # Examples
///
/// ```
/// use finance_engine::calculation::extract_included_tax;
/// use rust_decimal::Decimal;
///
/// let tax = extract_included_tax(Decimal::from(119), Decimal::from(19));
/// assert_eq!(tax, Decimal::from(19));
/// ```
pub fn extract_included_tax(amount: Decimal, tax_percent: Decimal) -> Decimal {
    let divisor = Decimal::ONE + tax_percent / Decimal::ONE_HUNDRED;
    match amount.checked_div(divisor) {
        Some(net) => amount.saturating_sub(net),
        None => Decimal::ZERO,
    }
}

/// Calculates the rounded totals of one document line.
///
/// The steps, each rounded to two decimals:
/// 1. raw amount = price x quantity
/// 2. tax: extracted from the raw amount when prices include tax, otherwise
///    added on top of it
/// 3. tax-exclusive amount = raw amount minus any extracted tax
/// 4. discount and retention, both on the tax-exclusive amount
/// 5. subtotal = tax-exclusive amount - retention
/// 6. total = subtotal + tax - discount
///
/// A zero quantity yields all-zero totals. Negative prices or quantities flow
/// through with their sign. Amounts beyond the `Decimal` range clamp to its
/// bounds.
///
/// # Examples
///
/// ```
/// use finance_engine::calculation::calculate_line_totals;
/// use finance_engine::models::{CalculationConfig, LineItem};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let line = LineItem::new(
///     Decimal::from(100),
///     Decimal::from(2),
///     Decimal::from(19),
///     Decimal::from(10),
/// );
/// let config = CalculationConfig {
///     tax_included: true,
///     retention_percent: Decimal::ZERO,
/// };
///
/// let totals = calculate_line_totals(&line, &config);
/// assert_eq!(totals.total, Decimal::from_str("183.19").unwrap());
/// assert_eq!(totals.total_tax, Decimal::from_str("31.93").unwrap());
/// ```
pub fn calculate_line_totals(item: &LineItem, config: &CalculationConfig) -> LineTotals {
    let raw_amount = round(item.price.saturating_mul(item.quantity));

    let total_tax = if config.tax_included {
        round(extract_included_tax(raw_amount, item.tax_percent))
    } else {
        round(percent_of(raw_amount, item.tax_percent))
    };

    let tax_to_subtract = if config.tax_included {
        total_tax
    } else {
        Decimal::ZERO
    };

    let total_minus_tax = round(raw_amount.saturating_sub(tax_to_subtract));
    let total_discount = round(percent_of(total_minus_tax, item.discount_percent));
    let total_retention = round(percent_of(total_minus_tax, config.retention_percent));
    let subtotal = round(total_minus_tax.saturating_sub(total_retention));
    let total = round(subtotal.saturating_add(total_tax).saturating_sub(total_discount));

    LineTotals {
        total,
        subtotal,
        total_tax,
        total_discount,
        total_retention,
    }
}
