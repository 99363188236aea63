//! Document aggregation.
//!
//! Sums line totals across a whole document and flags refund lines.

use rust_decimal::Decimal;

use super::line_totals::calculate_line_totals;
use super::rounding::{round, saturating_sum};
use crate::models::{
    CalculationConfig, DocumentCalculation, DocumentTotals, LineCalculation, LineItem,
};

/// Calculates every line of a document along with the document totals.
///
/// Line results are returned in input order. Each aggregate field is the sum
/// of the corresponding line field, rounded once more to absorb summation
/// drift. `total_refunds` sums `total` over negative-quantity lines. Sums
/// clamp at the `Decimal` range.
pub fn calculate_document(items: &[LineItem], config: &CalculationConfig) -> DocumentCalculation {
    let lines: Vec<LineCalculation> = items
        .iter()
        .enumerate()
        .map(|(index, item)| LineCalculation {
            index,
            is_refund: item.is_refund(),
            totals: calculate_line_totals(item, config),
        })
        .collect();

    let field_sum =
        |field: fn(&LineCalculation) -> Decimal| round(saturating_sum(lines.iter().map(field)));

    let totals = DocumentTotals {
        total: field_sum(|l| l.totals.total),
        subtotal: field_sum(|l| l.totals.subtotal),
        total_tax: field_sum(|l| l.totals.total_tax),
        total_discount: field_sum(|l| l.totals.total_discount),
        total_retention: field_sum(|l| l.totals.total_retention),
        total_refunds: field_sum(|l| if l.is_refund { l.totals.total } else { Decimal::ZERO }),
    };

    DocumentCalculation { lines, totals }
}

/// Sums line totals over a document.
///
/// An empty document yields all-zero totals.
///
/// # Examples
///
/// ```
/// use finance_engine::calculation::aggregate_document;
/// use finance_engine::models::{CalculationConfig, LineItem};
/// use rust_decimal::Decimal;
///
/// let lines = vec![
///     LineItem::new(Decimal::from(100), Decimal::from(2), Decimal::from(10), Decimal::ZERO),
///     LineItem::new(Decimal::from(50), Decimal::from(-1), Decimal::from(10), Decimal::ZERO),
/// ];
/// let totals = aggregate_document(&lines, &CalculationConfig::default());
///
/// assert_eq!(totals.total, Decimal::from(165));
/// assert_eq!(totals.total_refunds, Decimal::from(-55));
/// ```
pub fn aggregate_document(items: &[LineItem], config: &CalculationConfig) -> DocumentTotals {
    calculate_document(items, config).totals
}
