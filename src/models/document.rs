//! Document line and total models.
//!
//! These types describe one invoice, quote or purchase line and the rounded
//! amounts the engine derives from it.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single product or service line on a document.
///
/// Unknown fields sent by the caller (descriptions, product codes, ...) are
/// kept in `extra` and ignored by the calculator.
///
/// # Example
///
/// ```
/// use finance_engine::models::LineItem;
/// use rust_decimal::Decimal;
///
/// let line = LineItem::new(Decimal::from(100), Decimal::from(-1), Decimal::from(19), Decimal::ZERO);
/// assert!(line.is_refund());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Unit price. May be negative.
    pub price: Decimal,
    /// Quantity. A negative quantity marks the line as a refund.
    pub quantity: Decimal,
    /// Tax rate in percent (e.g. 19 for 19%).
    #[serde(default)]
    pub tax_percent: Decimal,
    /// Discount rate in percent.
    #[serde(default)]
    pub discount_percent: Decimal,
    /// Caller fields carried through untouched.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl LineItem {
    /// Creates a line with no extra fields.
    pub fn new(
        price: Decimal,
        quantity: Decimal,
        tax_percent: Decimal,
        discount_percent: Decimal,
    ) -> Self {
        Self {
            price,
            quantity,
            tax_percent,
            discount_percent,
            extra: serde_json::Map::new(),
        }
    }

    /// Returns true if the line is a refund (negative quantity).
    pub fn is_refund(&self) -> bool {
        self.quantity.is_sign_negative() && !self.quantity.is_zero()
    }
}

/// Document-wide calculation switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CalculationConfig {
    /// Whether line prices already include tax.
    pub tax_included: bool,
    /// Retention (withholding) rate in percent, computed on the tax-exclusive amount.
    #[serde(default)]
    pub retention_percent: Decimal,
}

/// Rounded amounts for one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LineTotals {
    /// Amount payable for the line: subtotal + tax - discount.
    pub total: Decimal,
    /// Tax-exclusive amount minus retention.
    pub subtotal: Decimal,
    /// Tax added to, or extracted from, the line amount.
    pub total_tax: Decimal,
    /// Discount computed on the tax-exclusive amount.
    pub total_discount: Decimal,
    /// Retention computed on the tax-exclusive amount.
    pub total_retention: Decimal,
}

/// Rounded amounts for a whole document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DocumentTotals {
    /// Sum of line totals.
    pub total: Decimal,
    /// Sum of line subtotals.
    pub subtotal: Decimal,
    /// Sum of line taxes.
    pub total_tax: Decimal,
    /// Sum of line discounts.
    pub total_discount: Decimal,
    /// Sum of line retentions.
    pub total_retention: Decimal,
    /// Sum of `total` over refund lines.
    pub total_refunds: Decimal,
}

/// The totals of a single line, tagged with its refund status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineCalculation {
    /// Position of the line in the input document.
    pub index: usize,
    /// Whether the line has a negative quantity.
    pub is_refund: bool,
    /// The line's rounded totals.
    pub totals: LineTotals,
}

/// Line-level and aggregate results for a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentCalculation {
    /// One entry per input line, in input order.
    pub lines: Vec<LineCalculation>,
    /// Aggregated document totals.
    pub totals: DocumentTotals,
}
