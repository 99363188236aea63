//! Payroll concept instances.
//!
//! A [`Concept`] is one income or deduction line for an employee within a pay
//! period. It is owned by the caller; the engine only ever returns recomputed
//! copies.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Whether a concept adds to or subtracts from pay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConceptType {
    /// Earned amounts (salary, overtime, subsidies, ...).
    Income,
    /// Withheld amounts (social security, loans, ...).
    Deduction,
}

/// One payroll line item for an employee within a pay period.
///
/// # Example
///
/// ```
/// use finance_engine::models::{Concept, ConceptType};
/// use rust_decimal::Decimal;
///
/// let salary = Concept::new("Salario", ConceptType::Income, Decimal::from(1_300_000), Decimal::ZERO);
/// assert_eq!(salary.key_name, "Salario");
/// assert!(salary.custom_percentage.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Concept {
    /// Unique identifier of this instance.
    pub id: Uuid,
    /// The catalog key name this concept refers to (case-insensitive).
    pub key_name: String,
    /// Income or deduction.
    #[serde(rename = "type")]
    pub concept_type: ConceptType,
    /// The monetary amount.
    pub amount: Decimal,
    /// Hours, days or other units the amount derives from.
    #[serde(default)]
    pub quantity: Decimal,
    /// Overrides the catalog percentage when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_percentage: Option<Decimal>,
}

impl Concept {
    /// Creates a concept with a fresh id and no custom percentage.
    pub fn new(
        key_name: impl Into<String>,
        concept_type: ConceptType,
        amount: Decimal,
        quantity: Decimal,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            key_name: key_name.into(),
            concept_type,
            amount,
            quantity,
            custom_percentage: None,
        }
    }

    /// Returns true if `key_name` matches this concept's key, ignoring case.
    pub fn has_key(&self, key_name: &str) -> bool {
        normalize_key(&self.key_name) == normalize_key(key_name)
    }
}

/// Canonical form of a key name for case-insensitive comparison.
pub(crate) fn normalize_key(key_name: &str) -> String {
    key_name.trim().to_lowercase()
}
