//! Concept definition types.
//!
//! A [`ConceptDefinition`] is one immutable catalog entry. Identity is the
//! [`ConceptCode`]; the key name is the display label callers use on concept
//! instances.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::ConceptType;

/// Stable identity of a catalog concept, independent of its display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConceptCode {
    /// Base salary for the period.
    Salary,
    /// Statutory transport subsidy.
    TransportSubsidy,
    /// Daytime overtime hours.
    DaytimeOvertime,
    /// Night overtime hours.
    NightOvertime,
    /// Night work surcharge hours.
    NightSurcharge,
    /// Daytime overtime on Sundays and holidays.
    HolidayDaytimeOvertime,
    /// Night overtime on Sundays and holidays.
    HolidayNightOvertime,
    /// Sunday and holiday surcharge hours.
    HolidaySurcharge,
    /// Night surcharge on Sundays and holidays.
    HolidayNightSurcharge,
    /// Paid vacation days.
    Vacation,
    /// Sick leave days.
    SickLeave,
    /// Semi-annual service bonus.
    ServiceBonus,
    /// Severance accrual.
    Layoff,
    /// Interest on the severance accrual.
    LayoffInterest,
    /// Discretionary bonus.
    Bonus,
    /// Sales commission.
    Commission,
    /// Employee health contribution.
    HealthContribution,
    /// Employee pension contribution.
    PensionContribution,
    /// Pension solidarity fund contribution.
    PensionSolidarityFund,
    /// Income tax withholding.
    WithholdingTax,
    /// Union dues.
    UnionDues,
    /// Payroll-deducted loan installment.
    PayrollLoan,
    /// Salary advance repayment.
    SalaryAdvance,
}

/// How a concept's amount is derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalculationSubtype {
    /// A percentage of the period salary.
    PercentOfSalary,
    /// Hours at a surcharged hourly rate derived from the base salary.
    QuantityBased,
    /// Severance-style accrual: base salary times days over 360.
    Layoff,
    /// Interest on a severance accrual.
    LayoffInterest,
    /// A full-month value scaled to a number of days.
    DayProrated,
    /// A user-entered amount.
    DirectValue,
}

impl CalculationSubtype {
    /// Identifier used in audit steps.
    pub fn rule_id(self) -> &'static str {
        match self {
            Self::PercentOfSalary => "percent_of_salary",
            Self::QuantityBased => "quantity_based",
            Self::Layoff => "layoff",
            Self::LayoffInterest => "layoff_interest",
            Self::DayProrated => "day_prorated",
            Self::DirectValue => "direct_value",
        }
    }

    /// Human-readable name used in audit steps.
    pub fn rule_name(self) -> &'static str {
        match self {
            Self::PercentOfSalary => "Percent of Salary",
            Self::QuantityBased => "Quantity Based",
            Self::Layoff => "Severance Accrual",
            Self::LayoffInterest => "Severance Interest",
            Self::DayProrated => "Day Prorated",
            Self::DirectValue => "Direct Value",
        }
    }
}

/// One immutable catalog entry.
///
/// # Example
///
/// ```
/// use finance_engine::catalog::{CalculationSubtype, ConceptCode, ConceptDefinition};
/// use finance_engine::models::ConceptType;
/// use rust_decimal::Decimal;
///
/// let health = ConceptDefinition::new(
///     ConceptCode::HealthContribution,
///     "Salud",
///     ConceptType::Deduction,
///     CalculationSubtype::PercentOfSalary,
/// )
/// .as_required()
/// .with_percentage(Decimal::from(4));
///
/// assert!(health.required);
/// assert!(!health.read_only);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConceptDefinition {
    /// Stable identity.
    pub code: ConceptCode,
    /// Display label; unique case-insensitively within a catalog.
    pub key_name: String,
    /// Income or deduction.
    pub concept_type: ConceptType,
    /// How the amount is derived.
    pub subtype: CalculationSubtype,
    /// Must be present in every concept set.
    pub required: bool,
    /// Amount is engine-derived and not user-editable.
    pub read_only: bool,
    /// Percentage used by percent- and quantity-based formulas.
    pub percentage: Decimal,
    /// Full-month value for day-prorated concepts, if fixed.
    pub day_based_full_value: Option<Decimal>,
    /// Extra factor applied to the derived amount.
    pub multiplier: Option<Decimal>,
    /// Quantity must be a whole number (days rather than hours).
    pub whole_units: bool,
}

impl ConceptDefinition {
    /// Creates an optional, editable definition with a zero percentage.
    pub fn new(
        code: ConceptCode,
        key_name: impl Into<String>,
        concept_type: ConceptType,
        subtype: CalculationSubtype,
    ) -> Self {
        Self {
            code,
            key_name: key_name.into(),
            concept_type,
            subtype,
            required: false,
            read_only: false,
            percentage: Decimal::ZERO,
            day_based_full_value: None,
            multiplier: None,
            whole_units: false,
        }
    }

    /// Marks the definition as required.
    pub fn as_required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Marks the definition as read-only.
    pub fn as_read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    /// Sets the percentage.
    pub fn with_percentage(mut self, percentage: Decimal) -> Self {
        self.percentage = percentage;
        self
    }

    /// Sets the full-month value for day proration.
    pub fn with_full_value(mut self, value: Decimal) -> Self {
        self.day_based_full_value = Some(value);
        self
    }

    /// Sets the multiplier.
    pub fn with_multiplier(mut self, multiplier: Decimal) -> Self {
        self.multiplier = Some(multiplier);
        self
    }

    /// Requires whole-unit quantities.
    pub fn in_whole_units(mut self) -> Self {
        self.whole_units = true;
        self
    }
}
