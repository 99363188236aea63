//! Payroll concept formulas.
//!
//! This module provides the pure formulas behind every [`CalculationSubtype`]
//! and [`calculate_concept`], which dispatches on the subtype and records an
//! audit step for the result. Results beyond the `Decimal` range clamp to its
//! bounds.

use rust_decimal::Decimal;

use super::rounding::{percent_of, round};
use crate::catalog::{CalculationSubtype, ConceptDefinition};
use crate::models::{AuditStep, Concept, ProrationContext};

/// Working hours in a month, used to derive the hourly base.
pub const HOURS_PER_MONTH: i64 = 240;

/// Days in a month for proration.
pub const DAYS_PER_MONTH: i64 = 30;

/// Days in a year for severance accruals.
pub const DAYS_PER_YEAR: i64 = 360;

/// Returns the annual interest rate on the severance accrual (12%).
pub fn layoff_interest_rate() -> Decimal {
    Decimal::new(12, 2)
}

/// `percentage` percent of `salary`.
///
/// # Examples
///
/// ```
/// use finance_engine::calculation::percent_of_salary;
/// use rust_decimal::Decimal;
///
/// assert_eq!(percent_of_salary(Decimal::from(1_300_000), Decimal::from(4)), Decimal::from(52_000));
/// ```
pub fn percent_of_salary(salary: Decimal, percentage: Decimal) -> Decimal {
    percent_of(salary, percentage)
}

/// Pay for `quantity` hours at the hourly base surcharged by `percentage`.
///
/// The hourly base is `base_salary / 240`. A missing multiplier counts as 1.
pub fn quantity_based(
    base_salary: Decimal,
    percentage: Decimal,
    multiplier: Option<Decimal>,
    quantity: Decimal,
) -> Decimal {
    let hourly_base = base_salary / Decimal::from(HOURS_PER_MONTH);
    let adjusted_hourly =
        hourly_base.saturating_mul(Decimal::ONE.saturating_add(percentage / Decimal::ONE_HUNDRED));
    adjusted_hourly
        .saturating_mul(quantity)
        .saturating_mul(multiplier.unwrap_or(Decimal::ONE))
}

/// Severance accrual for `quantity` days: `base_salary * quantity / 360`.
pub fn layoff(base_salary: Decimal, quantity: Decimal) -> Decimal {
    base_salary.saturating_mul(quantity) / Decimal::from(DAYS_PER_YEAR)
}

/// Interest on the severance accrual for `quantity` days.
///
/// Computed as `layoff(base_salary, quantity) * 0.12 * quantity / 360`.
/// Zero days yields zero.
///
/// # Examples
///
/// ```
/// use finance_engine::calculation::layoff_interest;
/// use rust_decimal::Decimal;
///
/// assert_eq!(layoff_interest(Decimal::from(1_300_000), Decimal::ZERO), Decimal::ZERO);
/// ```
pub fn layoff_interest(base_salary: Decimal, quantity: Decimal) -> Decimal {
    if quantity.is_zero() {
        return Decimal::ZERO;
    }
    let layoff_value = layoff(base_salary, quantity);
    layoff_value
        .saturating_mul(layoff_interest_rate())
        .saturating_mul(quantity)
        / Decimal::from(DAYS_PER_YEAR)
}

/// Scales a full-month value to `days_worked` days of a 30-day month.
pub fn day_prorated(full_month_value: Decimal, days_worked: Decimal) -> Decimal {
    (full_month_value / Decimal::from(DAYS_PER_MONTH)).saturating_mul(days_worked)
}

/// The result of calculating a concept, including the amount and audit step.
#[derive(Debug, Clone)]
pub struct ConceptCalculationResult {
    /// The rounded amount.
    pub amount: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates a concept's amount according to its definition's subtype.
///
/// The effective percentage is the concept's `custom_percentage` when set,
/// otherwise the definition's. Direct-value concepts keep their amount.
///
/// # Examples
///
/// ```
/// use finance_engine::calculation::calculate_concept;
/// use finance_engine::catalog::ConceptCatalog;
/// use finance_engine::models::{Concept, ConceptType, ProrationContext};
/// use rust_decimal::Decimal;
///
/// let catalog = ConceptCatalog::global();
/// let definition = catalog.lookup("Horas extra diurnas").unwrap();
/// let concept = Concept::new("Horas extra diurnas", ConceptType::Income, Decimal::ZERO, Decimal::from(2));
/// let context = ProrationContext {
///     salary: Decimal::from(1_200_000),
///     base_salary: Decimal::from(1_200_000),
///     days_worked: 30,
///     has_transport_aid: false,
/// };
///
/// // 1,200,000 / 240 = 5,000 per hour, +25% = 6,250, x 2 hours
/// let result = calculate_concept(definition, &concept, &context, 1);
/// assert_eq!(result.amount, Decimal::from(12_500));
/// ```
pub fn calculate_concept(
    definition: &ConceptDefinition,
    concept: &Concept,
    context: &ProrationContext,
    step_number: u32,
) -> ConceptCalculationResult {
    calculate_concept_as(definition.subtype, definition, concept, context, step_number)
}

/// Calculates a concept as if its definition had the given subtype.
///
/// Used for concepts whose formula is fixed by their code rather than by the
/// catalog entry (salary and severance).
pub fn calculate_concept_as(
    subtype: CalculationSubtype,
    definition: &ConceptDefinition,
    concept: &Concept,
    context: &ProrationContext,
    step_number: u32,
) -> ConceptCalculationResult {
    let percentage = concept.custom_percentage.unwrap_or(definition.percentage);
    let quantity = concept.quantity;

    let (raw_amount, input, reasoning) = match subtype {
        CalculationSubtype::PercentOfSalary => {
            let raw = percent_of_salary(context.salary, percentage);
            (
                raw,
                serde_json::json!({
                    "salary": context.salary.normalize().to_string(),
                    "percentage": percentage.normalize().to_string()
                }),
                format!(
                    "${} x {}% = ${}",
                    context.salary.normalize(),
                    percentage.normalize(),
                    round(raw).normalize()
                ),
            )
        }
        CalculationSubtype::QuantityBased => {
            let raw = quantity_based(context.base_salary, percentage, definition.multiplier, quantity);
            (
                raw,
                serde_json::json!({
                    "base_salary": context.base_salary.normalize().to_string(),
                    "percentage": percentage.normalize().to_string(),
                    "multiplier": definition.multiplier.map(|m| m.normalize().to_string()),
                    "quantity": quantity.normalize().to_string()
                }),
                format!(
                    "${} / {} h x (1 + {}%) x {} = ${}",
                    context.base_salary.normalize(),
                    HOURS_PER_MONTH,
                    percentage.normalize(),
                    quantity.normalize(),
                    round(raw).normalize()
                ),
            )
        }
        CalculationSubtype::Layoff => {
            let raw = layoff(context.base_salary, quantity);
            (
                raw,
                serde_json::json!({
                    "base_salary": context.base_salary.normalize().to_string(),
                    "quantity": quantity.normalize().to_string()
                }),
                format!(
                    "${} x {} days / {} = ${}",
                    context.base_salary.normalize(),
                    quantity.normalize(),
                    DAYS_PER_YEAR,
                    round(raw).normalize()
                ),
            )
        }
        CalculationSubtype::LayoffInterest => {
            let raw = layoff_interest(context.base_salary, quantity);
            let reasoning = if quantity.is_zero() {
                "No interest accrued - zero days".to_string()
            } else {
                format!(
                    "${} accrued x {}% x {} days / {} = ${}",
                    round(layoff(context.base_salary, quantity)).normalize(),
                    (layoff_interest_rate() * Decimal::ONE_HUNDRED).normalize(),
                    quantity.normalize(),
                    DAYS_PER_YEAR,
                    round(raw).normalize()
                )
            };
            (
                raw,
                serde_json::json!({
                    "base_salary": context.base_salary.normalize().to_string(),
                    "quantity": quantity.normalize().to_string()
                }),
                reasoning,
            )
        }
        CalculationSubtype::DayProrated => {
            let full_value = definition
                .day_based_full_value
                .unwrap_or(context.base_salary);
            let multiplier = definition.multiplier.unwrap_or(Decimal::ONE);
            let raw = day_prorated(full_value, quantity).saturating_mul(multiplier);
            (
                raw,
                serde_json::json!({
                    "full_month_value": full_value.normalize().to_string(),
                    "days": quantity.normalize().to_string(),
                    "multiplier": multiplier.normalize().to_string()
                }),
                format!(
                    "${} / {} x {} days x {} = ${}",
                    full_value.normalize(),
                    DAYS_PER_MONTH,
                    quantity.normalize(),
                    multiplier.normalize(),
                    round(raw).normalize()
                ),
            )
        }
        CalculationSubtype::DirectValue => (
            concept.amount,
            serde_json::json!({
                "amount": concept.amount.normalize().to_string()
            }),
            format!(
                "Direct value ${} kept as entered",
                round(concept.amount).normalize()
            ),
        ),
    };

    let amount = round(raw_amount);

    let audit_step = AuditStep {
        step_number,
        rule_id: subtype.rule_id().to_string(),
        rule_name: subtype.rule_name().to_string(),
        key_name: definition.key_name.clone(),
        input,
        output: serde_json::json!({
            "amount": amount.normalize().to_string()
        }),
        reasoning,
    };

    ConceptCalculationResult { amount, audit_step }
}
