//! Pay-period proration.
//!
//! Converts between the salary paid for one period and its monthly
//! equivalent. Only 7, 10, 15 and 30-day periods are supported.

use rust_decimal::Decimal;
use tracing::warn;

use super::rounding::{divide_or_zero, round};
use crate::config::PayrollSettings;
use crate::error::EngineResult;
use crate::models::{PayFrequency, ProrationContext};

fn frequency_for(days_worked: u32) -> EngineResult<PayFrequency> {
    PayFrequency::from_days(days_worked).inspect_err(|_| {
        warn!(days_worked, "Unsupported proration frequency");
    })
}

/// Returns the monthly-equivalent base salary for a period's salary.
///
/// # Errors
///
/// Returns `UnsupportedProrationFrequency` unless `days_worked` is 7, 10, 15
/// or 30.
///
/// # Examples
///
/// ```
/// use finance_engine::calculation::base_salary_from_portion;
/// use rust_decimal::Decimal;
///
/// let base = base_salary_from_portion(15, Decimal::from(650_000)).unwrap();
/// assert_eq!(base, Decimal::from(1_300_000));
/// assert!(base_salary_from_portion(14, Decimal::from(650_000)).is_err());
/// ```
pub fn base_salary_from_portion(days_worked: u32, salary: Decimal) -> EngineResult<Decimal> {
    let frequency = frequency_for(days_worked)?;
    Ok(salary.saturating_mul(frequency.multiplier()))
}

/// Returns the share of a monthly value that falls in one period, rounded.
///
/// # Errors
///
/// Returns `UnsupportedProrationFrequency` unless `days_worked` is 7, 10, 15
/// or 30.
pub fn portion_from_full(full_monthly_value: Decimal, days_worked: u32) -> EngineResult<Decimal> {
    let frequency = frequency_for(days_worked)?;
    Ok(round(divide_or_zero(full_monthly_value, frequency.multiplier())))
}

impl ProrationContext {
    /// Builds the context for a period from the salary paid in it.
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedProrationFrequency` unless `days_worked` is 7, 10,
    /// 15 or 30.
    ///
    /// # Example
    ///
    /// ```
    /// use finance_engine::models::ProrationContext;
    /// use rust_decimal::Decimal;
    ///
    /// let context = ProrationContext::for_period(Decimal::from(325_000), 7, true).unwrap();
    /// assert_eq!(context.base_salary, Decimal::from(1_300_000));
    /// ```
    pub fn for_period(salary: Decimal, days_worked: u32, has_transport_aid: bool) -> EngineResult<Self> {
        Ok(Self {
            salary,
            base_salary: base_salary_from_portion(days_worked, salary)?,
            days_worked,
            has_transport_aid,
        })
    }

    /// Builds the context for a period, deciding transport aid eligibility
    /// from the payroll rules.
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedProrationFrequency` unless `days_worked` is 7, 10,
    /// 15 or 30.
    pub fn from_settings(
        salary: Decimal,
        days_worked: u32,
        settings: &PayrollSettings,
    ) -> EngineResult<Self> {
        let base_salary = base_salary_from_portion(days_worked, salary)?;
        Ok(Self {
            salary,
            base_salary,
            days_worked,
            has_transport_aid: settings.transport_aid_applies(base_salary),
        })
    }
}
