//! Pay-period context for payroll calculations.
//!
//! This module contains [`ProrationContext`], the salary and day-count figures
//! every dependent concept is recomputed from, and [`PayFrequency`], the set of
//! period lengths the engine knows how to prorate.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// A supported pay-period length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayFrequency {
    /// 7-day period, four per month.
    Weekly,
    /// 10-day period, three per month.
    TenDays,
    /// 15-day period, two per month.
    Biweekly,
    /// 30-day period.
    Monthly,
}

impl PayFrequency {
    /// Resolves a period length in days.
    ///
    /// # Example
    ///
    /// ```
    /// use finance_engine::models::PayFrequency;
    ///
    /// assert_eq!(PayFrequency::from_days(15).unwrap(), PayFrequency::Biweekly);
    /// assert!(PayFrequency::from_days(14).is_err());
    /// ```
    pub fn from_days(days_worked: u32) -> EngineResult<Self> {
        match days_worked {
            7 => Ok(Self::Weekly),
            10 => Ok(Self::TenDays),
            15 => Ok(Self::Biweekly),
            30 => Ok(Self::Monthly),
            _ => Err(EngineError::UnsupportedProrationFrequency { days_worked }),
        }
    }

    /// The number of days in the period.
    pub fn days(self) -> u32 {
        match self {
            Self::Weekly => 7,
            Self::TenDays => 10,
            Self::Biweekly => 15,
            Self::Monthly => 30,
        }
    }

    /// How many periods of this length make up one month.
    pub fn multiplier(self) -> Decimal {
        match self {
            Self::Weekly => Decimal::from(4),
            Self::TenDays => Decimal::from(3),
            Self::Biweekly => Decimal::from(2),
            Self::Monthly => Decimal::ONE,
        }
    }
}

/// Salary and day-count context for recomputing dependent concepts.
///
/// Only [`ProrationContext::for_period`] and
/// [`ProrationContext::from_settings`] check `days_worked` against the
/// supported [`PayFrequency`] lengths. A context built any other way,
/// including by deserialization, is taken as given: the payroll operations
/// accept any `days_worked`, and a value of 0 yields zero severance, zero
/// severance interest and a zero transport subsidy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProrationContext {
    /// Salary paid for this period.
    pub salary: Decimal,
    /// Monthly-equivalent salary used for hourly, daily and severance bases.
    pub base_salary: Decimal,
    /// Days in the period. Unchecked unless built by a constructor.
    pub days_worked: u32,
    /// Whether the employee receives the transport subsidy.
    #[serde(default)]
    pub has_transport_aid: bool,
}
