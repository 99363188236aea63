//! Configuration types for the finance engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::models::CalculationConfig;

/// Document calculation defaults, read from `invoicing.yaml`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct InvoicingSettings {
    /// Whether line prices already include tax.
    #[serde(default)]
    pub tax_included: bool,
    /// Retention applied to every line, in percent.
    #[serde(default)]
    pub retention_percent: Decimal,
}

impl InvoicingSettings {
    /// Returns these settings as a line calculation config.
    pub fn calculation_config(&self) -> CalculationConfig {
        CalculationConfig {
            tax_included: self.tax_included,
            retention_percent: self.retention_percent,
        }
    }
}

fn default_transport_aid_multiple() -> Decimal {
    Decimal::from(2)
}

/// Payroll eligibility rules, read from `payroll.yaml`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PayrollSettings {
    /// The legal monthly minimum wage.
    pub minimum_wage: Decimal,
    /// Employees earning up to this many minimum wages receive transport aid.
    #[serde(default = "default_transport_aid_multiple")]
    pub transport_aid_max_minimum_wages: Decimal,
}

impl PayrollSettings {
    /// The highest monthly base salary that still receives transport aid.
    pub fn transport_aid_ceiling(&self) -> Decimal {
        self.minimum_wage
            .saturating_mul(self.transport_aid_max_minimum_wages)
    }

    /// Returns true if an employee with this monthly base salary receives
    /// transport aid.
    ///
    /// # Example
    ///
    /// ```
    /// use finance_engine::config::PayrollSettings;
    /// use rust_decimal::Decimal;
    ///
    /// let settings = PayrollSettings {
    ///     minimum_wage: Decimal::from(1_300_000),
    ///     transport_aid_max_minimum_wages: Decimal::from(2),
    /// };
    /// assert!(settings.transport_aid_applies(Decimal::from(2_600_000)));
    /// assert!(!settings.transport_aid_applies(Decimal::from(2_600_001)));
    /// ```
    pub fn transport_aid_applies(&self, base_salary: Decimal) -> bool {
        base_salary <= self.transport_aid_ceiling()
    }
}

/// The complete engine configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct EngineSettings {
    invoicing: InvoicingSettings,
    payroll: PayrollSettings,
}

impl EngineSettings {
    /// Creates settings from their component parts.
    pub fn new(invoicing: InvoicingSettings, payroll: PayrollSettings) -> Self {
        Self { invoicing, payroll }
    }

    /// Returns the document calculation defaults.
    pub fn invoicing(&self) -> &InvoicingSettings {
        &self.invoicing
    }

    /// Returns the payroll rules.
    pub fn payroll(&self) -> &PayrollSettings {
        &self.payroll
    }
}
