//! Payroll result models.
//!
//! This module contains the [`PayrollResult`] type and its associated structures
//! that capture all outputs from a payroll summary: the adjusted concepts,
//! aggregate totals, and an audit trace of every recomputation.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Concept, ProrationContext};

/// Aggregated totals for a payroll period.
///
/// # Example
///
/// ```
/// use finance_engine::models::PayrollTotals;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let totals = PayrollTotals {
///     total_income: Decimal::from_str("1500000.00").unwrap(),
///     total_deductions: Decimal::from_str("120000.00").unwrap(),
///     net_pay: Decimal::from_str("1380000.00").unwrap(),
/// };
/// assert_eq!(totals.total_income - totals.total_deductions, totals.net_pay);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PayrollTotals {
    /// Sum of all income concepts.
    pub total_income: Decimal,
    /// Sum of all deduction concepts.
    pub total_deductions: Decimal,
    /// Income minus deductions.
    pub net_pay: Decimal,
}

/// A single step in the audit trace recording a concept recomputation.
///
/// Each step captures the input, output, and reasoning for one formula.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// Identifier of the formula that was applied (e.g. "percent_of_salary").
    pub rule_id: String,
    /// The human-readable name of the formula.
    pub rule_name: String,
    /// The key name of the concept that was recomputed.
    pub key_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the result.
    pub reasoning: String,
}

/// A warning generated during a payroll summary.
///
/// Warnings indicate problems that don't stop the calculation but should be
/// shown to whoever submits the payroll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a payroll summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of recomputation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

/// The complete result of summarizing a payroll period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollResult {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The context the concepts were recomputed against.
    pub context: ProrationContext,
    /// The recomputed concepts, in input order.
    pub concepts: Vec<Concept>,
    /// Aggregated totals.
    pub totals: PayrollTotals,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}

impl PayrollResult {
    /// Returns true if the summary raised no warnings.
    pub fn is_valid(&self) -> bool {
        self.audit_trace.warnings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ConceptType;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_sample_context() -> ProrationContext {
        ProrationContext {
            salary: dec("1300000"),
            base_salary: dec("1300000"),
            days_worked: 30,
            has_transport_aid: false,
        }
    }

    fn create_sample_trace(warnings: Vec<AuditWarning>) -> AuditTrace {
        AuditTrace {
            steps: vec![],
            warnings,
            duration_us: 1000,
        }
    }

    #[test]
    fn test_payroll_totals_serialization() {
        let totals = PayrollTotals {
            total_income: dec("1500000.00"),
            total_deductions: dec("104000.00"),
            net_pay: dec("1396000.00"),
        };

        let json = serde_json::to_string(&totals).unwrap();
        assert!(json.contains("\"total_income\":\"1500000.00\""));
        assert!(json.contains("\"total_deductions\":\"104000.00\""));
        assert!(json.contains("\"net_pay\":\"1396000.00\""));
    }

    #[test]
    fn test_audit_step_serialization() {
        let step = AuditStep {
            step_number: 1,
            rule_id: "percent_of_salary".to_string(),
            rule_name: "Percent of Salary".to_string(),
            key_name: "Salud".to_string(),
            input: serde_json::json!({"salary": "1300000"}),
            output: serde_json::json!({"amount": "52000"}),
            reasoning: "$1300000 x 4% = $52000".to_string(),
        };

        let json = serde_json::to_string(&step).unwrap();
        assert!(json.contains("\"step_number\":1"));
        assert!(json.contains("\"rule_id\":\"percent_of_salary\""));
        assert!(json.contains("\"key_name\":\"Salud\""));
    }

    #[test]
    fn test_audit_warning_serialization() {
        let warning = AuditWarning {
            code: "MISSING_REQUIRED_CONCEPT".to_string(),
            message: "Missing required concept: Salario".to_string(),
            severity: "high".to_string(),
        };

        let json = serde_json::to_string(&warning).unwrap();
        assert!(json.contains("\"code\":\"MISSING_REQUIRED_CONCEPT\""));
        assert!(json.contains("\"severity\":\"high\""));
    }

    #[test]
    fn test_is_valid_follows_warnings() {
        let mut result = PayrollResult {
            calculation_id: Uuid::nil(),
            timestamp: Utc::now(),
            engine_version: "0.1.0".to_string(),
            context: create_sample_context(),
            concepts: vec![Concept::new(
                "Salario",
                ConceptType::Income,
                dec("1300000"),
                dec("0"),
            )],
            totals: PayrollTotals::default(),
            audit_trace: create_sample_trace(vec![]),
        };
        assert!(result.is_valid());

        result.audit_trace = create_sample_trace(vec![AuditWarning {
            code: "DUPLICATE_CONCEPT".to_string(),
            message: "Duplicate concept: Salud".to_string(),
            severity: "high".to_string(),
        }]);
        assert!(!result.is_valid());
    }

    #[test]
    fn test_payroll_result_serialization() {
        let result = PayrollResult {
            calculation_id: Uuid::nil(),
            timestamp: DateTime::parse_from_rfc3339("2026-01-15T10:00:00Z")
                .unwrap()
                .with_timezone(&Utc),
            engine_version: "0.1.0".to_string(),
            context: create_sample_context(),
            concepts: vec![],
            totals: PayrollTotals::default(),
            audit_trace: create_sample_trace(vec![]),
        };

        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"calculation_id\":\"00000000-0000-0000-0000-000000000000\""));
        assert!(json.contains("\"timestamp\":\"2026-01-15T10:00:00Z\""));
        assert!(json.contains("\"days_worked\":30"));
    }
}
