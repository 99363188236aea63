//! Payroll summary.
//!
//! Validates and adjusts a concept set, then totals it into a
//! [`PayrollResult`] with a full audit trace.

use std::time::Instant;

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use super::concept_adjustment::{adjust_with_audit, validate_concepts};
use super::rounding::{round, saturating_sum};
use crate::catalog::ConceptCatalog;
use crate::error::ValidationIssue;
use crate::models::{
    AuditTrace, AuditWarning, Concept, ConceptType, PayrollResult, PayrollTotals, ProrationContext,
};

fn warning_for(issue: &ValidationIssue) -> AuditWarning {
    let severity = match issue {
        ValidationIssue::InvalidQuantity { .. } => "medium",
        ValidationIssue::MissingRequiredConcept { .. }
        | ValidationIssue::DuplicateConcept { .. }
        | ValidationIssue::UnknownConcept { .. } => "high",
    };

    AuditWarning {
        code: issue.code().to_string(),
        message: issue.to_string(),
        severity: severity.to_string(),
    }
}

/// Sums income and deduction amounts.
///
/// Each concept counts by its own type. Net pay is income minus deductions.
/// Sums clamp at the `Decimal` range.
pub fn payroll_totals(concepts: &[Concept]) -> PayrollTotals {
    let sum_of = |concept_type: ConceptType| {
        round(saturating_sum(
            concepts
                .iter()
                .filter(|c| c.concept_type == concept_type)
                .map(|c| c.amount),
        ))
    };

    let total_income = sum_of(ConceptType::Income);
    let total_deductions = sum_of(ConceptType::Deduction);

    PayrollTotals {
        total_income,
        total_deductions,
        net_pay: round(total_income.saturating_sub(total_deductions)),
    }
}

/// Validates, adjusts and totals a concept set for one pay period.
///
/// Validation issues do not stop the summary; each becomes a warning in the
/// audit trace and [`PayrollResult::is_valid`] returns false.
///
/// # Examples
///
/// ```
/// use finance_engine::calculation::{build_default_concepts, summarize_payroll};
/// use finance_engine::catalog::ConceptCatalog;
/// use finance_engine::models::ProrationContext;
/// use rust_decimal::Decimal;
///
/// let catalog = ConceptCatalog::global();
/// let context = ProrationContext::for_period(Decimal::from(1_300_000), 30, false).unwrap();
/// let concepts = build_default_concepts(catalog, &context);
///
/// let result = summarize_payroll(catalog, &concepts, &context);
/// assert!(result.is_valid());
/// assert_eq!(result.totals.total_deductions, Decimal::from(104_000));
/// ```
pub fn summarize_payroll(
    catalog: &ConceptCatalog,
    concepts: &[Concept],
    context: &ProrationContext,
) -> PayrollResult {
    let start_time = Instant::now();

    let warnings: Vec<AuditWarning> = validate_concepts(catalog, concepts)
        .iter()
        .map(warning_for)
        .collect();
    let (adjusted, steps) = adjust_with_audit(catalog, concepts, context);
    let totals = payroll_totals(&adjusted);

    let duration_us = start_time.elapsed().as_micros() as u64;

    info!(
        concepts_count = adjusted.len(),
        warnings_count = warnings.len(),
        net_pay = %totals.net_pay,
        duration_us,
        "Payroll summary completed"
    );

    PayrollResult {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        context: *context,
        concepts: adjusted,
        totals,
        audit_trace: AuditTrace {
            steps,
            warnings,
            duration_us,
        },
    }
}
