//! Calculation logic for the finance engine.
//!
//! This module contains every calculation the engine performs: monetary
//! rounding, document line and document totals, the payroll concept
//! formulas, concept set validation and adjustment, pay-period proration and
//! payroll summaries.

mod concept_adjustment;
mod concept_formulas;
mod document_totals;
mod line_totals;
mod payroll_summary;
mod proration;
mod rounding;

pub use concept_adjustment::{
    adjust_to_base_salary, build_default_concepts, recalculate_concept, validate_concepts,
};
pub use concept_formulas::{
    ConceptCalculationResult, DAYS_PER_MONTH, DAYS_PER_YEAR, HOURS_PER_MONTH, calculate_concept,
    calculate_concept_as, day_prorated, layoff, layoff_interest, layoff_interest_rate,
    percent_of_salary, quantity_based,
};
pub use document_totals::{aggregate_document, calculate_document};
pub use line_totals::{calculate_line_totals, extract_included_tax};
pub use payroll_summary::{payroll_totals, summarize_payroll};
pub use proration::{base_salary_from_portion, portion_from_full};
pub use rounding::{DECIMAL_PLACES, round};
