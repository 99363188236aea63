//! Core data models for the finance engine.
//!
//! This module contains the document and payroll models consumed and produced
//! by the calculation functions.

mod concept;
mod document;
mod payroll_result;
mod proration_context;

pub use concept::{Concept, ConceptType};
pub(crate) use concept::normalize_key;
pub use document::{
    CalculationConfig, DocumentCalculation, DocumentTotals, LineCalculation, LineItem, LineTotals,
};
pub use payroll_result::{AuditStep, AuditTrace, AuditWarning, PayrollResult, PayrollTotals};
pub use proration_context::{PayFrequency, ProrationContext};
