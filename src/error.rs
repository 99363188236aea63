//! Error types for the finance engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! Two families live here: [`EngineError`], returned from fallible operations
//! such as configuration loading and catalog lookups, and [`ValidationIssue`],
//! which is collected (never returned as `Err`) when a concept set is checked
//! against the catalog.

use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the finance engine.
///
/// # Example
///
/// ```
/// use finance_engine::error::EngineError;
///
/// let error = EngineError::ConceptNotFound {
///     key_name: "Bono navideño".to_string(),
/// };
/// assert_eq!(error.to_string(), "Concept not found in catalog: Bono navideño");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration parsed but holds a value outside its allowed range.
    #[error("Invalid configuration field '{field}': {message}")]
    InvalidConfig {
        /// The offending field.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A concept key name did not resolve to any catalog definition.
    #[error("Concept not found in catalog: {key_name}")]
    ConceptNotFound {
        /// The key name that was looked up.
        key_name: String,
    },

    /// Two catalog definitions share a code or key name.
    #[error("Duplicate concept definition: {key_name}")]
    DuplicateDefinition {
        /// The key name that appears more than once.
        key_name: String,
    },

    /// Proration was requested for a period length with no monthly multiplier.
    #[error("Unsupported proration frequency: {days_worked} days (expected 7, 10, 15 or 30)")]
    UnsupportedProrationFrequency {
        /// The number of days that was requested.
        days_worked: u32,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

/// A problem found while validating a concept set against the catalog.
///
/// Validation collects every issue instead of stopping at the first one, so a
/// caller can surface all of them at once.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationIssue {
    /// A concept the catalog marks as required is absent from the set.
    #[error("Missing required concept: {key_name}")]
    MissingRequiredConcept {
        /// Display label of the missing concept.
        key_name: String,
    },

    /// A key name appears more than once (compared case-insensitively).
    #[error("Duplicate concept: {key_name}")]
    DuplicateConcept {
        /// The key name as it first appeared in the set.
        key_name: String,
    },

    /// A concept counted in whole units carries a fractional quantity.
    #[error("Invalid quantity {quantity} for concept '{key_name}': must be a whole number")]
    InvalidQuantity {
        /// The concept's key name.
        key_name: String,
        /// The offending quantity.
        quantity: Decimal,
    },

    /// A key name that does not resolve to any catalog definition.
    #[error("Unknown concept: {key_name}")]
    UnknownConcept {
        /// The unresolved key name.
        key_name: String,
    },
}

impl ValidationIssue {
    /// Returns a stable machine-readable code for this issue.
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingRequiredConcept { .. } => "MISSING_REQUIRED_CONCEPT",
            Self::DuplicateConcept { .. } => "DUPLICATE_CONCEPT",
            Self::InvalidQuantity { .. } => "INVALID_QUANTITY",
            Self::UnknownConcept { .. } => "UNKNOWN_CONCEPT",
        }
    }
}
