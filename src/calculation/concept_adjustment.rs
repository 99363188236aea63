//! Concept set validation and adjustment.
//!
//! This module checks a caller's concept set against the catalog and
//! recomputes the concepts whose amounts depend on the pay-period context.
//! Input slices are never modified; every operation returns fresh concepts.

use std::collections::{HashMap, HashSet};

use rust_decimal::Decimal;
use tracing::{debug, warn};

use super::concept_formulas::{calculate_concept, calculate_concept_as, day_prorated};
use super::rounding::round;
use crate::catalog::{CalculationSubtype, ConceptCatalog, ConceptCode};
use crate::error::{EngineResult, ValidationIssue};
use crate::models::{AuditStep, Concept, ProrationContext, normalize_key};

/// Validates a concept set against the catalog.
///
/// Never fails; every problem found is returned. Issues are reported in input
/// order, followed by one `MissingRequiredConcept` per absent required entry
/// in catalog order. A duplicated key name is reported once, however many
/// times it repeats.
///
/// # Examples
///
/// ```
/// use finance_engine::calculation::validate_concepts;
/// use finance_engine::catalog::ConceptCatalog;
///
/// let issues = validate_concepts(ConceptCatalog::global(), &[]);
/// assert_eq!(issues.len(), 5);
/// ```
pub fn validate_concepts(catalog: &ConceptCatalog, concepts: &[Concept]) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    let mut first_seen: HashMap<String, &str> = HashMap::new();
    let mut reported_duplicates = HashSet::new();

    for concept in concepts {
        let key = normalize_key(&concept.key_name);

        if let Some(&first) = first_seen.get(&key) {
            if reported_duplicates.insert(key) {
                issues.push(ValidationIssue::DuplicateConcept {
                    key_name: first.to_string(),
                });
            }
            continue;
        }
        first_seen.insert(key, &concept.key_name);

        match catalog.lookup(&concept.key_name) {
            Ok(definition) => {
                if definition.whole_units && !concept.quantity.fract().is_zero() {
                    issues.push(ValidationIssue::InvalidQuantity {
                        key_name: concept.key_name.clone(),
                        quantity: concept.quantity,
                    });
                }
            }
            Err(_) => issues.push(ValidationIssue::UnknownConcept {
                key_name: concept.key_name.clone(),
            }),
        }
    }

    for definition in catalog.required() {
        if !first_seen.contains_key(&normalize_key(&definition.key_name)) {
            issues.push(ValidationIssue::MissingRequiredConcept {
                key_name: definition.key_name.clone(),
            });
        }
    }

    if !issues.is_empty() {
        warn!(
            concept_count = concepts.len(),
            issue_count = issues.len(),
            "Concept set failed validation"
        );
    }

    issues
}

/// Recomputes every context-dependent concept against `context`.
///
/// Returns a new list in input order:
/// - the salary concept takes `context.salary`
/// - severance takes `days_worked` as its quantity and is recomputed from the
///   base salary
/// - severance interest is recomputed for `days_worked` days, keeping its own
///   quantity
/// - percent-of-salary concepts are recomputed from `context.salary`
///
/// Anything else, including concepts the catalog does not know, is returned
/// unchanged.
pub fn adjust_to_base_salary(
    catalog: &ConceptCatalog,
    concepts: &[Concept],
    context: &ProrationContext,
) -> Vec<Concept> {
    adjust_with_audit(catalog, concepts, context).0
}

/// Like [`adjust_to_base_salary`], also returning one audit step per
/// recomputed concept.
pub(crate) fn adjust_with_audit(
    catalog: &ConceptCatalog,
    concepts: &[Concept],
    context: &ProrationContext,
) -> (Vec<Concept>, Vec<AuditStep>) {
    let days = Decimal::from(context.days_worked);
    let mut adjusted = Vec::with_capacity(concepts.len());
    let mut steps = Vec::new();
    let mut step_number: u32 = 0;

    for concept in concepts {
        let Ok(definition) = catalog.lookup(&concept.key_name) else {
            warn!(key_name = %concept.key_name, "Concept not in catalog, passing through unchanged");
            adjusted.push(concept.clone());
            continue;
        };

        let mut input = concept.clone();
        let subtype = match definition.code {
            ConceptCode::Salary => {
                input.amount = context.salary;
                CalculationSubtype::DirectValue
            }
            ConceptCode::Layoff => {
                input.quantity = days;
                CalculationSubtype::Layoff
            }
            ConceptCode::LayoffInterest => {
                input.quantity = days;
                CalculationSubtype::LayoffInterest
            }
            _ if definition.subtype == CalculationSubtype::PercentOfSalary => {
                CalculationSubtype::PercentOfSalary
            }
            _ => {
                adjusted.push(concept.clone());
                continue;
            }
        };

        step_number = step_number.saturating_add(1);
        let result = calculate_concept_as(subtype, definition, &input, context, step_number);

        debug!(
            key_name = %definition.key_name,
            rule_id = subtype.rule_id(),
            amount = %result.amount,
            "Concept recomputed"
        );

        let mut output = input;
        output.amount = result.amount;
        if definition.code == ConceptCode::LayoffInterest {
            output.quantity = concept.quantity;
        }

        adjusted.push(output);
        steps.push(result.audit_step);
    }

    (adjusted, steps)
}

/// Builds the starting concept set for a new payroll entry.
///
/// Creates one concept per required catalog entry, the salary carrying
/// `context.salary` and the rest zero. When the context grants transport
/// aid, a transport subsidy prorated to `days_worked` is added. The set is
/// then passed through [`adjust_to_base_salary`].
///
/// # Examples
///
/// ```
/// use finance_engine::calculation::build_default_concepts;
/// use finance_engine::catalog::ConceptCatalog;
/// use finance_engine::models::ProrationContext;
/// use rust_decimal::Decimal;
///
/// let context = ProrationContext {
///     salary: Decimal::from(1_300_000),
///     base_salary: Decimal::from(1_300_000),
///     days_worked: 30,
///     has_transport_aid: true,
/// };
/// let concepts = build_default_concepts(ConceptCatalog::global(), &context);
///
/// let transport = concepts.iter().find(|c| c.has_key("Auxilio de transporte")).unwrap();
/// assert_eq!(transport.amount, Decimal::from(162_000));
/// ```
pub fn build_default_concepts(catalog: &ConceptCatalog, context: &ProrationContext) -> Vec<Concept> {
    let mut concepts: Vec<Concept> = catalog
        .required()
        .map(|definition| {
            let amount = if definition.code == ConceptCode::Salary {
                context.salary
            } else {
                Decimal::ZERO
            };
            Concept::new(
                definition.key_name.clone(),
                definition.concept_type,
                amount,
                Decimal::ZERO,
            )
        })
        .collect();

    if context.has_transport_aid {
        match catalog.transport_subsidy() {
            Some(definition) => {
                let days = Decimal::from(context.days_worked);
                let full_value = definition
                    .day_based_full_value
                    .unwrap_or(context.base_salary);
                concepts.push(Concept::new(
                    definition.key_name.clone(),
                    definition.concept_type,
                    round(day_prorated(full_value, days)),
                    days,
                ));
            }
            None => warn!("Transport aid granted but catalog has no transport subsidy"),
        }
    }

    adjust_to_base_salary(catalog, &concepts, context)
}

/// Recomputes a single concept after an edit, such as a new overtime quantity.
///
/// Uses the catalog formula for the concept's subtype. Direct-value amounts
/// are kept (rounded).
///
/// # Errors
///
/// Returns `ConceptNotFound` if the key name is not in the catalog.
pub fn recalculate_concept(
    catalog: &ConceptCatalog,
    concept: &Concept,
    context: &ProrationContext,
) -> EngineResult<Concept> {
    let definition = catalog.lookup(&concept.key_name)?;
    let result = calculate_concept(definition, concept, context, 1);

    debug!(
        key_name = %definition.key_name,
        rule_id = definition.subtype.rule_id(),
        amount = %result.amount,
        "Concept recalculated"
    );

    let mut recalculated = concept.clone();
    recalculated.amount = result.amount;
    Ok(recalculated)
}
