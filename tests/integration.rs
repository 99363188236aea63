//! Integration tests for the finance engine.
//!
//! This test suite covers the public API end to end:
//! - Document lines and totals, including refunds and JSON input
//! - Payroll default concepts, edits and summaries
//! - Proration across pay frequencies
//! - Configuration loading

use rust_decimal::Decimal;
use serde_json::{Value, json};
use std::str::FromStr;

use finance_engine::calculation::{
    aggregate_document, base_salary_from_portion, build_default_concepts, calculate_document,
    calculate_line_totals, portion_from_full, recalculate_concept, summarize_payroll,
    validate_concepts,
};
use finance_engine::catalog::{ConceptCatalog, ConceptCode};
use finance_engine::config::ConfigLoader;
use finance_engine::error::{EngineError, ValidationIssue};
use finance_engine::models::{
    CalculationConfig, Concept, ConceptType, DocumentTotals, LineItem, LineTotals,
    ProrationContext,
};

// =============================================================================
// Test Helpers
// =============================================================================

fn decimal(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn line(price: &str, quantity: &str, tax: &str, discount: &str) -> LineItem {
    LineItem::new(decimal(price), decimal(quantity), decimal(tax), decimal(discount))
}

fn config(tax_included: bool, retention: &str) -> CalculationConfig {
    CalculationConfig {
        tax_included,
        retention_percent: decimal(retention),
    }
}

fn assert_line_totals(
    totals: &LineTotals,
    total: &str,
    subtotal: &str,
    tax: &str,
    discount: &str,
    retention: &str,
) {
    assert_eq!(totals.total, decimal(total), "total");
    assert_eq!(totals.subtotal, decimal(subtotal), "subtotal");
    assert_eq!(totals.total_tax, decimal(tax), "total_tax");
    assert_eq!(totals.total_discount, decimal(discount), "total_discount");
    assert_eq!(totals.total_retention, decimal(retention), "total_retention");
}

fn find<'a>(concepts: &'a [Concept], key_name: &str) -> &'a Concept {
    concepts
        .iter()
        .find(|c| c.has_key(key_name))
        .unwrap_or_else(|| panic!("Concept {} not found", key_name))
}

fn amount_of(concepts: &[Concept], key_name: &str) -> Decimal {
    find(concepts, key_name).amount
}

// =============================================================================
// SECTION 1: Document Lines
// =============================================================================

#[test]
fn test_line_tax_included_with_discount() {
    let totals = calculate_line_totals(&line("100", "2", "19", "10"), &config(true, "0"));
    assert_line_totals(&totals, "183.19", "168.07", "31.93", "16.81", "0");
}

#[test]
fn test_line_tax_excluded() {
    let totals = calculate_line_totals(&line("100", "2", "10", "0"), &config(false, "0"));
    assert_line_totals(&totals, "220", "200", "20", "0", "0");
}

#[test]
fn test_line_fractional_rates() {
    let totals = calculate_line_totals(
        &line("100.333", "3", "12.3", "5.333"),
        &config(true, "0"),
    );
    assert_line_totals(&totals, "286.71", "268.03", "32.97", "14.29", "0");
}

#[test]
fn test_line_zero_quantity() {
    let totals = calculate_line_totals(&line("100", "0", "19", "10"), &config(true, "4"));
    assert_eq!(totals, LineTotals::default());
}

#[test]
fn test_line_from_json_keeps_extra_fields() {
    let value = json!({
        "price": "100",
        "quantity": "2",
        "tax_percent": "19",
        "discount_percent": "10",
        "description": "Consulting hours",
        "product_code": "SRV-01"
    });

    let item: LineItem = serde_json::from_value(value).unwrap();
    assert_eq!(item.extra["description"], json!("Consulting hours"));
    assert_eq!(item.extra.len(), 2);

    let totals = calculate_line_totals(&item, &config(true, "0"));
    assert_eq!(totals.total, decimal("183.19"));
}

#[test]
fn test_line_from_json_defaults_rates() {
    let item: LineItem = serde_json::from_value(json!({ "price": "50", "quantity": "3" })).unwrap();
    let totals = calculate_line_totals(&item, &config(false, "0"));
    assert_line_totals(&totals, "150", "150", "0", "0", "0");
}

// =============================================================================
// SECTION 2: Document Totals
// =============================================================================

#[test]
fn test_document_empty() {
    assert_eq!(
        aggregate_document(&[], &config(true, "2.5")),
        DocumentTotals::default()
    );
}

#[test]
fn test_document_invoice_with_refund() {
    let lines = vec![
        line("100", "2", "19", "10"),
        line("100.333", "3", "12.3", "5.333"),
        line("119", "-1", "19", "0"),
    ];

    let calculation = calculate_document(&lines, &config(true, "0"));

    // Refund line: 119 with 19% included = 100 net + 19 tax
    assert_line_totals(&calculation.lines[2].totals, "-119", "-100", "-19", "0", "0");
    assert!(calculation.lines[2].is_refund);

    assert_eq!(calculation.totals.total, decimal("350.90"));
    assert_eq!(calculation.totals.subtotal, decimal("336.10"));
    assert_eq!(calculation.totals.total_tax, decimal("45.90"));
    assert_eq!(calculation.totals.total_discount, decimal("31.10"));
    assert_eq!(calculation.totals.total_refunds, decimal("-119"));
}

#[test]
fn test_document_with_retention() {
    let lines = vec![line("1000", "1", "19", "0"), line("500", "2", "19", "5")];
    let totals = aggregate_document(&lines, &config(false, "2.5"));

    assert_eq!(totals.total_tax, decimal("380"));
    assert_eq!(totals.total_retention, decimal("50"));
    assert_eq!(totals.total_discount, decimal("50"));
    assert_eq!(totals.subtotal, decimal("1950"));
    assert_eq!(totals.total, decimal("2280"));
}

#[test]
fn test_document_out_of_range_line_clamps() {
    let huge: LineItem =
        serde_json::from_value(json!({ "price": "70000000000000000000000000000", "quantity": "2" }))
            .unwrap();

    let totals = aggregate_document(&[huge], &config(false, "0"));

    assert_eq!(totals.subtotal, Decimal::MAX);
    assert_eq!(totals.total, Decimal::MAX);
    assert_eq!(totals.total_refunds, Decimal::ZERO);
}

#[test]
fn test_document_totals_serialize_as_strings() {
    let totals = aggregate_document(&[line("100", "2", "10", "0")], &config(false, "0"));
    let value: Value = serde_json::to_value(totals).unwrap();

    assert_eq!(decimal(value["total"].as_str().unwrap()), decimal("220"));
    assert_eq!(decimal(value["total_refunds"].as_str().unwrap()), Decimal::ZERO);
}

// =============================================================================
// SECTION 3: Payroll Defaults
// =============================================================================

#[test]
fn test_payroll_defaults_full_month_with_aid() {
    let catalog = ConceptCatalog::global();
    let context = ProrationContext {
        salary: decimal("1300000"),
        base_salary: decimal("1300000"),
        days_worked: 30,
        has_transport_aid: true,
    };

    let concepts = build_default_concepts(catalog, &context);

    for definition in catalog.required() {
        assert!(
            concepts.iter().any(|c| c.has_key(&definition.key_name)),
            "missing {}",
            definition.key_name
        );
    }
    assert_eq!(amount_of(&concepts, "Auxilio de transporte"), decimal("162000"));
    assert_eq!(amount_of(&concepts, "Cesantías"), decimal("108333.33"));
    assert_eq!(amount_of(&concepts, "Intereses a las cesantías"), decimal("1083.33"));
    assert!(validate_concepts(catalog, &concepts).is_empty());
}

#[test]
fn test_payroll_defaults_weekly() {
    let catalog = ConceptCatalog::global();
    let context = ProrationContext::for_period(decimal("325000"), 7, true).unwrap();

    let concepts = build_default_concepts(catalog, &context);

    assert_eq!(amount_of(&concepts, "Salario"), decimal("325000"));
    assert_eq!(amount_of(&concepts, "Salud"), decimal("13000"));
    assert_eq!(amount_of(&concepts, "Auxilio de transporte"), decimal("37800"));
    // 1,300,000 x 7 / 360
    assert_eq!(amount_of(&concepts, "Cesantías"), decimal("25277.78"));
}

// =============================================================================
// SECTION 4: Payroll Edits and Validation
// =============================================================================

#[test]
fn test_payroll_overtime_edit_then_summary() {
    let catalog = ConceptCatalog::global();
    let context = ProrationContext::for_period(decimal("1200000"), 30, false).unwrap();
    let mut concepts = build_default_concepts(catalog, &context);

    let overtime = Concept::new(
        "Horas extra nocturnas",
        ConceptType::Income,
        Decimal::ZERO,
        decimal("4"),
    );
    concepts.push(recalculate_concept(catalog, &overtime, &context).unwrap());

    let result = summarize_payroll(catalog, &concepts, &context);

    assert_eq!(amount_of(&result.concepts, "Horas extra nocturnas"), decimal("35000"));
    // 1,200,000 + 100,000 + 1,000 + 35,000
    assert_eq!(result.totals.total_income, decimal("1336000"));
    assert_eq!(result.totals.total_deductions, decimal("96000"));
    assert_eq!(result.totals.net_pay, decimal("1240000"));
    assert!(result.is_valid());
}

#[test]
fn test_payroll_salary_change_recomputes_dependents() {
    let catalog = ConceptCatalog::global();
    let first = ProrationContext::for_period(decimal("1300000"), 30, false).unwrap();
    let concepts = build_default_concepts(catalog, &first);

    let raised = ProrationContext::for_period(decimal("1440000"), 30, false).unwrap();
    let result = summarize_payroll(catalog, &concepts, &raised);

    assert_eq!(amount_of(&result.concepts, "Salario"), decimal("1440000"));
    assert_eq!(amount_of(&result.concepts, "Cesantías"), decimal("120000"));
    assert_eq!(amount_of(&result.concepts, "Intereses a las cesantías"), decimal("1200"));
    assert_eq!(amount_of(&result.concepts, "Pensión"), decimal("57600"));
    assert_eq!(amount_of(&concepts, "Salario"), decimal("1300000"));
}

#[test]
fn test_payroll_validation_missing_salary_and_duplicate() {
    let catalog = ConceptCatalog::global();
    let context = ProrationContext::for_period(decimal("1300000"), 30, false).unwrap();
    let mut concepts: Vec<Concept> = build_default_concepts(catalog, &context)
        .into_iter()
        .filter(|c| !c.has_key("Salario"))
        .collect();
    concepts.push(Concept::new("pensión", ConceptType::Deduction, Decimal::ZERO, Decimal::ZERO));

    let issues = validate_concepts(catalog, &concepts);

    assert!(issues.contains(&ValidationIssue::MissingRequiredConcept {
        key_name: "Salario".to_string()
    }));
    assert!(issues.contains(&ValidationIssue::DuplicateConcept {
        key_name: "Pensión".to_string()
    }));
    assert_eq!(issues.len(), 2);
}

#[test]
fn test_payroll_result_json_shape() {
    let catalog = ConceptCatalog::global();
    let context = ProrationContext::for_period(decimal("650000"), 15, true).unwrap();
    let concepts = build_default_concepts(catalog, &context);

    let result = summarize_payroll(catalog, &concepts, &context);
    let value: Value = serde_json::to_value(&result).unwrap();

    assert!(value["calculation_id"].is_string());
    assert_eq!(value["context"]["days_worked"], json!(15));
    assert_eq!(value["concepts"][0]["type"], json!("income"));
    assert_eq!(value["audit_trace"]["steps"][0]["rule_id"], json!("direct_value"));
    assert!(value["audit_trace"]["warnings"].as_array().unwrap().is_empty());
}

#[test]
fn test_catalog_codes_match_labels() {
    let catalog = ConceptCatalog::global();
    assert_eq!(catalog.lookup("salud").unwrap().code, ConceptCode::HealthContribution);
    assert_eq!(
        catalog.get(ConceptCode::TransportSubsidy).unwrap().key_name,
        "Auxilio de transporte"
    );
}

// =============================================================================
// SECTION 5: Proration
// =============================================================================

#[test]
fn test_proration_round_trip_each_frequency() {
    let monthly = decimal("1300000");
    for (days, portion) in [(7, "325000"), (15, "650000"), (30, "1300000")] {
        assert_eq!(portion_from_full(monthly, days).unwrap(), decimal(portion));
        assert_eq!(base_salary_from_portion(days, decimal(portion)).unwrap(), monthly);
    }
}

#[test]
fn test_proration_unsupported_period() {
    match ProrationContext::for_period(decimal("1000000"), 31, false) {
        Err(EngineError::UnsupportedProrationFrequency { days_worked }) => assert_eq!(days_worked, 31),
        other => panic!("Expected UnsupportedProrationFrequency, got {:?}", other),
    }
}

// =============================================================================
// SECTION 6: Configuration
// =============================================================================

#[test]
fn test_config_drives_document_and_payroll() {
    let loader = ConfigLoader::load("./config/default").expect("Failed to load config");

    let totals = aggregate_document(&[line("100", "2", "10", "0")], &loader.calculation_config());
    assert_eq!(totals.total, decimal("220"));

    let eligible =
        ProrationContext::from_settings(decimal("1300000"), 30, loader.payroll()).unwrap();
    assert!(eligible.has_transport_aid);

    let above = ProrationContext::from_settings(decimal("1500000"), 15, loader.payroll()).unwrap();
    assert_eq!(above.base_salary, decimal("3000000"));
    assert!(!above.has_transport_aid);
}

#[test]
fn test_config_errors() {
    assert!(matches!(
        ConfigLoader::load("./tests/fixtures/missing"),
        Err(EngineError::ConfigNotFound { .. })
    ));
    assert!(matches!(
        ConfigLoader::load("./tests/fixtures/malformed"),
        Err(EngineError::ConfigParseError { .. })
    ));
    assert!(matches!(
        ConfigLoader::load("./tests/fixtures/negative_retention"),
        Err(EngineError::InvalidConfig { .. })
    ));
}
