//! Built-in concept table.
//!
//! Follows Colombian payroll conventions. Labels are display text only;
//! anything that needs identity matches on [`ConceptCode`].

use rust_decimal::Decimal;

use super::types::{CalculationSubtype, ConceptCode, ConceptDefinition};
use crate::models::ConceptType;

/// Full-month transport subsidy.
pub const TRANSPORT_SUBSIDY_MONTHLY: i64 = 162_000;

/// Returns the built-in definitions in display order.
pub fn builtin_definitions() -> Vec<ConceptDefinition> {
    use CalculationSubtype::*;
    use ConceptCode as C;
    use ConceptType::{Deduction, Income};

    fn pct(value: i64) -> Decimal {
        Decimal::from(value)
    }

    vec![
        // Income
        ConceptDefinition::new(C::Salary, "Salario", Income, DirectValue)
            .as_required()
            .as_read_only(),
        ConceptDefinition::new(C::TransportSubsidy, "Auxilio de transporte", Income, DayProrated)
            .as_read_only()
            .with_full_value(Decimal::from(TRANSPORT_SUBSIDY_MONTHLY))
            .in_whole_units(),
        ConceptDefinition::new(C::DaytimeOvertime, "Horas extra diurnas", Income, QuantityBased)
            .with_percentage(pct(25)),
        ConceptDefinition::new(C::NightOvertime, "Horas extra nocturnas", Income, QuantityBased)
            .with_percentage(pct(75)),
        ConceptDefinition::new(C::NightSurcharge, "Recargo nocturno", Income, QuantityBased)
            .with_percentage(pct(35)),
        ConceptDefinition::new(
            C::HolidayDaytimeOvertime,
            "Horas extra diurnas dominicales y festivas",
            Income,
            QuantityBased,
        )
        .with_percentage(pct(100)),
        ConceptDefinition::new(
            C::HolidayNightOvertime,
            "Horas extra nocturnas dominicales y festivas",
            Income,
            QuantityBased,
        )
        .with_percentage(pct(150)),
        ConceptDefinition::new(
            C::HolidaySurcharge,
            "Recargo dominical y festivo",
            Income,
            QuantityBased,
        )
        .with_percentage(pct(75)),
        ConceptDefinition::new(
            C::HolidayNightSurcharge,
            "Recargo nocturno dominical y festivo",
            Income,
            QuantityBased,
        )
        .with_percentage(pct(110)),
        ConceptDefinition::new(C::Vacation, "Vacaciones", Income, DayProrated).in_whole_units(),
        // Paid at two thirds of the daily base.
        ConceptDefinition::new(C::SickLeave, "Incapacidad", Income, DayProrated)
            .with_multiplier(Decimal::new(6667, 4))
            .in_whole_units(),
        ConceptDefinition::new(C::ServiceBonus, "Prima de servicios", Income, Layoff),
        ConceptDefinition::new(C::Layoff, "Cesantías", Income, Layoff)
            .as_required()
            .as_read_only(),
        ConceptDefinition::new(
            C::LayoffInterest,
            "Intereses a las cesantías",
            Income,
            LayoffInterest,
        )
        .as_required()
        .as_read_only(),
        ConceptDefinition::new(C::Bonus, "Bonificación", Income, DirectValue),
        ConceptDefinition::new(C::Commission, "Comisión", Income, DirectValue),
        // Deductions
        ConceptDefinition::new(C::HealthContribution, "Salud", Deduction, PercentOfSalary)
            .as_required()
            .as_read_only()
            .with_percentage(pct(4)),
        ConceptDefinition::new(C::PensionContribution, "Pensión", Deduction, PercentOfSalary)
            .as_required()
            .as_read_only()
            .with_percentage(pct(4)),
        ConceptDefinition::new(
            C::PensionSolidarityFund,
            "Fondo de solidaridad pensional",
            Deduction,
            PercentOfSalary,
        )
        .with_percentage(pct(1)),
        ConceptDefinition::new(
            C::WithholdingTax,
            "Retención en la fuente",
            Deduction,
            DirectValue,
        ),
        ConceptDefinition::new(C::UnionDues, "Sindicato", Deduction, PercentOfSalary)
            .with_percentage(pct(1)),
        ConceptDefinition::new(C::PayrollLoan, "Libranza", Deduction, DirectValue),
        ConceptDefinition::new(C::SalaryAdvance, "Anticipo", Deduction, DirectValue),
    ]
}
