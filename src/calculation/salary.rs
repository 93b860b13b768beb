//! Monthly salary resolution.

use rust_decimal::Decimal;

use crate::models::{AuditStep, SalaryBasis};

use super::currency::format_eur;
use super::rounding::round2;

/// The monthly salary used for severance, with its audit step.
#[derive(Debug, Clone)]
pub struct MonthlySalaryResolution {
    /// Gross monthly salary (unrounded when derived from an annual figure).
    pub monthly_gross_salary: Decimal,
    /// The audit step recording where the figure came from.
    pub audit_step: AuditStep,
}

/// Resolves the gross monthly salary from the way it was stated.
pub fn resolve_monthly_salary(basis: &SalaryBasis, step_number: u32) -> MonthlySalaryResolution {
    let monthly_gross_salary = basis.monthly_gross_salary();

    let reasoning = match *basis {
        SalaryBasis::Monthly { monthly_gross } => {
            format!("Using stated monthly gross salary of {}", format_eur(monthly_gross))
        }
        SalaryBasis::Annual {
            payments_per_year: 0,
            ..
        } => "Annual salary split into 0 payments => monthly salary of 0".to_string(),
        SalaryBasis::Annual {
            annual_gross,
            payments_per_year,
        } => format!(
            "{} / {} payments = {} per month",
            format_eur(annual_gross),
            payments_per_year,
            format_eur(monthly_gross_salary)
        ),
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "monthly_salary".to_string(),
        rule_name: "Monthly Gross Salary".to_string(),
        legal_ref: "ET art. 26".to_string(),
        input: serde_json::to_value(basis).unwrap_or(serde_json::Value::Null),
        output: serde_json::json!({
            "monthly_gross_salary": round2(monthly_gross_salary).to_string(),
        }),
        reasoning,
    };

    MonthlySalaryResolution {
        monthly_gross_salary,
        audit_step,
    }
}
