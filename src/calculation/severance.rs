//! Severance estimation.
//!
//! Severance is a number of days of salary per year of service, with the
//! rate and the cap depending on how the employment ended:
//!
//! | Termination            | Days/year                     | Cap              |
//! |------------------------|-------------------------------|------------------|
//! | Ordinary-unjustified   | 45 before 2012-02-12, 33 after | 24 monthly salaries |
//! | Objective cause        | 20                            | 12 monthly salaries |
//! | Contract expiry        | 12                            | none             |
//! | Voluntary leave        | 0                             | -                |

use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{AuditStep, SeveranceInput, SeveranceResult, TerminationType};

use super::currency::format_eur;
use super::rounding::round2;

/// Days in the notional month used to derive a daily salary.
pub const DAYS_PER_MONTH: Decimal = Decimal::from_parts(30, 0, 0, false, 0);

/// Days of salary per year for unjustified dismissal, service before the cutover.
pub const UNJUSTIFIED_PRE_CUTOVER_DAYS_PER_YEAR: Decimal = Decimal::from_parts(45, 0, 0, false, 0);
/// Days of salary per year for unjustified dismissal, service after the cutover.
pub const UNJUSTIFIED_POST_CUTOVER_DAYS_PER_YEAR: Decimal =
    Decimal::from_parts(33, 0, 0, false, 0);
/// Days of salary per year for dismissal on objective grounds.
pub const OBJECTIVE_DAYS_PER_YEAR: Decimal = Decimal::from_parts(20, 0, 0, false, 0);
/// Days of salary per year at the end of a fixed-term contract.
pub const CONTRACT_EXPIRY_DAYS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// Cap for unjustified dismissal, in monthly salaries.
pub const UNJUSTIFIED_CAP_MONTHS: Decimal = Decimal::from_parts(24, 0, 0, false, 0);
/// Cap for objective dismissal, in monthly salaries.
pub const OBJECTIVE_CAP_MONTHS: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// A portion of service paid at a single daily rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeveranceTranche {
    /// Days of salary owed per year of service.
    pub days_per_year: Decimal,
    /// Fractional years of service in this tranche.
    pub years: Decimal,
    /// Unrounded amount for this tranche.
    pub amount: Decimal,
}

/// Intermediate figures behind a severance estimate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeveranceBreakdown {
    /// Monthly salary divided by [`DAYS_PER_MONTH`].
    pub daily_salary: Decimal,
    /// The tranches that were summed.
    pub tranches: Vec<SeveranceTranche>,
    /// Sum of all tranches before the cap.
    pub uncapped: Decimal,
    /// The cap in euros, `None` when uncapped.
    pub cap: Option<Decimal>,
    /// Whether the cap reduced the amount.
    pub cap_applied: bool,
    /// Final rounded amount.
    pub amount: Decimal,
}

/// The result of a severance calculation, including the audit step.
#[derive(Debug, Clone)]
pub struct SeveranceCalculation {
    /// The severance estimate.
    pub result: SeveranceResult,
    /// How the estimate was reached.
    pub breakdown: SeveranceBreakdown,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Statutory reference for each termination category.
pub fn severance_legal_ref(termination_type: TerminationType) -> &'static str {
    match termination_type {
        TerminationType::OrdinaryUnjustified => "ET art. 56.1; Ley 3/2012 DT 11ª",
        TerminationType::ObjectiveCause => "ET art. 53.1.b",
        TerminationType::ContractExpiry => "ET art. 49.1.c",
        TerminationType::VoluntaryLeave => "ET art. 49.1.d",
    }
}

fn tranche(daily_salary: Decimal, days_per_year: Decimal, years: Decimal) -> SeveranceTranche {
    SeveranceTranche {
        days_per_year,
        years,
        amount: daily_salary * days_per_year * years,
    }
}

/// Works out every intermediate figure of a severance estimate.
pub fn severance_breakdown(input: &SeveranceInput) -> SeveranceBreakdown {
    let salary = input.monthly_gross_salary;
    let daily_salary = salary / DAYS_PER_MONTH;
    let total_years = input.tenure.in_years();

    let (tranches, cap) = match input.termination_type {
        TerminationType::OrdinaryUnjustified => (
            vec![
                tranche(
                    daily_salary,
                    UNJUSTIFIED_PRE_CUTOVER_DAYS_PER_YEAR,
                    input.pre_cutover_tenure.in_years(),
                ),
                tranche(
                    daily_salary,
                    UNJUSTIFIED_POST_CUTOVER_DAYS_PER_YEAR,
                    input.post_cutover_years(),
                ),
            ],
            Some(salary * UNJUSTIFIED_CAP_MONTHS),
        ),
        TerminationType::ObjectiveCause => (
            vec![tranche(daily_salary, OBJECTIVE_DAYS_PER_YEAR, total_years)],
            Some(salary * OBJECTIVE_CAP_MONTHS),
        ),
        TerminationType::ContractExpiry => (
            vec![tranche(daily_salary, CONTRACT_EXPIRY_DAYS_PER_YEAR, total_years)],
            None,
        ),
        TerminationType::VoluntaryLeave => (Vec::new(), None),
    };

    let uncapped: Decimal = tranches.iter().map(|t| t.amount).sum();
    let capped = cap.map_or(uncapped, |cap| uncapped.min(cap));

    SeveranceBreakdown {
        daily_salary,
        tranches,
        uncapped,
        cap,
        cap_applied: capped < uncapped,
        amount: round2(capped),
    }
}

/// Estimates the severance owed for a termination.
///
/// Never fails: zero salary, zero tenure and voluntary leave all yield zero.
///
/// # Examples
///
/// ```
/// use finiquito_engine::calculation::estimate_severance;
/// use finiquito_engine::models::{SeveranceInput, Tenure, TerminationType};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let input = SeveranceInput {
///     termination_type: TerminationType::OrdinaryUnjustified,
///     monthly_gross_salary: Decimal::from(2200),
///     tenure: Tenure::new(4, 6),
///     pre_cutover_tenure: Tenure::ZERO,
/// };
/// assert_eq!(
///     estimate_severance(&input).amount,
///     Decimal::from_str("10890.00").unwrap()
/// );
/// ```
pub fn estimate_severance(input: &SeveranceInput) -> SeveranceResult {
    SeveranceResult {
        amount: severance_breakdown(input).amount,
    }
}

/// Estimates severance and records the decision as an audit step.
pub fn calculate_severance(input: &SeveranceInput, step_number: u32) -> SeveranceCalculation {
    let breakdown = severance_breakdown(input);

    let reasoning = if breakdown.tranches.is_empty() {
        format!("No severance is owed for {}", input.termination_type.code())
    } else {
        let parts: Vec<String> = breakdown
            .tranches
            .iter()
            .map(|t| {
                format!(
                    "{} days/year x {} years",
                    t.days_per_year,
                    round2(t.years).normalize()
                )
            })
            .collect();
        let cap_note = match (breakdown.cap, breakdown.cap_applied) {
            (Some(cap), true) => format!(", capped at {}", format_eur(cap)),
            (Some(cap), false) => format!(", below cap of {}", format_eur(cap)),
            (None, _) => ", uncapped".to_string(),
        };
        format!(
            "{} daily salary x ({}) = {}{}",
            format_eur(breakdown.daily_salary),
            parts.join(" + "),
            format_eur(breakdown.amount),
            cap_note
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "severance".to_string(),
        rule_name: "Severance Estimate".to_string(),
        legal_ref: severance_legal_ref(input.termination_type).to_string(),
        input: serde_json::json!({
            "termination_type": input.termination_type.code(),
            "monthly_gross_salary": input.monthly_gross_salary.to_string(),
            "tenure": input.tenure,
            "pre_cutover_tenure": input.pre_cutover_tenure,
        }),
        output: serde_json::json!({
            "daily_salary": round2(breakdown.daily_salary).to_string(),
            "uncapped": round2(breakdown.uncapped).to_string(),
            "cap": breakdown.cap.map(|cap| round2(cap).to_string()),
            "cap_applied": breakdown.cap_applied,
            "amount": breakdown.amount.to_string(),
        }),
        reasoning,
    };

    SeveranceCalculation {
        result: SeveranceResult {
            amount: breakdown.amount,
        },
        breakdown,
        audit_step,
    }
}
