//! Approximate net benefit.
//!
//! Benefit payments are subject to income tax withholding and to the
//! worker's share of social security contributions. This module applies
//! both as flat percentages to give an approximate take-home figure.

use crate::models::{AuditStep, BenefitResult, DeductionRates, NetBenefit};

use super::currency::format_eur;
use super::rounding::round2;

/// The result of a net benefit calculation, including the audit step.
#[derive(Debug, Clone)]
pub struct NetBenefitCalculation {
    /// The net view of the benefit.
    pub result: NetBenefit,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Applies deductions to a gross benefit schedule.
///
/// Monthly nets are rounded individually; the net total is computed from the
/// unrounded monthly nets so it does not accumulate rounding error.
///
/// # Examples
///
/// ```
/// use finiquito_engine::calculation::{estimate_benefit, estimate_net_benefit};
/// use finiquito_engine::models::{BenefitInput, DeductionRates};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let gross = estimate_benefit(&BenefitInput {
///     regulatory_base_salary: Decimal::from(2200),
///     contribution_days: 1320,
///     dependent_children: 0,
/// });
/// let net = estimate_net_benefit(&gross, &DeductionRates {
///     income_tax_withholding_percent: Decimal::from(2),
///     social_security_percent: Decimal::from_str("4.7").unwrap(),
/// });
/// assert_eq!(net.tier1_monthly_net, Decimal::from_str("1142.93").unwrap());
/// ```
pub fn estimate_net_benefit(gross: &BenefitResult, deductions: &DeductionRates) -> NetBenefit {
    let factor = deductions.retention_factor();
    let tier1_net = gross.tier1_monthly_amount * factor;
    let tier2_net = gross.tier2_monthly_amount * factor;

    NetBenefit {
        deductions: *deductions,
        tier1_monthly_net: round2(tier1_net),
        tier2_monthly_net: round2(tier2_net),
        total_net: round2(tier1_net * gross.tier1_months + tier2_net * gross.tier2_months),
    }
}

/// Applies deductions and records the step in the audit trace.
pub fn calculate_net_benefit(
    gross: &BenefitResult,
    deductions: &DeductionRates,
    step_number: u32,
) -> NetBenefitCalculation {
    let result = estimate_net_benefit(gross, deductions);
    let factor = deductions.retention_factor();

    let audit_step = AuditStep {
        step_number,
        rule_id: "net_benefit".to_string(),
        rule_name: "Approximate Net Benefit".to_string(),
        legal_ref: "LIRPF art. 17; LGSS art. 273".to_string(),
        input: serde_json::json!({
            "income_tax_withholding_percent": deductions.income_tax_withholding_percent.to_string(),
            "social_security_percent": deductions.social_security_percent.to_string(),
            "total_estimated": gross.total_estimated.to_string(),
        }),
        output: serde_json::json!({
            "retention_factor": factor.normalize().to_string(),
            "tier1_monthly_net": result.tier1_monthly_net.to_string(),
            "tier2_monthly_net": result.tier2_monthly_net.to_string(),
            "total_net": result.total_net.to_string(),
        }),
        reasoning: format!(
            "Keeping {} of each payment ({}% IRPF, {}% social security) => {} net total",
            factor.normalize(),
            deductions.income_tax_withholding_percent.normalize(),
            deductions.social_security_percent.normalize(),
            format_eur(result.total_net)
        ),
    };

    NetBenefitCalculation { result, audit_step }
}
