//! Unemployment benefit estimation.
//!
//! The benefit is paid for a duration taken from the contribution scale.
//! The first 180 days pay 70% of the regulatory base and the rest pay 60%,
//! each tier clamped to the household's statutory minimum and maximum
//! (LGSS article 270).

use rust_decimal::Decimal;

use crate::models::{AuditStep, BenefitInput, BenefitResult};

use super::benefit_duration::{MINIMUM_CONTRIBUTION_DAYS, benefit_duration_band};
use super::benefit_limits::{BenefitLimits, benefit_limits};
use super::currency::format_eur;
use super::rounding::{clamp, round2};

/// Days paid at the first-tier rate.
pub const TIER1_MAX_DAYS: u32 = 180;

/// Share of the regulatory base paid during the first tier.
pub const TIER1_RATE: Decimal = Decimal::from_parts(70, 0, 0, false, 2);

/// Share of the regulatory base paid during the second tier.
pub const TIER2_RATE: Decimal = Decimal::from_parts(60, 0, 0, false, 2);

/// Days per benefit month when converting day counts to months.
pub const BENEFIT_DAYS_PER_MONTH: Decimal = Decimal::from_parts(30, 0, 0, false, 0);

/// The result of a benefit calculation, including audit steps.
#[derive(Debug, Clone)]
pub struct BenefitCalculation {
    /// The benefit estimate.
    pub result: BenefitResult,
    /// Limits used for clamping, `None` when there is no entitlement.
    pub limits: Option<BenefitLimits>,
    /// The audit steps recording this calculation.
    pub audit_steps: Vec<AuditStep>,
}

fn days_to_months(days: u32) -> Decimal {
    round2(Decimal::from(days) / BENEFIT_DAYS_PER_MONTH)
}

fn tier_days(duration_days: u32) -> (u32, u32) {
    (
        duration_days.min(TIER1_MAX_DAYS),
        duration_days.saturating_sub(TIER1_MAX_DAYS),
    )
}

fn build_result(input: &BenefitInput, duration_days: u32, limits: BenefitLimits) -> BenefitResult {
    let (tier1_days, tier2_days) = tier_days(duration_days);

    let tier1_monthly_amount = clamp(
        TIER1_RATE * input.regulatory_base_salary,
        limits.min,
        limits.max,
    );
    let tier2_monthly_amount = clamp(
        TIER2_RATE * input.regulatory_base_salary,
        limits.min,
        limits.max,
    );

    let tier1_months = days_to_months(tier1_days);
    let tier2_months = days_to_months(tier2_days);

    let total_estimated =
        round2(tier1_monthly_amount * tier1_months + tier2_monthly_amount * tier2_months);

    BenefitResult {
        duration_days,
        tier1_months,
        tier2_months,
        tier1_monthly_amount: round2(tier1_monthly_amount),
        tier2_monthly_amount: round2(tier2_monthly_amount),
        total_estimated,
    }
}

/// Estimates the unemployment benefit schedule.
///
/// Never fails. Fewer than 360 contribution days returns
/// [`BenefitResult::zero`]. A zero regulatory base is clamped up to the
/// statutory minimum like any other low base.
///
/// # Examples
///
/// ```
/// use finiquito_engine::calculation::estimate_benefit;
/// use finiquito_engine::models::BenefitInput;
/// use rust_decimal::Decimal;
///
/// let result = estimate_benefit(&BenefitInput {
///     regulatory_base_salary: Decimal::from(2200),
///     contribution_days: 1320,
///     dependent_children: 0,
/// });
/// assert_eq!(result.duration_days, 420);
/// assert_eq!(result.tier1_months, Decimal::from(6));
/// assert_eq!(result.tier2_months, Decimal::from(8));
/// ```
pub fn estimate_benefit(input: &BenefitInput) -> BenefitResult {
    match benefit_duration_band(input.contribution_days) {
        Some(band) => build_result(
            input,
            band.benefit_days,
            benefit_limits(input.dependent_children),
        ),
        None => BenefitResult::zero(),
    }
}

/// Estimates the benefit and records each stage as an audit step.
///
/// Produces a duration step, and when there is an entitlement, a limits
/// step and a tier step. Step numbers start at `step_number`.
pub fn calculate_benefit(input: &BenefitInput, step_number: u32) -> BenefitCalculation {
    let band = benefit_duration_band(input.contribution_days);
    let mut audit_steps = Vec::with_capacity(3);

    let duration_reasoning = match band {
        Some(band) => format!(
            "{} contribution days falls in {}-{} => {} benefit days",
            input.contribution_days,
            band.min_contribution_days,
            band.max_contribution_days
                .map_or_else(|| "or more".to_string(), |max| max.to_string()),
            band.benefit_days
        ),
        None => format!(
            "{} contribution days is below the {} day minimum => no entitlement",
            input.contribution_days, MINIMUM_CONTRIBUTION_DAYS
        ),
    };
    audit_steps.push(AuditStep {
        step_number,
        rule_id: "benefit_duration".to_string(),
        rule_name: "Benefit Duration Lookup".to_string(),
        legal_ref: "LGSS art. 269.1".to_string(),
        input: serde_json::json!({
            "contribution_days": input.contribution_days,
        }),
        output: serde_json::json!({
            "duration_days": band.map_or(0, |b| b.benefit_days),
            "band": band,
        }),
        reasoning: duration_reasoning,
    });

    let Some(band) = band else {
        return BenefitCalculation {
            result: BenefitResult::zero(),
            limits: None,
            audit_steps,
        };
    };

    let limits = benefit_limits(input.dependent_children);
    audit_steps.push(AuditStep {
        step_number: step_number + 1,
        rule_id: "benefit_limits".to_string(),
        rule_name: "Benefit Minimum and Maximum".to_string(),
        legal_ref: "LGSS art. 270.3".to_string(),
        input: serde_json::json!({
            "dependent_children": input.dependent_children,
        }),
        output: serde_json::json!({
            "min": limits.min.to_string(),
            "max": limits.max.to_string(),
        }),
        reasoning: format!(
            "{} dependent children => monthly benefit between {} and {}",
            input.dependent_children,
            format_eur(limits.min),
            format_eur(limits.max)
        ),
    });

    let result = build_result(input, band.benefit_days, limits);
    audit_steps.push(AuditStep {
        step_number: step_number + 2,
        rule_id: "benefit_tiers".to_string(),
        rule_name: "Benefit Tier Amounts".to_string(),
        legal_ref: "LGSS art. 270.2".to_string(),
        input: serde_json::json!({
            "regulatory_base_salary": input.regulatory_base_salary.to_string(),
            "duration_days": result.duration_days,
        }),
        output: serde_json::json!({
            "tier1_months": result.tier1_months.to_string(),
            "tier1_monthly_amount": result.tier1_monthly_amount.to_string(),
            "tier2_months": result.tier2_months.to_string(),
            "tier2_monthly_amount": result.tier2_monthly_amount.to_string(),
            "total_estimated": result.total_estimated.to_string(),
        }),
        reasoning: format!(
            "{} x {} months + {} x {} months = {}",
            format_eur(result.tier1_monthly_amount),
            result.tier1_months,
            format_eur(result.tier2_monthly_amount),
            result.tier2_months,
            format_eur(result.total_estimated)
        ),
    });

    BenefitCalculation {
        result,
        limits: Some(limits),
        audit_steps,
    }
}
