//! Unemployment benefit input and result models.
//!
//! This module contains the [`BenefitInput`] consumed by the benefit
//! estimator, the [`BenefitResult`] it produces, and the optional net
//! (after-deduction) view of that result.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Zero with two decimal places, so empty results serialise as `"0.00"`.
const ZERO_AMOUNT: Decimal = Decimal::from_parts(0, 0, 0, false, 2);

/// Facts needed to estimate an unemployment benefit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenefitInput {
    /// Regulatory base: average monthly contribution base in euros.
    pub regulatory_base_salary: Decimal,
    /// Days of contribution within the six-year lookback window.
    pub contribution_days: u32,
    /// Number of dependent children (only 0, 1 and 2+ are distinguished).
    #[serde(default)]
    pub dependent_children: u32,
}

/// The estimated benefit schedule, split in two tiers.
///
/// The first tier covers the first 180 days at 70% of the regulatory base;
/// the second covers the remainder at 60%. Both monthly amounts are clamped
/// to the statutory minimum and maximum for the household.
///
/// # Example
///
/// ```
/// use finiquito_engine::models::BenefitResult;
///
/// let none = BenefitResult::zero();
/// assert_eq!(none.duration_days, 0);
/// assert!(none.total_estimated.is_zero());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenefitResult {
    /// Total benefit duration in days.
    pub duration_days: u32,
    /// Months paid at the first-tier rate (at most 6).
    pub tier1_months: Decimal,
    /// Months paid at the second-tier rate.
    pub tier2_months: Decimal,
    /// Monthly amount during the first tier.
    pub tier1_monthly_amount: Decimal,
    /// Monthly amount during the second tier.
    pub tier2_monthly_amount: Decimal,
    /// Gross total over the whole benefit period.
    pub total_estimated: Decimal,
}

impl BenefitResult {
    /// The result for a worker with no entitlement.
    pub fn zero() -> Self {
        Self {
            duration_days: 0,
            tier1_months: ZERO_AMOUNT,
            tier2_months: ZERO_AMOUNT,
            tier1_monthly_amount: ZERO_AMOUNT,
            tier2_monthly_amount: ZERO_AMOUNT,
            total_estimated: ZERO_AMOUNT,
        }
    }

    /// Returns true when the worker has any entitlement at all.
    pub fn has_entitlement(&self) -> bool {
        self.duration_days > 0
    }
}

/// Percentages withheld from each benefit payment.
///
/// Used only to derive the approximate net view of a benefit; the gross
/// figures never depend on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionRates {
    /// Personal income tax withholding (IRPF), in percent.
    pub income_tax_withholding_percent: Decimal,
    /// Worker social security contribution, in percent.
    pub social_security_percent: Decimal,
}

impl DeductionRates {
    /// Fraction of the gross amount the worker keeps.
    ///
    /// Each percentage is clamped to 0-100 and the result is never negative.
    pub fn retention_factor(&self) -> Decimal {
        let hundred = Decimal::ONE_HUNDRED;
        let irpf = self.income_tax_withholding_percent.max(Decimal::ZERO).min(hundred);
        let social_security = self.social_security_percent.max(Decimal::ZERO).min(hundred);
        (Decimal::ONE - (irpf + social_security) / hundred).max(Decimal::ZERO)
    }
}

/// Approximate take-home view of a [`BenefitResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetBenefit {
    /// The deduction rates that were applied.
    pub deductions: DeductionRates,
    /// Net monthly amount during the first tier.
    pub tier1_monthly_net: Decimal,
    /// Net monthly amount during the second tier.
    pub tier2_monthly_net: Decimal,
    /// Net total over the whole benefit period.
    pub total_net: Decimal,
}
