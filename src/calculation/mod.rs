//! Calculation logic for the estimation engine.
//!
//! This module contains the severance estimator, the unemployment benefit
//! estimator with its duration scale and statutory limits, the approximate
//! net benefit, salary and tenure resolution, and the rounding and currency
//! helpers they share.

mod benefit;
mod benefit_duration;
mod benefit_limits;
mod currency;
mod net_benefit;
mod rounding;
mod salary;
mod severance;
mod tenure_split;

pub use benefit::{
    BENEFIT_DAYS_PER_MONTH, BenefitCalculation, TIER1_MAX_DAYS, TIER1_RATE, TIER2_RATE,
    calculate_benefit, estimate_benefit,
};
pub use benefit_duration::{
    BENEFIT_DURATION_TABLE, BenefitDurationBand, CONTRIBUTION_LOOKBACK_YEARS,
    MINIMUM_CONTRIBUTION_DAYS, benefit_duration_band, benefit_duration_days,
};
pub use benefit_limits::{
    BenefitLimits, MAX_RATE_NO_DEPENDENTS, MAX_RATE_ONE_DEPENDENT,
    MAX_RATE_TWO_OR_MORE_DEPENDENTS, MIN_RATE_NO_DEPENDENTS, MIN_RATE_WITH_DEPENDENTS,
    REFERENCE_MONTHLY_ALLOWANCE, benefit_limits, uplifted_reference_allowance,
};
pub use currency::format_eur;
pub use net_benefit::{NetBenefitCalculation, calculate_net_benefit, estimate_net_benefit};
pub use rounding::{ROUNDING_EPSILON, clamp, round2};
pub use salary::{MonthlySalaryResolution, resolve_monthly_salary};
pub use severance::{
    CONTRACT_EXPIRY_DAYS_PER_YEAR, DAYS_PER_MONTH, OBJECTIVE_CAP_MONTHS, OBJECTIVE_DAYS_PER_YEAR,
    SeveranceBreakdown, SeveranceCalculation, SeveranceTranche, UNJUSTIFIED_CAP_MONTHS,
    UNJUSTIFIED_POST_CUTOVER_DAYS_PER_YEAR, UNJUSTIFIED_PRE_CUTOVER_DAYS_PER_YEAR,
    calculate_severance, estimate_severance, severance_breakdown, severance_legal_ref,
};
pub use tenure_split::{
    LEGAL_CUTOVER_DATE, TenureBasis, TenureResolution, TenureSplit, resolve_tenure, split_tenure,
};
