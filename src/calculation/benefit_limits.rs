//! Statutory minimum and maximum monthly benefit.
//!
//! Both limits are percentages of the monthly IPREM reference allowance
//! uplifted by one sixth (the proration of the two extra payments), and
//! depend on how many dependent children the worker has (LGSS article
//! 270.3).

use rust_decimal::Decimal;
use serde::Serialize;

use super::rounding::round2;

/// Monthly IPREM reference allowance in euros.
pub const REFERENCE_MONTHLY_ALLOWANCE: Decimal = Decimal::from_parts(600, 0, 0, false, 0);

/// Minimum as a share of the uplifted reference, no dependents.
pub const MIN_RATE_NO_DEPENDENTS: Decimal = Decimal::from_parts(80, 0, 0, false, 2);
/// Minimum as a share of the uplifted reference, one or more dependents.
pub const MIN_RATE_WITH_DEPENDENTS: Decimal = Decimal::from_parts(107, 0, 0, false, 2);
/// Maximum as a share of the uplifted reference, no dependents.
pub const MAX_RATE_NO_DEPENDENTS: Decimal = Decimal::from_parts(175, 0, 0, false, 2);
/// Maximum as a share of the uplifted reference, one dependent.
pub const MAX_RATE_ONE_DEPENDENT: Decimal = Decimal::from_parts(200, 0, 0, false, 2);
/// Maximum as a share of the uplifted reference, two or more dependents.
pub const MAX_RATE_TWO_OR_MORE_DEPENDENTS: Decimal = Decimal::from_parts(225, 0, 0, false, 2);

/// The reference allowance multiplied by `1 + 1/6`.
pub fn uplifted_reference_allowance() -> Decimal {
    REFERENCE_MONTHLY_ALLOWANCE * (Decimal::ONE + Decimal::ONE / Decimal::from(6))
}

/// Monthly bounds for a benefit payment, in euros.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BenefitLimits {
    /// Lowest monthly amount that can be paid.
    pub min: Decimal,
    /// Highest monthly amount that can be paid.
    pub max: Decimal,
}

/// Returns the minimum and maximum monthly benefit for a household.
///
/// # Examples
///
/// ```
/// use finiquito_engine::calculation::benefit_limits;
/// use rust_decimal::Decimal;
///
/// let limits = benefit_limits(0);
/// assert_eq!(limits.min, Decimal::new(56000, 2));
/// assert_eq!(limits.max, Decimal::new(122500, 2));
/// ```
pub fn benefit_limits(dependent_children: u32) -> BenefitLimits {
    let min_rate = if dependent_children > 0 {
        MIN_RATE_WITH_DEPENDENTS
    } else {
        MIN_RATE_NO_DEPENDENTS
    };
    let max_rate = match dependent_children {
        0 => MAX_RATE_NO_DEPENDENTS,
        1 => MAX_RATE_ONE_DEPENDENT,
        _ => MAX_RATE_TWO_OR_MORE_DEPENDENTS,
    };

    let reference = uplifted_reference_allowance();
    BenefitLimits {
        min: round2(reference * min_rate),
        max: round2(reference * max_rate),
    }
}
