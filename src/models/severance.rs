//! Severance input and result models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Tenure, TerminationType};

/// Everything the severance estimator needs to know about a termination.
///
/// # Example
///
/// ```
/// use finiquito_engine::models::{SeveranceInput, Tenure, TerminationType};
/// use rust_decimal::Decimal;
///
/// let input = SeveranceInput {
///     termination_type: TerminationType::OrdinaryUnjustified,
///     monthly_gross_salary: Decimal::new(2200, 0),
///     tenure: Tenure::new(4, 6),
///     pre_cutover_tenure: Tenure::ZERO,
/// };
/// assert_eq!(input.post_cutover_years(), input.tenure.in_years());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeveranceInput {
    /// How the employment ended.
    pub termination_type: TerminationType,
    /// Gross monthly salary in euros.
    pub monthly_gross_salary: Decimal,
    /// Total length of service.
    pub tenure: Tenure,
    /// Portion of the service accrued before the 2012 labour reform.
    #[serde(default)]
    pub pre_cutover_tenure: Tenure,
}

impl SeveranceInput {
    /// Service accrued on or after the cutover, in fractional years.
    ///
    /// Floored at zero: a pre-cutover tenure longer than the total never
    /// produces a negative tranche.
    pub fn post_cutover_years(&self) -> Decimal {
        (self.tenure.in_years() - self.pre_cutover_tenure.in_years()).max(Decimal::ZERO)
    }
}

/// The estimated severance payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeveranceResult {
    /// Severance amount in euros, rounded to cents.
    pub amount: Decimal,
}
