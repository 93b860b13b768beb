//! Salary basis model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How the worker stated their gross salary.
///
/// Spanish salaries are commonly quoted per year and paid in 12 or 14
/// instalments; severance is computed from the monthly equivalent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum SalaryBasis {
    /// A gross monthly salary.
    Monthly {
        /// Gross salary per month.
        monthly_gross: Decimal,
    },
    /// A gross annual salary and the number of payments it is split into.
    Annual {
        /// Gross salary per year.
        annual_gross: Decimal,
        /// Number of payments per year (usually 12 or 14).
        payments_per_year: u32,
    },
}

impl SalaryBasis {
    /// Default number of payments per year when none is given.
    pub const DEFAULT_PAYMENTS_PER_YEAR: u32 = 12;

    /// Returns the gross monthly salary this basis implies.
    ///
    /// An annual salary split into zero payments yields zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use finiquito_engine::models::SalaryBasis;
    /// use rust_decimal::Decimal;
    ///
    /// let basis = SalaryBasis::Annual {
    ///     annual_gross: Decimal::from(28000),
    ///     payments_per_year: 14,
    /// };
    /// assert_eq!(basis.monthly_gross_salary(), Decimal::from(2000));
    /// ```
    pub fn monthly_gross_salary(&self) -> Decimal {
        match *self {
            Self::Monthly { monthly_gross } => monthly_gross,
            Self::Annual {
                annual_gross,
                payments_per_year,
            } => {
                if payments_per_year == 0 {
                    Decimal::ZERO
                } else {
                    annual_gross / Decimal::from(payments_per_year)
                }
            }
        }
    }
}

impl Default for SalaryBasis {
    fn default() -> Self {
        Self::Monthly {
            monthly_gross: Decimal::ZERO,
        }
    }
}
