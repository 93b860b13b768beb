//! Tenure model.
//!
//! Length of service is captured the way workers read it off their payslips:
//! whole years plus whole months.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A length of service in whole years and months.
///
/// # Example
///
/// ```
/// use finiquito_engine::models::Tenure;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let tenure = Tenure::new(4, 6);
/// assert_eq!(tenure.in_years(), Decimal::from_str("4.5").unwrap());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tenure {
    /// Whole years of service.
    pub years: u32,
    /// Additional whole months of service (normally 0-11).
    pub months: u32,
}

impl Tenure {
    /// No service at all.
    pub const ZERO: Tenure = Tenure {
        years: 0,
        months: 0,
    };

    /// Creates a tenure from years and months.
    pub fn new(years: u32, months: u32) -> Self {
        Self { years, months }
    }

    /// Returns the tenure as fractional years (`years + months / 12`).
    ///
    /// Months above 11 are not normalised; 14 months simply count as
    /// 14/12 of a year.
    pub fn in_years(&self) -> Decimal {
        Decimal::from(self.years) + Decimal::from(self.months) / Decimal::from(12)
    }

    /// Computes the whole years and months elapsed between two dates.
    ///
    /// A month only counts once its day-of-month has been reached, so
    /// 2020-01-15 to 2020-02-14 is zero months. Returns `None` when `end`
    /// is before `start`.
    ///
    /// # Examples
    ///
    /// ```
    /// use finiquito_engine::models::Tenure;
    /// use chrono::NaiveDate;
    ///
    /// let start = NaiveDate::from_ymd_opt(2019, 3, 1).unwrap();
    /// let end = NaiveDate::from_ymd_opt(2023, 9, 15).unwrap();
    /// assert_eq!(Tenure::between(start, end), Some(Tenure::new(4, 6)));
    /// assert_eq!(Tenure::between(end, start), None);
    /// ```
    pub fn between(start: NaiveDate, end: NaiveDate) -> Option<Self> {
        if end < start {
            return None;
        }

        let mut total_months = (end.year() - start.year()) * 12 + end.month() as i32
            - start.month() as i32;
        if end.day() < start.day() {
            total_months -= 1;
        }
        let total_months = u32::try_from(total_months.max(0)).unwrap_or(0);

        Some(Self {
            years: total_months / 12,
            months: total_months % 12,
        })
    }
}
