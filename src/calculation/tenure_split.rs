//! Tenure derivation from employment dates.
//!
//! Severance for unjustified dismissal accrues at a higher rate for service
//! before the labour reform of 12 February 2012. When a worker supplies their
//! start and termination dates, both the total tenure and the pre-reform
//! portion can be derived instead of being typed in by hand.

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::{AuditStep, Tenure};

/// Date the 2012 labour reform took effect.
pub const LEGAL_CUTOVER_DATE: NaiveDate = match NaiveDate::from_ymd_opt(2012, 2, 12) {
    Some(date) => date,
    None => panic!("invalid cutover date"),
};

/// Tenure derived from a pair of employment dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TenureSplit {
    /// Service from start to termination.
    pub total: Tenure,
    /// Service from start to the cutover date (zero if the job began later).
    pub pre_cutover: Tenure,
}

/// Splits the service between `start` and `end` around [`LEGAL_CUTOVER_DATE`].
///
/// Returns `None` if `end` is before `start`.
///
/// # Examples
///
/// ```
/// use finiquito_engine::calculation::split_tenure;
/// use finiquito_engine::models::Tenure;
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2008, 2, 12).unwrap();
/// let end = NaiveDate::from_ymd_opt(2020, 8, 12).unwrap();
/// let split = split_tenure(start, end).unwrap();
/// assert_eq!(split.total, Tenure::new(12, 6));
/// assert_eq!(split.pre_cutover, Tenure::new(4, 0));
/// ```
pub fn split_tenure(start: NaiveDate, end: NaiveDate) -> Option<TenureSplit> {
    let total = Tenure::between(start, end)?;
    let pre_cutover = if start < LEGAL_CUTOVER_DATE {
        Tenure::between(start, end.min(LEGAL_CUTOVER_DATE)).unwrap_or(Tenure::ZERO)
    } else {
        Tenure::ZERO
    };

    Some(TenureSplit { total, pre_cutover })
}

/// Where a worker's tenure figures come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TenureBasis {
    /// Years and months typed in directly.
    Stated {
        /// Total service.
        total: Tenure,
        /// Service before the cutover.
        pre_cutover: Tenure,
    },
    /// Derived from employment dates.
    FromDates {
        /// First day of employment.
        start: NaiveDate,
        /// Last day of employment.
        end: NaiveDate,
        /// The tenure split derived from the dates.
        split: TenureSplit,
    },
}

impl TenureBasis {
    /// Builds a date-derived basis, or `None` if `end` is before `start`.
    pub fn from_dates(start: NaiveDate, end: NaiveDate) -> Option<Self> {
        split_tenure(start, end).map(|split| Self::FromDates { start, end, split })
    }

    /// Returns the (total, pre-cutover) tenure pair.
    pub fn tenures(&self) -> (Tenure, Tenure) {
        match *self {
            Self::Stated { total, pre_cutover } => (total, pre_cutover),
            Self::FromDates { split, .. } => (split.total, split.pre_cutover),
        }
    }
}

/// The tenure used for severance, with its audit step.
#[derive(Debug, Clone)]
pub struct TenureResolution {
    /// Total service.
    pub total: Tenure,
    /// Service before the cutover.
    pub pre_cutover: Tenure,
    /// The audit step recording where the figures came from.
    pub audit_step: AuditStep,
}

/// Resolves total and pre-cutover tenure and records the source.
pub fn resolve_tenure(basis: &TenureBasis, step_number: u32) -> TenureResolution {
    let (total, pre_cutover) = basis.tenures();

    let (input, reasoning) = match *basis {
        TenureBasis::Stated { .. } => (
            serde_json::json!({ "source": "stated" }),
            format!(
                "Using stated tenure of {}y {}m, of which {}y {}m before {}",
                total.years, total.months, pre_cutover.years, pre_cutover.months, LEGAL_CUTOVER_DATE
            ),
        ),
        TenureBasis::FromDates { start, end, .. } => (
            serde_json::json!({
                "source": "dates",
                "employment_start_date": start.to_string(),
                "termination_date": end.to_string(),
            }),
            format!(
                "{} to {} => {}y {}m, of which {}y {}m before {}",
                start,
                end,
                total.years,
                total.months,
                pre_cutover.years,
                pre_cutover.months,
                LEGAL_CUTOVER_DATE
            ),
        ),
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "tenure".to_string(),
        rule_name: "Length of Service".to_string(),
        legal_ref: "Ley 3/2012 DT 11ª".to_string(),
        input,
        output: serde_json::json!({
            "tenure": total,
            "pre_cutover_tenure": pre_cutover,
        }),
        reasoning,
    };

    TenureResolution {
        total,
        pre_cutover,
        audit_step,
    }
}
