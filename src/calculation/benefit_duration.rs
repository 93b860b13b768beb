//! Benefit duration lookup.
//!
//! Maps the days contributed during the lookback window to the number of
//! days of contributory unemployment benefit, following the statutory scale
//! of LGSS article 269.1.

use serde::Serialize;

/// Years of contribution history considered when counting contribution days.
pub const CONTRIBUTION_LOOKBACK_YEARS: u32 = 6;

/// Fewest contribution days that give any entitlement.
pub const MINIMUM_CONTRIBUTION_DAYS: u32 = 360;

/// One row of the duration scale: an inclusive range of contribution days
/// and the benefit days it grants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BenefitDurationBand {
    /// Lowest contribution-day count in this band.
    pub min_contribution_days: u32,
    /// Highest contribution-day count in this band, `None` if open-ended.
    pub max_contribution_days: Option<u32>,
    /// Benefit duration granted, in days.
    pub benefit_days: u32,
}

impl BenefitDurationBand {
    const fn new(min: u32, max: Option<u32>, benefit_days: u32) -> Self {
        Self {
            min_contribution_days: min,
            max_contribution_days: max,
            benefit_days,
        }
    }

    /// Returns true if `contribution_days` falls inside this band.
    pub fn contains(&self, contribution_days: u32) -> bool {
        contribution_days >= self.min_contribution_days
            && self
                .max_contribution_days
                .is_none_or(|max| contribution_days <= max)
    }
}

/// The duration scale, ascending and contiguous.
pub static BENEFIT_DURATION_TABLE: [BenefitDurationBand; 11] = [
    BenefitDurationBand::new(360, Some(539), 120),
    BenefitDurationBand::new(540, Some(719), 180),
    BenefitDurationBand::new(720, Some(899), 240),
    BenefitDurationBand::new(900, Some(1079), 300),
    BenefitDurationBand::new(1080, Some(1259), 360),
    BenefitDurationBand::new(1260, Some(1439), 420),
    BenefitDurationBand::new(1440, Some(1619), 480),
    BenefitDurationBand::new(1620, Some(1799), 540),
    BenefitDurationBand::new(1800, Some(1979), 600),
    BenefitDurationBand::new(1980, Some(2159), 660),
    BenefitDurationBand::new(2160, None, 720),
];

/// Finds the band for a contribution-day count, if any.
pub fn benefit_duration_band(contribution_days: u32) -> Option<&'static BenefitDurationBand> {
    BENEFIT_DURATION_TABLE
        .iter()
        .find(|band| band.contains(contribution_days))
}

/// Returns the benefit duration in days for a contribution-day count.
///
/// Counts below [`MINIMUM_CONTRIBUTION_DAYS`] give no entitlement and
/// return 0.
///
/// # Examples
///
/// ```
/// use finiquito_engine::calculation::benefit_duration_days;
///
/// assert_eq!(benefit_duration_days(300), 0);
/// assert_eq!(benefit_duration_days(1320), 420);
/// assert_eq!(benefit_duration_days(5000), 720);
/// ```
pub fn benefit_duration_days(contribution_days: u32) -> u32 {
    benefit_duration_band(contribution_days)
        .map(|band| band.benefit_days)
        .unwrap_or(0)
}
