//! Rounding and clamping helpers shared by the estimators.

use rust_decimal::{Decimal, RoundingStrategy};

/// Nudge added before rounding so values that land a hair below a cent
/// midpoint after division (e.g. `2200 / 30 * 33`) still round up.
pub const ROUNDING_EPSILON: Decimal = Decimal::from_parts(1, 0, 0, false, 16);

/// Rounds a monetary value to cents, half away from zero.
///
/// The result always carries exactly two decimal places.
///
/// # Examples
///
/// ```
/// use finiquito_engine::calculation::round2;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round2(Decimal::from_str("2.675").unwrap()).to_string(), "2.68");
/// assert_eq!(round2(Decimal::from_str("1.005").unwrap()).to_string(), "1.01");
/// assert_eq!(round2(Decimal::from(7)).to_string(), "7.00");
/// ```
pub fn round2(value: Decimal) -> Decimal {
    let mut rounded = (value + ROUNDING_EPSILON)
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded
}

/// Restricts `value` to `[min, max]`.
///
/// The floor wins if the bounds are ever inverted.
pub fn clamp(value: Decimal, min: Decimal, max: Decimal) -> Decimal {
    value.min(max).max(min)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_round2_midpoints_round_up() {
        assert_eq!(round2(dec("1.005")), dec("1.01"));
        assert_eq!(round2(dec("2.675")), dec("2.68"));
        assert_eq!(round2(dec("0.125")), dec("0.13"));
    }

    #[test]
    fn test_round2_below_midpoint_rounds_down() {
        assert_eq!(round2(dec("2.674")), dec("2.67"));
        assert_eq!(round2(dec("10.00499")), dec("10.00"));
    }

    #[test]
    fn test_round2_recovers_division_residue() {
        // 2200 / 30 has no exact decimal representation.
        let daily = dec("2200") / dec("30");
        assert_eq!(round2(daily * dec("33") * dec("4.5")), dec("10890.00"));
    }

    #[test]
    fn test_round2_always_has_two_decimals() {
        assert_eq!(round2(dec("5")).to_string(), "5.00");
        assert_eq!(round2(dec("5.1")).to_string(), "5.10");
        assert_eq!(round2(Decimal::ZERO).to_string(), "0.00");
    }

    #[test]
    fn test_clamp_inside_bounds_is_unchanged() {
        assert_eq!(clamp(dec("900"), dec("560"), dec("1225")), dec("900"));
    }

    #[test]
    fn test_clamp_raises_to_min_and_lowers_to_max() {
        assert_eq!(clamp(dec("100"), dec("560"), dec("1225")), dec("560"));
        assert_eq!(clamp(dec("1540"), dec("560"), dec("1225")), dec("1225"));
    }

    #[test]
    fn test_clamp_floor_wins_when_bounds_inverted() {
        assert_eq!(clamp(dec("5"), dec("10"), dec("1")), dec("10"));
    }
}
