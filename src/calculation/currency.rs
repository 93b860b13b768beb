//! Euro formatting in the Spanish convention.
//!
//! Amounts are written with a comma for decimals, a period between
//! thousands groups and a trailing euro sign: `10.890,00 €`. As in the
//! `es-ES` locale, four-digit amounts are not grouped (`2200,00 €`).

use rust_decimal::Decimal;

use super::rounding::round2;

/// Integer parts shorter than this are written without separators.
const MIN_GROUPING_DIGITS: usize = 5;

/// Formats an amount as Spanish euros, rounded to cents.
///
/// # Examples
///
/// ```
/// use finiquito_engine::calculation::format_eur;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_eur(Decimal::new(1089000, 2)), "10.890,00\u{a0}€");
/// assert_eq!(format_eur(Decimal::new(2200, 0)), "2200,00\u{a0}€");
/// ```
pub fn format_eur(amount: Decimal) -> String {
    let rounded = round2(amount.abs());
    let text = rounded.to_string();
    let (integer, fraction) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let integer = if integer.len() >= MIN_GROUPING_DIGITS {
        group_thousands(integer)
    } else {
        integer.to_string()
    };

    let sign = if amount.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };

    format!("{sign}{integer},{fraction}\u{a0}€")
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    grouped
}
