//! Input sanitisation for the estimation API.
//!
//! Form submissions are loosely typed: numbers arrive as strings, empty
//! fields arrive as `""`, and some fields are simply missing. This stage
//! turns a raw [`CalculationRequest`] into bounded domain inputs so that the
//! estimators never see anything they cannot handle.
//!
//! Coercion rules:
//! - missing, `null` or empty fields count as absent (zero, or the
//!   documented default)
//! - non-numeric scalars count as absent and raise a warning
//! - negative amounts are clamped to zero with a warning
//! - fractional counts are truncated with a warning
//! - counts above their bound are clamped to it with a warning
//! - magnitudes too small for a `Decimal` read as zero
//! - objects or arrays where a number is expected, and amounts beyond the
//!   accepted range, are rejected with [`EngineError::InvalidInput`]

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use serde_json::Value;

use crate::calculation::TenureBasis;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    AuditWarning, BenefitInput, DeductionRates, SalaryBasis, Tenure, TerminationType,
};

use super::request::CalculationRequest;

/// Largest salary or contribution base accepted, in euros.
pub const MAX_MONETARY_INPUT: Decimal = Decimal::from_parts(1_000_000_000, 0, 0, false, 0);

/// Largest percentage accepted for a deduction.
pub const MAX_PERCENT_INPUT: Decimal = Decimal::from_parts(1_000, 0, 0, false, 0);

/// Whole years of service above this are clamped.
pub const MAX_TENURE_YEARS: u32 = 100;

/// Additional months of service above this are clamped.
pub const MAX_TENURE_MONTHS: u32 = 1_200;

/// Contribution-day counts above this are clamped; every count past 2160
/// already earns the longest benefit.
pub const MAX_CONTRIBUTION_DAYS: u32 = 36_500;

/// Dependent-children counts above this are clamped; two or more share the
/// same limits.
pub const MAX_DEPENDENT_CHILDREN: u32 = 100;

/// Salary payments per year above this are clamped.
pub const MAX_PAYMENTS_PER_YEAR: u32 = 366;

const DATE_FORMAT: &str = "%Y-%m-%d";

const SUB_CENT: f64 = 0.005;

/// A request after sanitisation, ready for the estimators.
#[derive(Debug, Clone)]
pub struct SanitizedRequest {
    /// How the employment ended.
    pub termination_type: TerminationType,
    /// The termination code as sent, when it was not recognised.
    pub unrecognised_termination_type: Option<String>,
    /// How the salary was stated.
    pub salary: SalaryBasis,
    /// Where the tenure figures come from.
    pub tenure: TenureBasis,
    /// Inputs for the benefit estimator.
    pub benefit: BenefitInput,
    /// Deductions for the net benefit view.
    pub deductions: DeductionRates,
    /// Everything that was coerced or ignored along the way.
    pub warnings: Vec<AuditWarning>,
}

/// Sanitises a raw request.
///
/// `default_deductions` fills in any deduction percentage the request does
/// not supply.
pub fn sanitize_request(
    request: &CalculationRequest,
    default_deductions: DeductionRates,
) -> EngineResult<SanitizedRequest> {
    let mut sanitizer = Sanitizer::default();

    let (termination_type, unrecognised_termination_type) =
        sanitizer.termination_type(request.termination_type.as_ref())?;
    let salary = sanitizer.salary_basis(request)?;
    let tenure = sanitizer.tenure_basis(request)?;

    let benefit = BenefitInput {
        regulatory_base_salary: sanitizer.amount(
            "regulatory_base_salary",
            request.regulatory_base_salary.as_ref(),
            MAX_MONETARY_INPUT,
        )?,
        contribution_days: sanitizer
            .count(
                "contribution_days",
                request.contribution_days.as_ref(),
                MAX_CONTRIBUTION_DAYS,
            )?
            .unwrap_or(0),
        dependent_children: sanitizer
            .count(
                "dependent_children",
                request.dependent_children.as_ref(),
                MAX_DEPENDENT_CHILDREN,
            )?
            .unwrap_or(0),
    };

    let deductions = DeductionRates {
        income_tax_withholding_percent: sanitizer
            .optional_amount(
                "income_tax_withholding_percent",
                request.income_tax_withholding_percent.as_ref(),
                MAX_PERCENT_INPUT,
            )?
            .unwrap_or(default_deductions.income_tax_withholding_percent),
        social_security_percent: sanitizer
            .optional_amount(
                "social_security_percent",
                request.social_security_percent.as_ref(),
                MAX_PERCENT_INPUT,
            )?
            .unwrap_or(default_deductions.social_security_percent),
    };

    Ok(SanitizedRequest {
        termination_type,
        unrecognised_termination_type,
        salary,
        tenure,
        benefit,
        deductions,
        warnings: sanitizer.warnings,
    })
}

/// Collects warnings while individual fields are coerced.
#[derive(Debug, Default)]
struct Sanitizer {
    warnings: Vec<AuditWarning>,
}

fn invalid(field: &str, message: impl Into<String>) -> EngineError {
    EngineError::InvalidInput {
        field: field.to_string(),
        message: message.into(),
    }
}

/// Returns the trimmed string, or `None` for an absent or blank value.
fn present_text(value: Option<&Value>) -> Option<&str> {
    match value {
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s.trim()),
        _ => None,
    }
}

fn is_blank(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.trim().is_empty(),
        _ => false,
    }
}

impl Sanitizer {
    fn warn(&mut self, code: &str, message: String) {
        self.warnings.push(AuditWarning::new(code, message, "low"));
    }

    /// Resolves the termination code, returning the raw code alongside when
    /// it is not recognised.
    fn termination_type(
        &mut self,
        value: Option<&Value>,
    ) -> EngineResult<(TerminationType, Option<String>)> {
        if is_blank(value) {
            return Ok((TerminationType::default(), None));
        }

        let code = match value {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Object(_)) | Some(Value::Array(_)) => {
                return Err(invalid(
                    "termination_type",
                    "expected a termination code, found a structured value",
                ));
            }
            Some(other) => other.to_string(),
            None => String::new(),
        };

        match TerminationType::from_code(&code) {
            Some(termination_type) => Ok((termination_type, None)),
            None => {
                self.warn(
                    "UNRECOGNISED_TERMINATION_TYPE",
                    format!(
                        "Termination type '{}' is not recognised; no severance is estimated",
                        code
                    ),
                );
                Ok((TerminationType::VoluntaryLeave, Some(code)))
            }
        }
    }

    fn salary_basis(&mut self, request: &CalculationRequest) -> EngineResult<SalaryBasis> {
        let annual = match request.salary_mode.as_ref() {
            None | Some(Value::Null) => false,
            Some(Value::String(mode)) if mode.trim().is_empty() => false,
            Some(Value::String(mode)) => match mode.trim().to_lowercase().as_str() {
                "monthly" | "mensual" => false,
                "annual" | "anual" => true,
                _ => {
                    self.warn(
                        "UNRECOGNISED_SALARY_MODE",
                        format!("Salary mode '{}' is not recognised; using monthly", mode),
                    );
                    false
                }
            },
            Some(Value::Object(_)) | Some(Value::Array(_)) => {
                return Err(invalid(
                    "salary_mode",
                    "expected a salary mode, found a structured value",
                ));
            }
            Some(other) => {
                self.warn(
                    "UNRECOGNISED_SALARY_MODE",
                    format!("Salary mode {} is not recognised; using monthly", other),
                );
                false
            }
        };

        if annual {
            Ok(SalaryBasis::Annual {
                annual_gross: self.amount(
                    "annual_gross_salary",
                    request.annual_gross_salary.as_ref(),
                    MAX_MONETARY_INPUT,
                )?,
                payments_per_year: self
                    .count(
                        "payments_per_year",
                        request.payments_per_year.as_ref(),
                        MAX_PAYMENTS_PER_YEAR,
                    )?
                    .unwrap_or(SalaryBasis::DEFAULT_PAYMENTS_PER_YEAR),
            })
        } else {
            Ok(SalaryBasis::Monthly {
                monthly_gross: self.amount(
                    "monthly_gross_salary",
                    request.monthly_gross_salary.as_ref(),
                    MAX_MONETARY_INPUT,
                )?,
            })
        }
    }

    fn tenure_basis(&mut self, request: &CalculationRequest) -> EngineResult<TenureBasis> {
        let total = Tenure::new(
            self.count("tenure_years", request.tenure_years.as_ref(), MAX_TENURE_YEARS)?
                .unwrap_or(0),
            self.count(
                "tenure_months",
                request.tenure_months.as_ref(),
                MAX_TENURE_MONTHS,
            )?
            .unwrap_or(0),
        );
        let pre_cutover = self.pre_cutover_tenure(request.pre_cutover_tenure.as_ref())?;
        let stated = TenureBasis::Stated { total, pre_cutover };

        let start = request.employment_start_date.as_ref();
        let end = request.termination_date.as_ref();
        if is_blank(start) && is_blank(end) {
            return Ok(stated);
        }

        let parsed = present_text(start)
            .and_then(|s| NaiveDate::parse_from_str(s, DATE_FORMAT).ok())
            .zip(present_text(end).and_then(|s| NaiveDate::parse_from_str(s, DATE_FORMAT).ok()));

        match parsed.and_then(|(start, end)| TenureBasis::from_dates(start, end)) {
            Some(basis) => Ok(basis),
            None => {
                self.warn(
                    "TENURE_DATES_IGNORED",
                    "Employment dates must both be valid YYYY-MM-DD dates in order; \
                     using the stated tenure instead"
                        .to_string(),
                );
                Ok(stated)
            }
        }
    }

    fn pre_cutover_tenure(&mut self, value: Option<&Value>) -> EngineResult<Tenure> {
        match value {
            None | Some(Value::Null) => Ok(Tenure::ZERO),
            Some(Value::Object(fields)) => Ok(Tenure::new(
                self.count(
                    "pre_cutover_tenure.years",
                    fields.get("years"),
                    MAX_TENURE_YEARS,
                )?
                .unwrap_or(0),
                self.count(
                    "pre_cutover_tenure.months",
                    fields.get("months"),
                    MAX_TENURE_MONTHS,
                )?
                .unwrap_or(0),
            )),
            Some(Value::Array(_)) => Err(invalid(
                "pre_cutover_tenure",
                "expected an object with years and months, found an array",
            )),
            Some(other) => {
                if !is_blank(Some(other)) {
                    self.warn(
                        "NON_OBJECT_FIELD",
                        format!(
                            "pre_cutover_tenure should be an object, got {}; treated as zero",
                            other
                        ),
                    );
                }
                Ok(Tenure::ZERO)
            }
        }
    }

    /// Coerces a monetary amount, defaulting to zero.
    fn amount(&mut self, field: &str, value: Option<&Value>, max: Decimal) -> EngineResult<Decimal> {
        Ok(self.optional_amount(field, value, max)?.unwrap_or(Decimal::ZERO))
    }

    /// Coerces a non-negative decimal, or `None` when the field is absent or
    /// unusable. Values above `max` are rejected.
    fn optional_amount(
        &mut self,
        field: &str,
        value: Option<&Value>,
        max: Decimal,
    ) -> EngineResult<Option<Decimal>> {
        match self.reading(field, value)? {
            Reading::Absent => Ok(None),
            Reading::Value(parsed) if parsed > max => Err(invalid(
                field,
                format!("{} exceeds the maximum of {}", parsed, max),
            )),
            Reading::Value(parsed) => Ok(Some(parsed)),
            Reading::Oversized(text) => Err(invalid(field, format!("{} is out of range", text))),
        }
    }

    /// Coerces a non-negative whole number, or `None` when the field is
    /// absent or unusable. Values above `max` are capped at `max`.
    fn count(&mut self, field: &str, value: Option<&Value>, max: u32) -> EngineResult<Option<u32>> {
        let parsed = match self.reading(field, value)? {
            Reading::Absent => return Ok(None),
            Reading::Value(parsed) if parsed <= Decimal::from(max) => parsed,
            Reading::Value(parsed) => return Ok(Some(self.cap_count(field, parsed, max))),
            Reading::Oversized(text) => return Ok(Some(self.cap_count(field, text, max))),
        };

        let whole = parsed.trunc();
        if whole != parsed {
            self.warn(
                "FRACTIONAL_FIELD_TRUNCATED",
                format!("{} {} is not a whole number; truncated to {}", field, parsed, whole),
            );
        }

        // Bounded by `max` above, so the conversion cannot fail.
        Ok(Some(whole.to_u32().unwrap_or(max)))
    }

    fn cap_count(&mut self, field: &str, parsed: impl std::fmt::Display, max: u32) -> u32 {
        self.warn(
            "OVERSIZED_FIELD_CLAMPED",
            format!("{} {} exceeds the maximum of {}; clamped to {}", field, parsed, max, max),
        );
        max
    }

    /// Reads a numeric field, clamping negatives to zero.
    fn reading(&mut self, field: &str, value: Option<&Value>) -> EngineResult<Reading> {
        let text = match value {
            None | Some(Value::Null) => return Ok(Reading::Absent),
            Some(Value::Number(number)) => number.to_string(),
            Some(Value::String(text)) => {
                let text = text.trim();
                if text.is_empty() {
                    return Ok(Reading::Absent);
                }
                text.to_string()
            }
            Some(Value::Bool(flag)) => {
                self.warn(
                    "NON_NUMERIC_FIELD",
                    format!("{} {} is not a number; treated as absent", field, flag),
                );
                return Ok(Reading::Absent);
            }
            Some(Value::Object(_)) | Some(Value::Array(_)) => {
                return Err(invalid(field, "expected a number, found a structured value"));
            }
        };

        let reading = match parse_number(&text) {
            Some(reading) => reading,
            None => {
                self.warn(
                    "NON_NUMERIC_FIELD",
                    format!("{} '{}' is not a number; treated as absent", field, text),
                );
                return Ok(Reading::Absent);
            }
        };

        match reading {
            Reading::Value(parsed) if parsed.is_sign_negative() && !parsed.is_zero() => {
                self.warn(
                    "NEGATIVE_FIELD_CLAMPED",
                    format!("{} {} is negative; clamped to 0", field, text),
                );
                Ok(Reading::Value(Decimal::ZERO))
            }
            other => Ok(other),
        }
    }
}

/// A numeric field after parsing.
#[derive(Debug, Clone, PartialEq)]
enum Reading {
    /// Missing, null, blank or non-numeric.
    Absent,
    /// A value that fits in a `Decimal`.
    Value(Decimal),
    /// A positive value too large for a `Decimal`, kept as written.
    Oversized(String),
}

/// Parses decimal or scientific notation.
///
/// Magnitudes below a cent that `Decimal` cannot represent read as zero.
/// Negative values that are too large read as `-1` so that they are
/// clamped like any other negative.
fn parse_number(text: &str) -> Option<Reading> {
    if let Ok(parsed) = Decimal::from_str(text).or_else(|_| Decimal::from_scientific(text)) {
        return Some(Reading::Value(parsed));
    }

    let float = text.parse::<f64>().ok().filter(|f| f.is_finite())?;
    if float.abs() < SUB_CENT {
        Some(Reading::Value(Decimal::ZERO))
    } else if float < 0.0 {
        Some(Reading::Value(Decimal::NEGATIVE_ONE))
    } else {
        Some(
            Decimal::from_f64(float)
                .map(Reading::Value)
                .unwrap_or_else(|| Reading::Oversized(text.to_string())),
        )
    }
}
