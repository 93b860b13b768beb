//! Response types for the estimation API.
//!
//! This module defines the error response structures and error handling
//! for the HTTP API, plus the body of the `/rules` endpoint.

use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::{
    BENEFIT_DURATION_TABLE, BenefitDurationBand, BenefitLimits, CONTRACT_EXPIRY_DAYS_PER_YEAR,
    CONTRIBUTION_LOOKBACK_YEARS, LEGAL_CUTOVER_DATE, MINIMUM_CONTRIBUTION_DAYS,
    OBJECTIVE_CAP_MONTHS, OBJECTIVE_DAYS_PER_YEAR, REFERENCE_MONTHLY_ALLOWANCE, TIER1_MAX_DAYS,
    TIER1_RATE, TIER2_RATE, UNJUSTIFIED_CAP_MONTHS, UNJUSTIFIED_POST_CUTOVER_DAYS_PER_YEAR,
    UNJUSTIFIED_PRE_CUTOVER_DAYS_PER_YEAR, benefit_limits, round2, severance_legal_ref,
    uplifted_reference_allowance,
};
use crate::config::CalculatorMetadata;
use crate::error::EngineError;
use crate::models::TerminationType;

/// API error response structure.
///
/// Callers branch on the presence of `error`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Human-readable error message.
    pub error: String,
    /// Error code for programmatic handling.
    pub code: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: code.into(),
            detail: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_detail(
        code: impl Into<String>,
        error: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            error: error.into(),
            code: code.into(),
            detail: Some(detail.into()),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(detail: impl Into<String>) -> Self {
        Self::with_detail("MALFORMED_JSON", "Request body is not valid JSON", detail)
    }

    /// Creates a calculation error response.
    pub fn calculation_error(detail: impl Into<String>) -> Self {
        Self::with_detail("CALCULATION_ERROR", "Calculation failed", detail)
    }

    /// Creates a method-not-allowed error response.
    pub fn method_not_allowed() -> Self {
        Self::with_detail(
            "METHOD_NOT_ALLOWED",
            "Method not allowed",
            "Use POST to submit a calculation",
        )
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// Pairs an error body with a status code.
    pub fn new(status: StatusCode, error: ApiError) -> Self {
        Self { status, error }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (
            self.status,
            [(header::CONTENT_TYPE, "application/json")],
            Json(self.error),
        )
            .into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { .. } | EngineError::ConfigParseError { .. } => {
                ApiErrorResponse::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiError::with_detail("CONFIG_ERROR", "Configuration error", error.to_string()),
                )
            }
            EngineError::InvalidInput { .. } => {
                ApiErrorResponse::new(
                    StatusCode::BAD_REQUEST,
                    ApiError::calculation_error(error.to_string()),
                )
            }
        }
    }
}

/// Severance rule for one termination category.
#[derive(Debug, Clone, Serialize)]
pub struct SeveranceRule {
    /// The termination category.
    pub termination_type: TerminationType,
    /// Days of salary per year for service before the cutover.
    pub pre_cutover_days_per_year: Decimal,
    /// Days of salary per year for service after the cutover.
    pub days_per_year: Decimal,
    /// Cap in monthly salaries, `None` when uncapped.
    pub cap_months: Option<Decimal>,
    /// Statutory reference.
    pub legal_ref: &'static str,
}

/// Benefit limits for one household size.
#[derive(Debug, Clone, Serialize)]
pub struct LimitsRule {
    /// Dependent children this row applies to (`"2+"` for two or more).
    pub dependent_children: &'static str,
    /// Monthly limits.
    #[serde(flatten)]
    pub limits: BenefitLimits,
}

/// Unemployment benefit rules.
#[derive(Debug, Clone, Serialize)]
pub struct BenefitRules {
    /// Years of contributions considered.
    pub lookback_years: u32,
    /// Fewest contribution days that grant a benefit.
    pub minimum_contribution_days: u32,
    /// Contribution days to benefit days.
    pub duration_table: &'static [BenefitDurationBand],
    /// Days paid at the first-tier rate.
    pub tier1_max_days: u32,
    /// First-tier share of the regulatory base.
    pub tier1_rate: Decimal,
    /// Second-tier share of the regulatory base.
    pub tier2_rate: Decimal,
    /// Monthly reference allowance the limits are derived from.
    pub reference_monthly_allowance: Decimal,
    /// Reference allowance with the one-sixth uplift.
    pub uplifted_reference_allowance: Decimal,
    /// Monthly limits per household size.
    pub limits: Vec<LimitsRule>,
}

/// Body of the `/rules` endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct RulesResponse {
    /// Metadata for the deployed calculator.
    pub calculator: CalculatorMetadata,
    /// Date of the 2012 labour reform.
    pub legal_cutover_date: NaiveDate,
    /// Severance rules by termination category.
    pub severance: Vec<SeveranceRule>,
    /// Unemployment benefit rules.
    pub benefit: BenefitRules,
}

impl RulesResponse {
    /// Collects the compiled-in rules alongside the calculator metadata.
    pub fn new(calculator: CalculatorMetadata) -> Self {
        let severance_rule = |termination_type: TerminationType,
                              pre: Decimal,
                              post: Decimal,
                              cap: Option<Decimal>| SeveranceRule {
            termination_type,
            pre_cutover_days_per_year: pre,
            days_per_year: post,
            cap_months: cap,
            legal_ref: severance_legal_ref(termination_type),
        };

        let severance = vec![
            severance_rule(
                TerminationType::OrdinaryUnjustified,
                UNJUSTIFIED_PRE_CUTOVER_DAYS_PER_YEAR,
                UNJUSTIFIED_POST_CUTOVER_DAYS_PER_YEAR,
                Some(UNJUSTIFIED_CAP_MONTHS),
            ),
            severance_rule(
                TerminationType::ObjectiveCause,
                OBJECTIVE_DAYS_PER_YEAR,
                OBJECTIVE_DAYS_PER_YEAR,
                Some(OBJECTIVE_CAP_MONTHS),
            ),
            severance_rule(
                TerminationType::ContractExpiry,
                CONTRACT_EXPIRY_DAYS_PER_YEAR,
                CONTRACT_EXPIRY_DAYS_PER_YEAR,
                None,
            ),
            severance_rule(
                TerminationType::VoluntaryLeave,
                Decimal::ZERO,
                Decimal::ZERO,
                None,
            ),
        ];

        let limits = [("0", 0), ("1", 1), ("2+", 2)]
            .into_iter()
            .map(|(label, children)| LimitsRule {
                dependent_children: label,
                limits: benefit_limits(children),
            })
            .collect();

        Self {
            calculator,
            legal_cutover_date: LEGAL_CUTOVER_DATE,
            severance,
            benefit: BenefitRules {
                lookback_years: CONTRIBUTION_LOOKBACK_YEARS,
                minimum_contribution_days: MINIMUM_CONTRIBUTION_DAYS,
                duration_table: &BENEFIT_DURATION_TABLE,
                tier1_max_days: TIER1_MAX_DAYS,
                tier1_rate: TIER1_RATE,
                tier2_rate: TIER2_RATE,
                reference_monthly_allowance: REFERENCE_MONTHLY_ALLOWANCE,
                uplifted_reference_allowance: round2(uplifted_reference_allowance()),
                limits,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_metadata() -> CalculatorMetadata {
        CalculatorMetadata {
            code: "ES-TEST".to_string(),
            name: "Test calculator".to_string(),
            version: "1".to_string(),
            reference_date: NaiveDate::from_ymd_opt(2025, 9, 1).unwrap(),
            source_url: "https://example.org".to_string(),
            disclaimer: "Estimate only".to_string(),
        }
    }

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"error\":\"Test message\""));
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(!json.contains("detail")); // Should be skipped when None
    }

    #[test]
    fn test_api_error_with_detail_serialization() {
        let error = ApiError::with_detail("TEST_ERROR", "Test message", "Some detail");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"detail\":\"Some detail\""));
    }

    #[test]
    fn test_invalid_input_maps_to_bad_request() {
        let engine_error = EngineError::InvalidInput {
            field: "monthly_gross_salary".to_string(),
            message: "expected a number, found a structured value".to_string(),
        };
        let api_error: ApiErrorResponse = engine_error.into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "CALCULATION_ERROR");
        assert!(
            api_error
                .error
                .detail
                .unwrap()
                .contains("monthly_gross_salary")
        );
    }

    #[test]
    fn test_config_error_maps_to_internal_error() {
        let engine_error = EngineError::ConfigNotFound {
            path: "/missing".to_string(),
        };
        let api_error: ApiErrorResponse = engine_error.into();
        assert_eq!(api_error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_error.error.code, "CONFIG_ERROR");
    }

    #[test]
    fn test_rules_response_lists_compiled_constants() {
        let json = serde_json::to_value(RulesResponse::new(sample_metadata())).unwrap();

        assert_eq!(json["calculator"]["code"], "ES-TEST");
        assert_eq!(json["legal_cutover_date"], "2012-02-12");
        assert_eq!(json["severance"][0]["termination_type"], "ordinary-unjustified");
        assert_eq!(json["severance"][0]["pre_cutover_days_per_year"], "45");
        assert_eq!(json["severance"][0]["days_per_year"], "33");
        assert_eq!(json["severance"][2]["cap_months"], serde_json::Value::Null);
        assert_eq!(json["benefit"]["duration_table"].as_array().unwrap().len(), 11);
        assert_eq!(json["benefit"]["duration_table"][10]["benefit_days"], 720);
        assert_eq!(json["benefit"]["uplifted_reference_allowance"], "700.00");
        assert_eq!(json["benefit"]["limits"][0]["min"], "560.00");
        assert_eq!(json["benefit"]["limits"][2]["dependent_children"], "2+");
        assert_eq!(json["benefit"]["limits"][2]["max"], "1575.00");
    }
}
