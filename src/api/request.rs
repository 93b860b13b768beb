//! Request types for the estimation API.
//!
//! This module defines the JSON request structure for the `/calculate`
//! endpoint. Every field is optional and kept as raw JSON so that the
//! sanitiser, not the JSON extractor, decides how loosely typed form input
//! (numbers sent as strings, empty fields, and so on) is coerced.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Request body for the `/calculate` endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculationRequest {
    /// How the employment ended (English or Spanish code).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub termination_type: Option<Value>,
    /// `"monthly"` (default) or `"annual"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary_mode: Option<Value>,
    /// Gross monthly salary in euros.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_gross_salary: Option<Value>,
    /// Gross annual salary in euros, used in annual mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annual_gross_salary: Option<Value>,
    /// Number of payments the annual salary is split into (default 12).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payments_per_year: Option<Value>,
    /// Whole years of service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenure_years: Option<Value>,
    /// Additional months of service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenure_months: Option<Value>,
    /// Service before the 2012 reform, as `{"years": .., "months": ..}`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pre_cutover_tenure: Option<Value>,
    /// First day of employment (`YYYY-MM-DD`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employment_start_date: Option<Value>,
    /// Last day of employment (`YYYY-MM-DD`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub termination_date: Option<Value>,
    /// Average monthly contribution base in euros.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regulatory_base_salary: Option<Value>,
    /// Days contributed in the last six years.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contribution_days: Option<Value>,
    /// Number of dependent children.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dependent_children: Option<Value>,
    /// Income tax withholding percentage for the net view.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub income_tax_withholding_percent: Option<Value>,
    /// Social security percentage for the net view.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub social_security_percent: Option<Value>,
}
