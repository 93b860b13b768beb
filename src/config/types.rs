//! Configuration types for the estimation engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files. Statutory figures are
//! compiled in and never read from configuration.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::DeductionRates;

/// Metadata about the calculator deployment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculatorMetadata {
    /// Short identifier for the rule set (e.g., "ES-2025").
    pub code: String,
    /// The human-readable name of the calculator.
    pub name: String,
    /// The version of the rule set.
    pub version: String,
    /// Date the statutory figures were last checked against official sources.
    pub reference_date: NaiveDate,
    /// URL of the official simulator the estimates should be checked against.
    pub source_url: String,
    /// Notice returned with every estimate.
    pub disclaimer: String,
}

/// Deductions configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct DeductionsConfig {
    /// Deduction rates applied when a request does not supply its own.
    pub default_deductions: DeductionRates,
}

/// The complete calculator configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct CalculatorConfig {
    /// Calculator metadata.
    metadata: CalculatorMetadata,
    /// Default deduction rates for the net benefit view.
    default_deductions: DeductionRates,
}

impl CalculatorConfig {
    /// Creates a new CalculatorConfig from its component parts.
    pub fn new(metadata: CalculatorMetadata, default_deductions: DeductionRates) -> Self {
        Self {
            metadata,
            default_deductions,
        }
    }

    /// Returns the calculator metadata.
    pub fn metadata(&self) -> &CalculatorMetadata {
        &self.metadata
    }

    /// Returns the default deduction rates.
    pub fn default_deductions(&self) -> &DeductionRates {
        &self.default_deductions
    }
}
