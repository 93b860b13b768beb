//! Calculation result models.
//!
//! This module contains the [`CalculationResult`] type returned by the
//! `/calculate` endpoint, together with the audit structures that explain
//! how each figure was reached.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{BenefitResult, NetBenefit, TerminationType};

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// Reference to the statutory provision behind this rule.
    pub legal_ref: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated while preparing or running a calculation.
///
/// Warnings never stop a calculation; they flag input that was coerced or
/// ignored so the caller can tell the worker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

impl AuditWarning {
    /// Creates a warning.
    pub fn new(
        code: impl Into<String>,
        message: impl Into<String>,
        severity: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            severity: severity.into(),
        }
    }
}

/// The complete audit trace for a calculation.
///
/// # Example
///
/// ```
/// use finiquito_engine::models::AuditTrace;
///
/// let trace = AuditTrace {
///     steps: vec![],
///     warnings: vec![],
///     duration_us: 42,
/// };
/// assert!(trace.steps.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

/// The complete result of a severance and benefit estimation.
///
/// `severance` and `benefit` are the two headline figures; everything else
/// is context for displaying and auditing them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The termination rule the severance was computed under.
    ///
    /// An unrecognised code is computed as voluntary leave; the code as sent
    /// is echoed in `unrecognised_termination_type`.
    pub termination_type: TerminationType,
    /// The termination code as sent, when it was not recognised.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unrecognised_termination_type: Option<String>,
    /// Estimated severance amount in euros.
    pub severance: Decimal,
    /// Estimated unemployment benefit schedule.
    pub benefit: BenefitResult,
    /// Approximate net view of the benefit schedule.
    pub net_benefit: NetBenefit,
    /// Reminder that the figures are estimates only.
    pub disclaimer: String,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}
