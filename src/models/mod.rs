//! Core data models for the estimation engine.
//!
//! This module contains all the domain models used throughout the engine.

mod benefit;
mod calculation_result;
mod salary;
mod severance;
mod tenure;
mod termination;

pub use benefit::{BenefitInput, BenefitResult, DeductionRates, NetBenefit};
pub use calculation_result::{AuditStep, AuditTrace, AuditWarning, CalculationResult};
pub use salary::SalaryBasis;
pub use severance::{SeveranceInput, SeveranceResult};
pub use tenure::Tenure;
pub use termination::TerminationType;
