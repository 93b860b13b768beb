//! Termination category model.
//!
//! This module defines the [`TerminationType`] enum that selects which
//! severance rule applies to an employment relationship.

use serde::{Deserialize, Serialize};

/// The way an employment relationship ended.
///
/// Each variant maps to a fixed severance rule (days of salary per year of
/// tenure and a cap expressed in monthly salaries).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TerminationType {
    /// Dismissal ruled or acknowledged as unjustified ("despido improcedente").
    #[default]
    OrdinaryUnjustified,
    /// Dismissal for objective causes ("despido objetivo").
    ObjectiveCause,
    /// End of a fixed-term contract ("fin de contrato").
    ContractExpiry,
    /// The worker resigned ("baja voluntaria").
    VoluntaryLeave,
}

impl TerminationType {
    /// Parses a termination code as sent by clients.
    ///
    /// Accepts the kebab-case English codes and the Spanish codes used by
    /// the public calculator form. Matching ignores case and surrounding
    /// whitespace. Returns `None` for anything else.
    ///
    /// # Examples
    ///
    /// ```
    /// use finiquito_engine::models::TerminationType;
    ///
    /// assert_eq!(
    ///     TerminationType::from_code("improcedente"),
    ///     Some(TerminationType::OrdinaryUnjustified)
    /// );
    /// assert_eq!(
    ///     TerminationType::from_code("Contract-Expiry"),
    ///     Some(TerminationType::ContractExpiry)
    /// );
    /// assert_eq!(TerminationType::from_code("disciplinary"), None);
    /// ```
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "ordinary-unjustified" | "improcedente" => Some(Self::OrdinaryUnjustified),
            "objective-cause" | "objetivo" => Some(Self::ObjectiveCause),
            "contract-expiry" | "fin-contrato" => Some(Self::ContractExpiry),
            "voluntary-leave" | "baja" => Some(Self::VoluntaryLeave),
            _ => None,
        }
    }

    /// Returns the canonical wire code for this termination type.
    pub fn code(&self) -> &'static str {
        match self {
            Self::OrdinaryUnjustified => "ordinary-unjustified",
            Self::ObjectiveCause => "objective-cause",
            Self::ContractExpiry => "contract-expiry",
            Self::VoluntaryLeave => "voluntary-leave",
        }
    }
}
