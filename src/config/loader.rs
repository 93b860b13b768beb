//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading calculator
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::DeductionRates;

use super::types::{CalculatorConfig, CalculatorMetadata, DeductionsConfig};

/// Loads and provides access to calculator configuration.
///
/// # Directory Structure
///
/// ```text
/// config/es/
/// ├── calculator.yaml   # Calculator metadata and disclaimer
/// └── deductions.yaml   # Default deductions for the net benefit view
/// ```
///
/// # Example
///
/// ```no_run
/// use finiquito_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/es")?;
/// println!("Loaded calculator: {}", loader.calculator().name);
/// # Ok::<(), finiquito_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: CalculatorConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing (`ConfigNotFound`)
    /// - Any file contains invalid YAML or misses a field (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<CalculatorMetadata>(&path.join("calculator.yaml"))?;
        let deductions = Self::load_yaml::<DeductionsConfig>(&path.join("deductions.yaml"))?;

        Ok(Self::from_config(CalculatorConfig::new(
            metadata,
            deductions.default_deductions,
        )))
    }

    /// Wraps an already-built configuration.
    pub fn from_config(config: CalculatorConfig) -> Self {
        Self { config }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying calculator configuration.
    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Returns the calculator metadata.
    pub fn calculator(&self) -> &CalculatorMetadata {
        self.config.metadata()
    }

    /// Returns the deduction rates used when a request supplies none.
    pub fn default_deductions(&self) -> DeductionRates {
        *self.config.default_deductions()
    }
}
