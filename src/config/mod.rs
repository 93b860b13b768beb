//! Configuration loading and management for the estimation engine.
//!
//! This module loads deployment settings from YAML files: calculator
//! metadata with the disclaimer shown to users, and the default deductions
//! used for the approximate net benefit.
//!
//! # Example
//!
//! ```no_run
//! use finiquito_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/es").unwrap();
//! println!("Loaded calculator: {}", config.calculator().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{CalculatorConfig, CalculatorMetadata, DeductionsConfig};
