//! Error types for the severance and benefit estimation engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for the few conditions that can stop a calculation request. The
//! estimators themselves never fail; errors come from configuration loading
//! and from input sanitisation.

use thiserror::Error;

/// The main error type for the engine.
///
/// # Example
///
/// ```
/// use finiquito_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/calculator.yaml".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Configuration file not found: /missing/calculator.yaml"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A request field could not be coerced into a usable value.
    #[error("Invalid input field '{field}': {message}")]
    InvalidInput {
        /// The request field that was rejected.
        field: String,
        /// A description of what made the field unusable.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/calculator.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/calculator.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_input_displays_field_and_message() {
        let error = EngineError::InvalidInput {
            field: "monthly_gross_salary".to_string(),
            message: "expected a number, found an object".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid input field 'monthly_gross_salary': expected a number, found an object"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_invalid_input() -> EngineResult<()> {
            Err(EngineError::InvalidInput {
                field: "contribution_days".to_string(),
                message: "too large".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_invalid_input()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
