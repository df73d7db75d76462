//! Error types for the Staffing Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while sizing a contact centre.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the Staffing Engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use staffing_engine::error::EngineError;
///
/// let error = EngineError::InvalidShrinkage { percent: 120.0 };
/// assert_eq!(
///     error.to_string(),
///     "Invalid shrinkage: 120% leaves no productive time (must be below 100%)"
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

    /// No forecast was configured for the requested date.
    #[error("Forecast not found for date {date}")]
    ForecastNotFound {
        /// The date that was requested.
        date: NaiveDate,
    },

    /// The handle time or interval length cannot produce a traffic intensity.
    #[error("Invalid interval: {field} must be greater than zero (got {value})")]
    InvalidInterval {
        /// The offending field.
        field: String,
        /// The value that was supplied.
        value: f64,
    },

    /// A staffing input field was negative or not a finite number.
    #[error("Invalid input field '{field}': {message}")]
    InvalidInput {
        /// The offending field.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// Shrinkage of 100% or more leaves no productive agent time.
    #[error("Invalid shrinkage: {percent}% leaves no productive time (must be below 100%)")]
    InvalidShrinkage {
        /// The shrinkage percentage that was supplied.
        percent: f64,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
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
            path: "/missing/centre.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/centre.yaml"
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
    fn test_forecast_not_found_displays_date() {
        let error = EngineError::ForecastNotFound {
            date: NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
        };
        assert_eq!(error.to_string(), "Forecast not found for date 2026-03-02");
    }

    #[test]
    fn test_invalid_interval_displays_field_and_value() {
        let error = EngineError::InvalidInterval {
            field: "interval_minutes".to_string(),
            value: 0.0,
        };
        assert_eq!(
            error.to_string(),
            "Invalid interval: interval_minutes must be greater than zero (got 0)"
        );
    }

    #[test]
    fn test_invalid_input_displays_field_and_message() {
        let error = EngineError::InvalidInput {
            field: "calls_per_interval".to_string(),
            message: "must not be negative".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid input field 'calls_per_interval': must not be negative"
        );
    }

    #[test]
    fn test_invalid_shrinkage_displays_percent() {
        let error = EngineError::InvalidShrinkage { percent: 100.0 };
        assert_eq!(
            error.to_string(),
            "Invalid shrinkage: 100% leaves no productive time (must be below 100%)"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_invalid_shrinkage() -> EngineResult<()> {
            Err(EngineError::InvalidShrinkage { percent: 150.0 })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_invalid_shrinkage()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
