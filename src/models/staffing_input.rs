//! Staffing input model.
//!
//! This module defines [`StaffingInput`], the traffic parameters for a single
//! forecast interval.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Traffic parameters for one forecast interval.
///
/// Handle time and interval length are in minutes, the target answer time
/// is in seconds, and the target service level is a percentage.
///
/// # Example
///
/// ```
/// use staffing_engine::models::StaffingInput;
///
/// let input = StaffingInput {
///     calls_per_interval: 100.0,
///     average_handle_time: 5.0,
///     interval_minutes: 30.0,
///     target_service_level: 80.0,
///     target_answer_time: 20.0,
/// };
/// assert!(input.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StaffingInput {
    /// Offered call volume in the interval.
    pub calls_per_interval: f64,
    /// Mean service time per call, in minutes.
    pub average_handle_time: f64,
    /// Length of the forecast interval, in minutes.
    pub interval_minutes: f64,
    /// Percentage of calls that must be answered within the target answer time.
    pub target_service_level: f64,
    /// Threshold wait time defining "answered in time", in seconds.
    pub target_answer_time: f64,
}

impl StaffingInput {
    /// Checks the numeric preconditions of the engine.
    ///
    /// The target service level is only required to be finite; values
    /// outside `0..=100` are accepted and simply make the target trivially
    /// met or unreachable.
    ///
    /// # Errors
    ///
    /// - [`EngineError::InvalidInterval`] if the handle time or interval
    ///   length is not a positive finite number
    /// - [`EngineError::InvalidInput`] if the call volume or answer time is
    ///   negative, or any field is not finite
    pub fn validate(&self) -> EngineResult<()> {
        check_positive("average_handle_time", self.average_handle_time)?;
        check_positive("interval_minutes", self.interval_minutes)?;
        check_non_negative("calls_per_interval", self.calls_per_interval)?;
        check_non_negative("target_answer_time", self.target_answer_time)?;

        if !self.target_service_level.is_finite() {
            return Err(EngineError::InvalidInput {
                field: "target_service_level".to_string(),
                message: "must be a finite number".to_string(),
            });
        }

        Ok(())
    }

    /// Returns the offered load in Erlangs.
    ///
    /// # Examples
    ///
    /// ```
    /// use staffing_engine::models::StaffingInput;
    ///
    /// let input = StaffingInput {
    ///     calls_per_interval: 60.0,
    ///     average_handle_time: 3.0,
    ///     interval_minutes: 30.0,
    ///     target_service_level: 80.0,
    ///     target_answer_time: 20.0,
    /// };
    /// assert_eq!(input.traffic_intensity(), 6.0);
    /// ```
    pub fn traffic_intensity(&self) -> f64 {
        self.calls_per_interval * self.average_handle_time / self.interval_minutes
    }

    /// Returns the target service level as a fraction.
    pub fn target_fraction(&self) -> f64 {
        self.target_service_level / 100.0
    }
}

fn check_positive(field: &str, value: f64) -> EngineResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(EngineError::InvalidInterval {
            field: field.to_string(),
            value,
        })
    }
}

pub(crate) fn check_non_negative(field: &str, value: f64) -> EngineResult<()> {
    if !value.is_finite() {
        return Err(EngineError::InvalidInput {
            field: field.to_string(),
            message: "must be a finite number".to_string(),
        });
    }
    if value < 0.0 {
        return Err(EngineError::InvalidInput {
            field: field.to_string(),
            message: format!("must not be negative (got {})", value),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_input() -> StaffingInput {
        StaffingInput {
            calls_per_interval: 100.0,
            average_handle_time: 5.0,
            interval_minutes: 30.0,
            target_service_level: 80.0,
            target_answer_time: 20.0,
        }
    }

    #[test]
    fn test_default_input_is_valid() {
        assert!(default_input().validate().is_ok());
    }

    #[test]
    fn test_traffic_intensity_for_default_input() {
        let traffic = default_input().traffic_intensity();
        assert!((traffic - 16.666_666_666_666_668).abs() < 1e-12);
    }

    #[test]
    fn test_zero_handle_time_is_invalid_interval() {
        let input = StaffingInput {
            average_handle_time: 0.0,
            ..default_input()
        };

        match input.validate() {
            Err(EngineError::InvalidInterval { field, value }) => {
                assert_eq!(field, "average_handle_time");
                assert_eq!(value, 0.0);
            }
            other => panic!("Expected InvalidInterval, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_interval_is_invalid_interval() {
        let input = StaffingInput {
            interval_minutes: 0.0,
            ..default_input()
        };

        match input.validate() {
            Err(EngineError::InvalidInterval { field, .. }) => {
                assert_eq!(field, "interval_minutes");
            }
            other => panic!("Expected InvalidInterval, got {:?}", other),
        }
    }

    #[test]
    fn test_nan_interval_is_invalid_interval() {
        let input = StaffingInput {
            interval_minutes: f64::NAN,
            ..default_input()
        };
        assert!(matches!(
            input.validate(),
            Err(EngineError::InvalidInterval { .. })
        ));
    }

    #[test]
    fn test_negative_calls_is_invalid_input() {
        let input = StaffingInput {
            calls_per_interval: -1.0,
            ..default_input()
        };

        match input.validate() {
            Err(EngineError::InvalidInput { field, message }) => {
                assert_eq!(field, "calls_per_interval");
                assert!(message.contains("negative"));
            }
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_out_of_range_target_is_accepted() {
        let above = StaffingInput {
            target_service_level: 120.0,
            ..default_input()
        };
        let below = StaffingInput {
            target_service_level: -5.0,
            ..default_input()
        };
        assert!(above.validate().is_ok());
        assert!(below.validate().is_ok());
    }

    #[test]
    fn test_infinite_target_is_invalid_input() {
        let input = StaffingInput {
            target_service_level: f64::INFINITY,
            ..default_input()
        };
        assert!(matches!(
            input.validate(),
            Err(EngineError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_staffing_input_deserializes_from_json() {
        let json = r#"{
            "calls_per_interval": 100,
            "average_handle_time": 5,
            "interval_minutes": 30,
            "target_service_level": 80,
            "target_answer_time": 20
        }"#;
        let input: StaffingInput = serde_json::from_str(json).unwrap();
        assert_eq!(input, default_input());
    }
}
