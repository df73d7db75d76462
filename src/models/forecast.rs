//! Interval forecast models.
//!
//! This module defines [`DayForecast`] and [`IntervalForecast`], the call
//! volume predictions a day's staffing plan is built from.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Forecast call volume for one interval of the day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntervalForecast {
    /// The time the interval starts.
    pub start: NaiveTime,
    /// Forecast number of offered calls.
    pub calls: f64,
    /// Optional handle time override in minutes for this interval.
    #[serde(default)]
    pub average_handle_time: Option<f64>,
}

/// Forecast call volume for a whole day, one entry per interval.
///
/// # Example
///
/// ```
/// use staffing_engine::models::{DayForecast, IntervalForecast};
/// use chrono::{NaiveDate, NaiveTime};
///
/// let forecast = DayForecast {
///     date: NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
///     intervals: vec![
///         IntervalForecast {
///             start: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
///             calls: 80.0,
///             average_handle_time: None,
///         },
///         IntervalForecast {
///             start: NaiveTime::from_hms_opt(9, 30, 0).unwrap(),
///             calls: 120.0,
///             average_handle_time: Some(4.5),
///         },
///     ],
/// };
/// assert_eq!(forecast.total_calls(), 200.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayForecast {
    /// The date the forecast applies to.
    pub date: NaiveDate,
    /// Interval forecasts, in the order they occur.
    #[serde(default)]
    pub intervals: Vec<IntervalForecast>,
}

impl DayForecast {
    /// Returns the total forecast call volume for the day.
    pub fn total_calls(&self) -> f64 {
        self.intervals.iter().map(|i| i.calls).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_forecast_deserializes_from_yaml() {
        let yaml = r#"
date: 2026-03-02
intervals:
  - start: "09:00:00"
    calls: 80
  - start: "09:30:00"
    calls: 120
    average_handle_time: 4.5
"#;
        let forecast: DayForecast = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(forecast.date, NaiveDate::from_ymd_opt(2026, 3, 2).unwrap());
        assert_eq!(forecast.intervals.len(), 2);
        assert_eq!(
            forecast.intervals[0].start,
            NaiveTime::from_hms_opt(9, 0, 0).unwrap()
        );
        assert_eq!(forecast.intervals[0].average_handle_time, None);
        assert_eq!(forecast.intervals[1].average_handle_time, Some(4.5));
    }

    #[test]
    fn test_total_calls_of_empty_forecast_is_zero() {
        let forecast = DayForecast {
            date: NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
            intervals: vec![],
        };
        assert_eq!(forecast.total_calls(), 0.0);
    }
}
