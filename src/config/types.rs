//! Configuration types for contact-centre staffing.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::BTreeMap;

use crate::models::{DayForecast, ShrinkageFactors, StaffingInput};

/// Default interval length in minutes.
fn default_interval_minutes() -> f64 {
    30.0
}

/// Service targets and defaults for a contact centre, from `centre.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct CentreProfile {
    /// Short identifying code for the centre (e.g., "SYD-CS").
    pub code: String,
    /// Human-readable name of the centre.
    pub name: String,
    /// Length of each forecast interval in minutes.
    #[serde(default = "default_interval_minutes")]
    pub interval_minutes: f64,
    /// Default handle time in minutes, used unless an interval overrides it.
    pub average_handle_time: f64,
    /// Percentage of calls to answer within the target answer time.
    pub target_service_level: f64,
    /// Target answer time in seconds.
    pub target_answer_time: f64,
    /// Fully loaded hourly cost of one scheduled agent.
    #[serde(default)]
    pub cost_per_agent_hour: Option<Decimal>,
}

impl CentreProfile {
    /// Builds the staffing input for an interval with the given call volume.
    ///
    /// `average_handle_time` overrides the centre default when present.
    pub fn staffing_input(&self, calls: f64, average_handle_time: Option<f64>) -> StaffingInput {
        StaffingInput {
            calls_per_interval: calls,
            average_handle_time: average_handle_time.unwrap_or(self.average_handle_time),
            interval_minutes: self.interval_minutes,
            target_service_level: self.target_service_level,
            target_answer_time: self.target_answer_time,
        }
    }
}

/// The complete centre configuration loaded from YAML files.
///
/// This struct aggregates the profile, shrinkage factors and day forecasts
/// found in a centre configuration directory.
#[derive(Debug, Clone)]
pub struct CentreConfig {
    /// Centre profile.
    profile: CentreProfile,
    /// Shrinkage factors applied to every interval.
    shrinkage: ShrinkageFactors,
    /// Forecasts keyed by date.
    forecasts: BTreeMap<NaiveDate, DayForecast>,
}

impl CentreConfig {
    /// Creates a new CentreConfig from its component parts.
    ///
    /// A later forecast for the same date replaces an earlier one.
    pub fn new(
        profile: CentreProfile,
        shrinkage: ShrinkageFactors,
        forecasts: Vec<DayForecast>,
    ) -> Self {
        let forecasts = forecasts.into_iter().map(|f| (f.date, f)).collect();
        Self {
            profile,
            shrinkage,
            forecasts,
        }
    }

    /// Returns the centre profile.
    pub fn centre(&self) -> &CentreProfile {
        &self.profile
    }

    /// Returns the shrinkage factors.
    pub fn shrinkage(&self) -> &ShrinkageFactors {
        &self.shrinkage
    }

    /// Returns the forecast for a date, if one is configured.
    pub fn forecast(&self, date: NaiveDate) -> Option<&DayForecast> {
        self.forecasts.get(&date)
    }

    /// Returns all forecast dates in ascending order.
    pub fn forecast_dates(&self) -> Vec<NaiveDate> {
        self.forecasts.keys().copied().collect()
    }
}
