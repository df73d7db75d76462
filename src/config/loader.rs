//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading contact-centre
//! configurations from YAML files.

use chrono::NaiveDate;
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{DayForecast, ShrinkageFactors};

use super::types::{CentreConfig, CentreProfile};

/// Loads and provides access to a contact-centre configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory
/// and provides methods to query the centre profile, shrinkage factors and
/// day forecasts.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/sydney_service/
/// ├── centre.yaml         # Centre profile and service targets
/// ├── shrinkage.yaml      # Shrinkage factors in minutes per shift
/// └── forecasts/
///     └── 2026-03-02.yaml # Interval forecast for one day
/// ```
///
/// # Example
///
/// ```no_run
/// use staffing_engine::config::ConfigLoader;
/// use chrono::NaiveDate;
///
/// let loader = ConfigLoader::load("./config/sydney_service").unwrap();
/// println!("Loaded centre: {}", loader.centre().name);
///
/// let date = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
/// let forecast = loader.forecast(date).unwrap();
/// println!("Forecast calls: {}", forecast.total_calls());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: CentreConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/sydney_service")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - The forecasts directory holds no forecast files
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let profile = Self::load_yaml::<CentreProfile>(&path.join("centre.yaml"))?;
        let shrinkage = Self::load_yaml::<ShrinkageFactors>(&path.join("shrinkage.yaml"))?;
        let forecasts = Self::load_forecasts(&path.join("forecasts"))?;

        debug!(
            centre = %profile.code,
            forecasts = forecasts.len(),
            "Loaded centre configuration"
        );

        let config = CentreConfig::new(profile, shrinkage, forecasts);
        Ok(Self { config })
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

    /// Loads all forecast files from the forecasts directory.
    fn load_forecasts(forecasts_dir: &Path) -> EngineResult<Vec<DayForecast>> {
        let dir_str = forecasts_dir.display().to_string();

        let entries = fs::read_dir(forecasts_dir).map_err(|_| EngineError::ConfigNotFound {
            path: dir_str.clone(),
        })?;

        let mut paths = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: dir_str.clone(),
            })?;
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                paths.push(path);
            }
        }
        paths.sort();

        let forecasts = paths
            .iter()
            .map(|path| Self::load_yaml::<DayForecast>(path))
            .collect::<EngineResult<Vec<_>>>()?;

        if forecasts.is_empty() {
            return Err(EngineError::ConfigNotFound {
                path: format!("{} (no forecast files found)", dir_str),
            });
        }

        Ok(forecasts)
    }

    /// Returns the underlying centre configuration.
    pub fn config(&self) -> &CentreConfig {
        &self.config
    }

    /// Returns the centre profile.
    pub fn centre(&self) -> &CentreProfile {
        self.config.centre()
    }

    /// Returns the shrinkage factors.
    pub fn shrinkage(&self) -> &ShrinkageFactors {
        self.config.shrinkage()
    }

    /// Gets the forecast for a date.
    ///
    /// # Errors
    ///
    /// Returns `ForecastNotFound` if no forecast file covers the date.
    pub fn forecast(&self, date: NaiveDate) -> EngineResult<&DayForecast> {
        self.config
            .forecast(date)
            .ok_or(EngineError::ForecastNotFound { date })
    }

    /// Returns all configured forecast dates in ascending order.
    pub fn forecast_dates(&self) -> Vec<NaiveDate> {
        self.config.forecast_dates()
    }
}
