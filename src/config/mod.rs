//! Configuration loading and management for the Staffing Engine.
//!
//! This module provides functionality to load contact-centre configurations
//! from YAML files, including service targets, shrinkage factors and
//! interval forecasts.
//!
//! # Example
//!
//! ```no_run
//! use staffing_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/sydney_service").unwrap();
//! println!("Loaded centre: {}", config.centre().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{CentreConfig, CentreProfile};
