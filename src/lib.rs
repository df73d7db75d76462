//! Erlang-C Workforce Staffing Engine
//!
//! This crate sizes contact-centre staffing from interval call forecasts:
//! it solves the minimum agent headcount meeting a service level target,
//! sweeps what-if staffing tables, and adjusts headcount for shrinkage.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
