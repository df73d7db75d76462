//! Core data models for the Staffing Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod forecast;
mod shrinkage;
mod staffing_input;
mod staffing_plan;
mod staffing_result;

pub use forecast::{DayForecast, IntervalForecast};
pub use shrinkage::ShrinkageFactors;
pub use staffing_input::StaffingInput;
pub use staffing_plan::{
    AuditStep, AuditTrace, AuditWarning, IntervalStaffing, PlanTotals, StaffingPlan,
};
pub use staffing_result::{StaffingResult, StaffingScenario};
