//! Calculation logic for the Staffing Engine.
//!
//! This module contains the Erlang-C queueing formulas (probability of
//! waiting, service level, average speed of answer, occupancy), the
//! required-agent search, the staffing scenario sweep, shrinkage adjustment,
//! and the day planner that applies them across a forecast.

mod day_plan;
mod erlang_c;
mod required_agents;
mod scenarios;
mod shrinkage;

pub use day_plan::{HIGH_OCCUPANCY_THRESHOLD, plan_day};
pub use erlang_c::{
    average_speed_of_answer, erlang_c_probability_of_wait, occupancy, service_level,
};
pub use required_agents::{MAX_AGENTS, solve_required_agents};
pub use scenarios::{SCENARIO_SPAN, generate_staffing_scenarios};
pub use shrinkage::{REFERENCE_SHIFT_MINUTES, adjust_for_shrinkage, shrinkage_percent};
