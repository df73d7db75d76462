//! Required agent search.
//!
//! This module finds the minimum headcount that meets a service level target
//! for one interval and reports the Erlang-C metrics at that headcount.

use tracing::{debug, warn};

use crate::error::EngineResult;
use crate::models::{StaffingInput, StaffingResult};

use super::erlang_c::{
    average_speed_of_answer, erlang_c_probability_of_wait, occupancy, service_level,
};

/// Hard ceiling on the agent search.
///
/// Targets that cannot be met below this headcount (for example a 100%
/// service level) return the metrics at the ceiling instead of looping.
pub const MAX_AGENTS: u32 = 1000;

/// Solves for the minimum agent count meeting the target service level.
///
/// The search starts at `ceil(traffic_intensity)` and increments before
/// testing, so the returned headcount is always strictly greater than
/// `ceil(traffic_intensity)`. It stops at the first count whose modeled
/// service level reaches the target, or at [`MAX_AGENTS`].
///
/// Hitting the ceiling is not an error: the result is returned with
/// `target_met` set to `false`. When the traffic intensity is already at or
/// above [`MAX_AGENTS`] no search is run and the unstable metrics at the
/// ceiling are returned, with no speed of answer.
///
/// # Errors
///
/// Returns an error if the input fails [`StaffingInput::validate`].
///
/// # Examples
///
/// ```
/// use staffing_engine::calculation::solve_required_agents;
/// use staffing_engine::models::StaffingInput;
///
/// let input = StaffingInput {
///     calls_per_interval: 100.0,
///     average_handle_time: 5.0,
///     interval_minutes: 30.0,
///     target_service_level: 80.0,
///     target_answer_time: 20.0,
/// };
///
/// let result = solve_required_agents(&input).unwrap();
/// assert_eq!(result.required_agents, 18);
/// assert!(result.service_level >= 80.0);
/// assert!(result.target_met);
/// ```
pub fn solve_required_agents(input: &StaffingInput) -> EngineResult<StaffingResult> {
    input.validate()?;

    let traffic = input.traffic_intensity();
    let target = input.target_fraction();

    let (agents, achieved) = if traffic >= f64::from(MAX_AGENTS) {
        // Every headcount up to the ceiling is unstable
        let achieved = service_level(
            MAX_AGENTS,
            traffic,
            input.target_answer_time,
            input.average_handle_time,
        );
        (MAX_AGENTS, achieved)
    } else {
        search_agents(input, traffic, target)
    };

    let target_met = achieved >= target;
    if target_met {
        debug!(
            traffic_intensity = traffic,
            required_agents = agents,
            service_level = achieved * 100.0,
            "Solved required agents"
        );
    } else {
        warn!(
            traffic_intensity = traffic,
            agents,
            service_level = achieved * 100.0,
            target_service_level = input.target_service_level,
            "Service level target not achievable within agent ceiling"
        );
    }

    let pw = erlang_c_probability_of_wait(agents, traffic);
    let asa = average_speed_of_answer(agents, traffic, input.average_handle_time);
    let asa = asa.is_finite().then_some(asa);

    Ok(StaffingResult {
        required_agents: agents,
        traffic_intensity: traffic,
        occupancy: occupancy(agents, traffic),
        service_level: achieved * 100.0,
        average_speed_of_answer: asa,
        probability_of_waiting: pw * 100.0,
        average_wait_time: asa,
        target_met,
    })
}

/// Increments from `ceil(traffic)` until the target or the ceiling is reached.
fn search_agents(input: &StaffingInput, traffic: f64, target: f64) -> (u32, f64) {
    // traffic is below MAX_AGENTS here, so the cast is exact
    let mut agents = traffic.ceil() as u32;
    loop {
        agents += 1;
        let achieved = service_level(
            agents,
            traffic,
            input.target_answer_time,
            input.average_handle_time,
        );
        if achieved >= target || agents >= MAX_AGENTS {
            return (agents, achieved);
        }
    }
}
