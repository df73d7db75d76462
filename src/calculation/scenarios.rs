//! Staffing scenario sweep.
//!
//! This module builds the "what if we staff N agents" comparison table.

use crate::error::EngineResult;
use crate::models::{StaffingInput, StaffingScenario};

use super::erlang_c::{
    average_speed_of_answer, erlang_c_probability_of_wait, occupancy, service_level,
};

/// Number of agent counts above the starting point included in a sweep.
pub const SCENARIO_SPAN: u32 = 20;

/// Computes metrics for a contiguous range of agent counts.
///
/// Rows run from `max(1, ceil(traffic_intensity))` to twenty agents above
/// that, giving exactly 21 rows in ascending order. No target is applied.
/// When the traffic intensity is a whole number the first row sits on the
/// stability boundary: a zero service level and no speed of answer. Each
/// row costs one windowed Erlang-B pass, so a sweep over `A` Erlangs is
/// `O(sqrt(A))` per row.
///
/// # Errors
///
/// Returns an error if the input fails [`StaffingInput::validate`].
///
/// # Examples
///
/// ```
/// use staffing_engine::calculation::generate_staffing_scenarios;
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
/// let scenarios = generate_staffing_scenarios(&input).unwrap();
/// assert_eq!(scenarios.len(), 21);
/// assert_eq!(scenarios[0].agents, 17);
/// assert_eq!(scenarios[20].agents, 37);
/// ```
pub fn generate_staffing_scenarios(
    input: &StaffingInput,
) -> EngineResult<Vec<StaffingScenario>> {
    input.validate()?;

    let traffic = input.traffic_intensity();
    let min_agents = (traffic.ceil() as u32).max(1);

    let scenarios = (min_agents..=min_agents.saturating_add(SCENARIO_SPAN))
        .map(|agents| {
            let asa = average_speed_of_answer(agents, traffic, input.average_handle_time);
            StaffingScenario {
                agents,
                service_level: service_level(
                    agents,
                    traffic,
                    input.target_answer_time,
                    input.average_handle_time,
                ) * 100.0,
                average_speed_of_answer: asa.is_finite().then_some(asa),
                occupancy: occupancy(agents, traffic),
                probability_of_waiting: erlang_c_probability_of_wait(agents, traffic) * 100.0,
            }
        })
        .collect();

    Ok(scenarios)
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
    fn test_sweep_has_21_contiguous_rows() {
        let scenarios = generate_staffing_scenarios(&default_input()).unwrap();

        assert_eq!(scenarios.len(), 21);
        for (offset, scenario) in scenarios.iter().enumerate() {
            assert_eq!(scenario.agents, 17 + offset as u32);
        }
    }

    #[test]
    fn test_sweep_row_matches_solved_metrics() {
        let scenarios = generate_staffing_scenarios(&default_input()).unwrap();
        let row = scenarios.iter().find(|s| s.agents == 18).unwrap();

        assert!((row.service_level - 99.976_109_052_074_04).abs() < 1e-9);
        assert!((row.occupancy - 92.592_592_592_592_61).abs() < 1e-9);
        assert!((row.probability_of_waiting - 4.948_466_317_274_476).abs() < 1e-9);
    }

    #[test]
    fn test_zero_traffic_sweep_starts_at_one_agent() {
        let input = StaffingInput {
            calls_per_interval: 0.0,
            ..default_input()
        };
        let scenarios = generate_staffing_scenarios(&input).unwrap();

        assert_eq!(scenarios.len(), 21);
        assert_eq!(scenarios[0].agents, 1);
        assert_eq!(scenarios[20].agents, 21);
        assert!(scenarios.iter().all(|s| s.service_level == 100.0));
    }

    #[test]
    fn test_integer_traffic_first_row_is_unstable() {
        let input = StaffingInput {
            calls_per_interval: 60.0,
            average_handle_time: 3.0,
            ..default_input()
        };
        let scenarios = generate_staffing_scenarios(&input).unwrap();
        let first = &scenarios[0];

        assert_eq!(first.agents, 6);
        assert_eq!(first.probability_of_waiting, 100.0);
        assert_eq!(first.service_level, 0.0);
        assert_eq!(first.occupancy, 100.0);
        assert_eq!(first.average_speed_of_answer, None);
        assert!(scenarios[1].average_speed_of_answer.is_some());
    }

    #[test]
    fn test_unstable_first_row_round_trips_through_json() {
        let input = StaffingInput {
            calls_per_interval: 60.0,
            average_handle_time: 3.0,
            ..default_input()
        };
        let scenarios = generate_staffing_scenarios(&input).unwrap();

        let json = serde_json::to_string(&scenarios).unwrap();
        let parsed: Vec<StaffingScenario> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, scenarios);
    }

    #[test]
    fn test_sweep_over_huge_traffic_is_quick() {
        // 10^8 Erlangs
        let input = StaffingInput {
            calls_per_interval: 6.0e8,
            ..default_input()
        };
        let scenarios = generate_staffing_scenarios(&input).unwrap();

        assert_eq!(scenarios.len(), 21);
        assert_eq!(scenarios[0].agents, 100_000_000);
        assert_eq!(scenarios[0].average_speed_of_answer, None);
        assert!(scenarios[20].probability_of_waiting < 100.0);
    }

    #[test]
    fn test_sweep_ignores_target_service_level() {
        let strict = StaffingInput {
            target_service_level: 100.0,
            ..default_input()
        };
        assert_eq!(
            generate_staffing_scenarios(&strict).unwrap(),
            generate_staffing_scenarios(&default_input()).unwrap()
        );
    }
}
