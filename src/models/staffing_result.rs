//! Staffing result models.
//!
//! This module contains [`StaffingResult`], the solved headcount for one
//! interval, and [`StaffingScenario`], one row of a what-if staffing table.

use serde::{Deserialize, Serialize};

/// The minimum headcount meeting a service level target, with its metrics.
///
/// Percentages (`occupancy`, `service_level`, `probability_of_waiting`) are
/// on a 0-100 scale. Wait times are in the same unit as the handle time and
/// are `None` when the queue is unstable, where waits grow without bound.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StaffingResult {
    /// Minimum agent count found by the search.
    pub required_agents: u32,
    /// Offered load in Erlangs.
    pub traffic_intensity: f64,
    /// Agent utilisation as a percentage.
    pub occupancy: f64,
    /// Modeled percentage of calls answered within the target answer time.
    pub service_level: f64,
    /// Expected wait for calls that queue.
    pub average_speed_of_answer: Option<f64>,
    /// Erlang-C probability that a call waits, as a percentage.
    pub probability_of_waiting: f64,
    /// Unconditional expected wait.
    pub average_wait_time: Option<f64>,
    /// False when the search stopped at the agent ceiling below target.
    pub target_met: bool,
}

/// Metrics for an explicit agent count in a staffing sweep.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StaffingScenario {
    /// The agent count for this row.
    pub agents: u32,
    /// Modeled service level as a percentage.
    pub service_level: f64,
    /// Expected wait for calls that queue; `None` when the queue is unstable.
    pub average_speed_of_answer: Option<f64>,
    /// Agent utilisation as a percentage.
    pub occupancy: f64,
    /// Erlang-C probability that a call waits, as a percentage.
    pub probability_of_waiting: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_staffing_result_serializes_snake_case_fields() {
        let result = StaffingResult {
            required_agents: 18,
            traffic_intensity: 16.5,
            occupancy: 91.6,
            service_level: 99.9,
            average_speed_of_answer: Some(0.18),
            probability_of_waiting: 4.9,
            average_wait_time: Some(0.18),
            target_met: true,
        };

        let json = serde_json::to_value(result).unwrap();
        assert_eq!(json["required_agents"], 18);
        assert_eq!(json["target_met"], true);
        assert_eq!(json["probability_of_waiting"], 4.9);
    }

    #[test]
    fn test_staffing_scenario_round_trips_through_json() {
        let scenario = StaffingScenario {
            agents: 20,
            service_level: 99.5,
            average_speed_of_answer: Some(0.08),
            occupancy: 83.3,
            probability_of_waiting: 5.6,
        };

        let json = serde_json::to_string(&scenario).unwrap();
        let parsed: StaffingScenario = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, scenario);
    }

    #[test]
    fn test_unstable_scenario_round_trips_through_json() {
        let scenario = StaffingScenario {
            agents: 6,
            service_level: 0.0,
            average_speed_of_answer: None,
            occupancy: 100.0,
            probability_of_waiting: 100.0,
        };

        let json = serde_json::to_string(&scenario).unwrap();
        assert!(json.contains("\"average_speed_of_answer\":null"));
        let parsed: StaffingScenario = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, scenario);
    }
}
