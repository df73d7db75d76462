//! Day staffing plan.
//!
//! This module applies the Erlang-C engine to every interval of a day's
//! forecast, inflates each requirement for shrinkage, and aggregates the
//! result into a [`StaffingPlan`] with a full audit trace.

use std::time::Instant;

use chrono::{NaiveDate, NaiveTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use tracing::{info, warn};
use uuid::Uuid;

use crate::config::{CentreConfig, CentreProfile};
use crate::error::{EngineError, EngineResult};
use crate::models::{
    AuditStep, AuditTrace, AuditWarning, IntervalStaffing, PlanTotals, StaffingInput,
    StaffingPlan, StaffingResult,
};

use super::required_agents::{MAX_AGENTS, solve_required_agents};
use super::shrinkage::{REFERENCE_SHIFT_MINUTES, adjust_for_shrinkage, shrinkage_percent};

/// Occupancy above which agents are considered at risk of burnout.
pub const HIGH_OCCUPANCY_THRESHOLD: f64 = 90.0;

/// Builds the staffing plan for one day of a centre's forecast.
///
/// Each interval is solved with [`solve_required_agents`] using the centre's
/// targets (an interval's own handle time overrides the centre default),
/// then inflated with [`adjust_for_shrinkage`]. Agent hours are counted in
/// whole intervals.
///
/// # Warnings
///
/// - `TARGET_OUT_OF_RANGE` when the centre target is outside 0-100%
/// - `TARGET_NOT_ACHIEVABLE` for each interval that hit the agent ceiling
/// - `HIGH_OCCUPANCY` for each interval above 90% occupancy
///
/// # Errors
///
/// - `ForecastNotFound` if no forecast is configured for `date`
/// - `InvalidInterval` / `InvalidInput` if an interval's inputs are invalid
/// - `InvalidInput` if a shrinkage factor is negative or not finite
/// - `InvalidShrinkage` if the configured shrinkage is 100% or more
///
/// # Example
///
/// ```no_run
/// use staffing_engine::calculation::plan_day;
/// use staffing_engine::config::ConfigLoader;
/// use chrono::NaiveDate;
///
/// let loader = ConfigLoader::load("./config/sydney_service")?;
/// let date = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
/// let plan = plan_day(loader.config(), date)?;
/// println!("Peak headcount: {}", plan.totals.peak_scheduled_agents);
/// # Ok::<(), staffing_engine::error::EngineError>(())
/// ```
pub fn plan_day(config: &CentreConfig, date: NaiveDate) -> EngineResult<StaffingPlan> {
    let start_time = Instant::now();
    let plan_id = Uuid::new_v4();
    let profile = config.centre();
    let forecast = config
        .forecast(date)
        .ok_or(EngineError::ForecastNotFound { date })?;

    let mut steps: Vec<AuditStep> = Vec::new();
    let mut warnings: Vec<AuditWarning> = Vec::new();
    let mut step_number: u32 = 1;

    if !(0.0..=100.0).contains(&profile.target_service_level) {
        warn!(
            plan_id = %plan_id,
            target_service_level = profile.target_service_level,
            "Target service level outside 0-100%"
        );
        warnings.push(AuditWarning {
            code: "TARGET_OUT_OF_RANGE".to_string(),
            message: format!(
                "Target service level {}% is outside 0-100%",
                profile.target_service_level
            ),
            severity: "medium".to_string(),
        });
    }

    let factors = config.shrinkage();
    factors.validate()?;
    let shrinkage = shrinkage_percent(factors);
    steps.push(AuditStep {
        step_number,
        rule_id: "shrinkage_percent".to_string(),
        rule_name: "Shrinkage Percentage".to_string(),
        interval_start: None,
        input: serde_json::json!({
            "total_minutes": factors.total_minutes(),
            "reference_shift_minutes": REFERENCE_SHIFT_MINUTES
        }),
        output: serde_json::json!({ "shrinkage_percent": shrinkage }),
        reasoning: format!(
            "{} / {} minutes = {}%",
            factors.total_minutes(),
            REFERENCE_SHIFT_MINUTES,
            shrinkage
        ),
    });
    step_number += 1;

    let mut intervals = Vec::with_capacity(forecast.intervals.len());
    for interval in &forecast.intervals {
        let input = profile.staffing_input(interval.calls, interval.average_handle_time);
        let result = solve_required_agents(&input)?;

        steps.push(traffic_intensity_step(step_number, interval.start, &input, &result));
        step_number += 1;
        steps.push(required_agents_step(step_number, interval.start, &input, &result));
        step_number += 1;

        let scheduled_agents = adjust_for_shrinkage(result.required_agents, shrinkage)?;
        steps.push(AuditStep {
            step_number,
            rule_id: "shrinkage_adjustment".to_string(),
            rule_name: "Shrinkage Adjustment".to_string(),
            interval_start: Some(interval.start),
            input: serde_json::json!({
                "required_agents": result.required_agents,
                "shrinkage_percent": shrinkage
            }),
            output: serde_json::json!({ "scheduled_agents": scheduled_agents }),
            reasoning: format!(
                "ceil({} / (1 - {}%)) = {} scheduled agents",
                result.required_agents, shrinkage, scheduled_agents
            ),
        });
        step_number += 1;

        if !result.target_met {
            warnings.push(AuditWarning {
                code: "TARGET_NOT_ACHIEVABLE".to_string(),
                message: format!(
                    "{}: {}% service level not reached within {} agents (achieved {:.2}%)",
                    interval.start,
                    input.target_service_level,
                    MAX_AGENTS,
                    result.service_level
                ),
                severity: "high".to_string(),
            });
        }
        if result.occupancy > HIGH_OCCUPANCY_THRESHOLD {
            warnings.push(AuditWarning {
                code: "HIGH_OCCUPANCY".to_string(),
                message: format!(
                    "{}: occupancy {:.1}% exceeds {}%",
                    interval.start, result.occupancy, HIGH_OCCUPANCY_THRESHOLD
                ),
                severity: "low".to_string(),
            });
        }

        intervals.push(IntervalStaffing {
            start: interval.start,
            input,
            result,
            scheduled_agents,
        });
    }

    let totals = plan_totals(profile, &intervals)?;
    let duration = start_time.elapsed();

    info!(
        plan_id = %plan_id,
        centre = %profile.code,
        date = %date,
        intervals = intervals.len(),
        peak_scheduled_agents = totals.peak_scheduled_agents,
        scheduled_agent_hours = %totals.scheduled_agent_hours,
        warnings = warnings.len(),
        duration_us = duration.as_micros(),
        "Staffing plan completed"
    );

    Ok(StaffingPlan {
        plan_id,
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        centre_code: profile.code.clone(),
        date,
        shrinkage_percent: shrinkage,
        intervals,
        totals,
        audit_trace: AuditTrace {
            steps,
            warnings,
            duration_us: u64::try_from(duration.as_micros()).unwrap_or(u64::MAX),
        },
    })
}

fn traffic_intensity_step(
    step_number: u32,
    start: NaiveTime,
    input: &StaffingInput,
    result: &StaffingResult,
) -> AuditStep {
    AuditStep {
        step_number,
        rule_id: "traffic_intensity".to_string(),
        rule_name: "Traffic Intensity".to_string(),
        interval_start: Some(start),
        input: serde_json::json!({
            "calls_per_interval": input.calls_per_interval,
            "average_handle_time": input.average_handle_time,
            "interval_minutes": input.interval_minutes
        }),
        output: serde_json::json!({ "traffic_intensity": result.traffic_intensity }),
        reasoning: format!(
            "{} calls x {} min / {} min = {:.3} Erlangs",
            input.calls_per_interval,
            input.average_handle_time,
            input.interval_minutes,
            result.traffic_intensity
        ),
    }
}

fn required_agents_step(
    step_number: u32,
    start: NaiveTime,
    input: &StaffingInput,
    result: &StaffingResult,
) -> AuditStep {
    let reasoning = if result.target_met {
        format!(
            "{} agents give {:.2}% answered within {}s (target {}%)",
            result.required_agents,
            result.service_level,
            input.target_answer_time,
            input.target_service_level
        )
    } else {
        format!(
            "Target {}% not reached; stopped at {} agents with {:.2}%",
            input.target_service_level, result.required_agents, result.service_level
        )
    };

    AuditStep {
        step_number,
        rule_id: "required_agents".to_string(),
        rule_name: "Erlang-C Required Agents".to_string(),
        interval_start: Some(start),
        input: serde_json::json!({
            "traffic_intensity": result.traffic_intensity,
            "target_service_level": input.target_service_level,
            "target_answer_time": input.target_answer_time
        }),
        output: serde_json::json!({
            "required_agents": result.required_agents,
            "service_level": result.service_level,
            "probability_of_waiting": result.probability_of_waiting,
            "average_speed_of_answer": result.average_speed_of_answer,
            "occupancy": result.occupancy,
            "target_met": result.target_met
        }),
        reasoning,
    }
}

fn plan_totals(
    profile: &CentreProfile,
    intervals: &[IntervalStaffing],
) -> EngineResult<PlanTotals> {
    let interval_hours = Decimal::from_f64(profile.interval_minutes)
        .map(|minutes| minutes / Decimal::from(60))
        .ok_or_else(|| EngineError::CalculationError {
            message: format!(
                "interval length {} cannot be expressed as a decimal",
                profile.interval_minutes
            ),
        })?;

    let required: u64 = intervals
        .iter()
        .map(|i| u64::from(i.result.required_agents))
        .sum();
    let scheduled: u64 = intervals
        .iter()
        .map(|i| u64::from(i.scheduled_agents))
        .sum();

    let required_agent_hours = Decimal::from(required) * interval_hours;
    let scheduled_agent_hours = Decimal::from(scheduled) * interval_hours;
    let labour_cost = profile
        .cost_per_agent_hour
        .map(|rate| (scheduled_agent_hours * rate).round_dp(2));

    Ok(PlanTotals {
        total_calls: intervals.iter().map(|i| i.input.calls_per_interval).sum(),
        peak_required_agents: intervals
            .iter()
            .map(|i| i.result.required_agents)
            .max()
            .unwrap_or(0),
        peak_scheduled_agents: intervals
            .iter()
            .map(|i| i.scheduled_agents)
            .max()
            .unwrap_or(0),
        required_agent_hours,
        scheduled_agent_hours,
        labour_cost,
        lowest_service_level: intervals
            .iter()
            .map(|i| i.result.service_level)
            .fold(100.0, f64::min),
    })
}
