//! Staffing plan models for the Staffing Engine.
//!
//! This module contains the [`StaffingPlan`] type and its associated structures
//! that capture the outputs of planning a full day: per-interval headcount,
//! totals, and an audit trace of every calculation made.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{StaffingInput, StaffingResult};

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for one formula.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The interval this step belongs to, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval_start: Option<NaiveTime>,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during planning.
///
/// Warnings indicate potential issues that don't prevent a plan from
/// being produced but may require attention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a staffing plan.
///
/// # Example
///
/// ```
/// use staffing_engine::models::AuditTrace;
///
/// let trace = AuditTrace {
///     steps: vec![],
///     warnings: vec![],
///     duration_us: 1234,
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during planning.
    pub warnings: Vec<AuditWarning>,
    /// The total planning duration in microseconds.
    pub duration_us: u64,
}

/// Staffing requirement for one forecast interval.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntervalStaffing {
    /// The time the interval starts.
    pub start: NaiveTime,
    /// The traffic parameters the interval was solved with.
    pub input: StaffingInput,
    /// The solved Erlang-C result.
    pub result: StaffingResult,
    /// Headcount to schedule once shrinkage is allowed for.
    pub scheduled_agents: u32,
}

/// Aggregated totals for a staffing plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanTotals {
    /// Total forecast calls across all intervals.
    pub total_calls: f64,
    /// Largest on-phone requirement in any interval.
    pub peak_required_agents: u32,
    /// Largest scheduled headcount in any interval.
    pub peak_scheduled_agents: u32,
    /// On-phone agent hours needed across the day.
    pub required_agent_hours: Decimal,
    /// Scheduled agent hours including shrinkage.
    pub scheduled_agent_hours: Decimal,
    /// Scheduled agent hours priced at the centre's hourly cost, if configured.
    pub labour_cost: Option<Decimal>,
    /// Lowest modeled service level of any interval, as a percentage.
    pub lowest_service_level: f64,
}

/// The complete result of planning one day for a contact centre.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffingPlan {
    /// Unique identifier for this plan.
    pub plan_id: Uuid,
    /// When the plan was produced.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that produced the plan.
    pub engine_version: String,
    /// The code of the centre being planned.
    pub centre_code: String,
    /// The date being planned.
    pub date: NaiveDate,
    /// Shrinkage applied to every interval, as a percentage.
    pub shrinkage_percent: f64,
    /// Per-interval requirements in forecast order.
    pub intervals: Vec<IntervalStaffing>,
    /// Aggregated totals.
    pub totals: PlanTotals,
    /// Complete audit trace of planning decisions.
    pub audit_trace: AuditTrace,
}
