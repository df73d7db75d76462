//! Shrinkage calculation functionality.
//!
//! Shrinkage is the share of a paid shift an agent spends off the phones.
//! This module turns shrinkage factors into a percentage and inflates an
//! on-phone requirement into a scheduled headcount.

use crate::error::{EngineError, EngineResult};
use crate::models::ShrinkageFactors;

/// Length of the reference shift shrinkage is measured against, in minutes.
pub const REFERENCE_SHIFT_MINUTES: f64 = 480.0;

/// Returns the shrinkage percentage for a set of factors.
///
/// The result is not clamped: factors exceeding a full shift produce a
/// percentage above 100, which [`adjust_for_shrinkage`] rejects.
///
/// # Examples
///
/// ```
/// use staffing_engine::calculation::shrinkage_percent;
/// use staffing_engine::models::ShrinkageFactors;
///
/// let factors = ShrinkageFactors {
///     breaks: 30.0,
///     lunch: 30.0,
///     training: 60.0,
///     meetings: 30.0,
///     other: 0.0,
/// };
/// assert_eq!(shrinkage_percent(&factors), 31.25);
/// ```
pub fn shrinkage_percent(factors: &ShrinkageFactors) -> f64 {
    factors.total_minutes() / REFERENCE_SHIFT_MINUTES * 100.0
}

/// Inflates a required headcount to cover shrinkage.
///
/// Computes `ceil(required_agents / (1 - shrinkage_percent / 100))`.
///
/// # Errors
///
/// Returns [`EngineError::InvalidShrinkage`] when the shrinkage is 100% or
/// more (no productive time remains), negative, or not a number.
///
/// # Examples
///
/// ```
/// use staffing_engine::calculation::adjust_for_shrinkage;
///
/// assert_eq!(adjust_for_shrinkage(18, 31.25).unwrap(), 27);
/// assert_eq!(adjust_for_shrinkage(18, 0.0).unwrap(), 18);
/// assert!(adjust_for_shrinkage(18, 100.0).is_err());
/// assert!(adjust_for_shrinkage(18, -50.0).is_err());
/// ```
pub fn adjust_for_shrinkage(required_agents: u32, shrinkage_percent: f64) -> EngineResult<u32> {
    if !(0.0..100.0).contains(&shrinkage_percent) {
        return Err(EngineError::InvalidShrinkage {
            percent: shrinkage_percent,
        });
    }

    let productive_fraction = 1.0 - shrinkage_percent / 100.0;
    let scheduled = (f64::from(required_agents) / productive_fraction).ceil();

    if scheduled > f64::from(u32::MAX) {
        return Err(EngineError::CalculationError {
            message: format!(
                "{} agents at {}% shrinkage exceeds the representable headcount",
                required_agents, shrinkage_percent
            ),
        });
    }

    Ok(scheduled as u32)
}
