//! Shrinkage factor model.

use serde::{Deserialize, Serialize};

use crate::error::EngineResult;

use super::staffing_input::check_non_negative;

/// Minutes per shift during which an agent is paid but unavailable for calls.
///
/// Factors are measured against an eight hour reference shift.
///
/// # Example
///
/// ```
/// use staffing_engine::models::ShrinkageFactors;
///
/// let factors = ShrinkageFactors {
///     breaks: 30.0,
///     lunch: 30.0,
///     training: 60.0,
///     meetings: 30.0,
///     other: 0.0,
/// };
/// assert_eq!(factors.total_minutes(), 150.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ShrinkageFactors {
    /// Paid break minutes.
    #[serde(default)]
    pub breaks: f64,
    /// Lunch minutes.
    #[serde(default)]
    pub lunch: f64,
    /// Training and coaching minutes.
    #[serde(default)]
    pub training: f64,
    /// Team meeting minutes.
    #[serde(default)]
    pub meetings: f64,
    /// Any other off-phone minutes.
    #[serde(default)]
    pub other: f64,
}

impl ShrinkageFactors {
    /// Returns the sum of all factors in minutes.
    pub fn total_minutes(&self) -> f64 {
        self.breaks + self.lunch + self.training + self.meetings + self.other
    }

    /// Checks that every factor is a finite, non-negative minute count.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidInput`](crate::error::EngineError::InvalidInput)
    /// naming the first offending factor.
    pub fn validate(&self) -> EngineResult<()> {
        check_non_negative("breaks", self.breaks)?;
        check_non_negative("lunch", self.lunch)?;
        check_non_negative("training", self.training)?;
        check_non_negative("meetings", self.meetings)?;
        check_non_negative("other", self.other)
    }
}
