//! Fusion engine - folds the open-text signal into the closed scores.
//!
//! Free text is worth several closed answers, scaled by how many closed
//! answers there are and clamped so it can tip a close survey but never
//! drown a long one.

use serde::Serialize;

use super::outcome::ClassificationOutcome;
use super::score_vector::ScoreVector;

/// Default open-text weight per closed answer.
pub const DEFAULT_OPEN_TEXT_FACTOR: f64 = 0.4;

/// Default lower bound of the open-text weight.
pub const DEFAULT_MIN_OPEN_WEIGHT: u32 = 4;

/// Default upper bound of the open-text weight.
pub const DEFAULT_MAX_OPEN_WEIGHT: u32 = 8;

/// Weighting of the open-text signal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FusionPolicy {
    pub open_text_factor: f64,
    pub min_weight: u32,
    pub max_weight: u32,
}

impl Default for FusionPolicy {
    fn default() -> Self {
        Self {
            open_text_factor: DEFAULT_OPEN_TEXT_FACTOR,
            min_weight: DEFAULT_MIN_OPEN_WEIGHT,
            max_weight: DEFAULT_MAX_OPEN_WEIGHT,
        }
    }
}

impl FusionPolicy {
    /// `clamp(round(closed_count * factor), min_weight, max_weight)`.
    ///
    /// Rounds half away from zero. Assumes `min_weight <= max_weight`
    /// (checked by configuration validation); if violated, `max_weight` wins.
    pub fn weight_for(&self, closed_count: u32) -> u32 {
        let scaled = (f64::from(closed_count) * self.open_text_factor).round();
        // `as` saturates for out-of-range floats and maps NaN to 0.
        let scaled = scaled as u32;
        scaled.max(self.min_weight).min(self.max_weight)
    }

    /// Weight the outcome contributes: 0 when indeterminate.
    pub fn applied_weight(&self, closed_count: u32, outcome: ClassificationOutcome) -> u32 {
        match outcome {
            ClassificationOutcome::Indeterminate => 0,
            ClassificationOutcome::Detected(_) => self.weight_for(closed_count),
        }
    }

    /// Adds the weighted open-text vote to the closed scores.
    pub fn fuse(
        &self,
        closed_scores: ScoreVector,
        closed_count: u32,
        outcome: ClassificationOutcome,
    ) -> ScoreVector {
        match outcome {
            ClassificationOutcome::Indeterminate => closed_scores,
            ClassificationOutcome::Detected(style) => {
                closed_scores.with(style, self.weight_for(closed_count))
            }
        }
    }
}
