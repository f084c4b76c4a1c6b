//! Analysis result returned to callers.

use serde::Serialize;

use crate::domain::foundation::LearningStyle;

use super::closed_scorer::ClosedScores;
use super::outcome::OpenTextSignal;
use super::resolver::StylePercentages;
use super::score_vector::ScoreVector;

/// How the final scores were assembled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub closed: ClosedScores,
    pub open_text: OpenTextSignal,
    /// Points added for the open-text signal; 0 when indeterminate.
    pub open_text_weight: u32,
}

/// Final, immutable verdict of one analysis.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    dominant_style: LearningStyle,
    percentages: StylePercentages,
    raw_scores: ScoreVector,
    #[serde(skip_serializing_if = "Option::is_none")]
    breakdown: Option<ScoreBreakdown>,
}

impl AnalysisResult {
    pub(crate) fn new(
        dominant_style: LearningStyle,
        percentages: StylePercentages,
        raw_scores: ScoreVector,
    ) -> Self {
        Self {
            dominant_style,
            percentages,
            raw_scores,
            breakdown: None,
        }
    }

    /// Attaches the score breakdown.
    pub fn with_breakdown(mut self, breakdown: ScoreBreakdown) -> Self {
        self.breakdown = Some(breakdown);
        self
    }

    pub fn dominant_style(&self) -> LearningStyle {
        self.dominant_style
    }

    pub fn percentages(&self) -> &StylePercentages {
        &self.percentages
    }

    pub fn raw_scores(&self) -> &ScoreVector {
        &self.raw_scores
    }

    pub fn breakdown(&self) -> Option<&ScoreBreakdown> {
        self.breakdown.as_ref()
    }
}
