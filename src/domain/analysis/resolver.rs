//! Dominant style resolution and percentage reporting.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use crate::domain::foundation::{LearningStyle, Style, ValidationError};

use super::result::AnalysisResult;
use super::score_vector::ScoreVector;

/// Fixed priority used when the top scores are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TieBreakOrder([Style; 3]);

impl TieBreakOrder {
    /// Creates an order; every scoring style must appear exactly once.
    pub fn new(order: [Style; 3]) -> Result<Self, ValidationError> {
        for style in Style::ALL {
            if !order.contains(&style) {
                return Err(ValidationError::invalid_tie_break(format!(
                    "{} is missing",
                    style
                )));
            }
        }
        Ok(Self(order))
    }

    /// Position of a style, 0 being the highest priority.
    pub fn rank(&self, style: Style) -> usize {
        self.0
            .iter()
            .position(|s| *s == style)
            .unwrap_or(self.0.len())
    }
}

impl Default for TieBreakOrder {
    /// KINESTHETIC > VISUAL > AUDITORY.
    fn default() -> Self {
        Self([Style::Kinesthetic, Style::Visual, Style::Auditory])
    }
}

impl FromStr for TieBreakOrder {
    type Err = ValidationError;

    /// Parses a comma-separated list such as `"KINESTHETIC,VISUAL,AUDITORY"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let styles = s
            .split(',')
            .map(str::parse::<Style>)
            .collect::<Result<Vec<_>, _>>()?;
        let order: [Style; 3] = styles.try_into().map_err(|styles: Vec<Style>| {
            ValidationError::invalid_tie_break(format!("expected 3 styles, got {}", styles.len()))
        })?;
        Self::new(order)
    }
}

impl fmt::Display for TieBreakOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.0.iter().map(Style::as_str).collect();
        f.write_str(&names.join(","))
    }
}

/// Percentage share of each scoring style, one decimal place.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StylePercentages([f64; 3]);

impl StylePercentages {
    /// `round(score * 100 / total, 1)` per style; all zero when total is 0.
    pub fn from_scores(scores: &ScoreVector) -> Self {
        let total = scores.total();
        let mut shares = [0.0; 3];
        if total > 0 {
            for (style, score) in scores.iter() {
                let share = f64::from(score) * 100.0 / total as f64;
                shares[style.index()] = round_one_decimal(share);
            }
        }
        Self(shares)
    }

    pub fn get(&self, style: Style) -> f64 {
        self.0[style.index()]
    }

    pub fn sum(&self) -> f64 {
        self.0.iter().sum()
    }
}

impl Serialize for StylePercentages {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Style::ALL.len()))?;
        for style in Style::ALL {
            map.serialize_entry(style.as_str(), &self.get(style))?;
        }
        map.end()
    }
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Picks the dominant style from raw integer scores.
///
/// Zero everywhere is `Mixed`. Ties among the top scores go to the style
/// ranked first in `tie_break`. Percentages never take part in the decision.
pub fn dominant_style(scores: &ScoreVector, tie_break: &TieBreakOrder) -> LearningStyle {
    let max = scores.max();
    if max == 0 {
        return LearningStyle::Mixed;
    }

    let leaders: Vec<Style> = scores
        .iter()
        .filter(|(_, score)| *score == max)
        .map(|(style, _)| style)
        .collect();

    if leaders.len() > 1 {
        debug!(?leaders, order = %tie_break, "Breaking tie by priority order");
    }

    leaders
        .into_iter()
        .min_by_key(|style| tie_break.rank(*style))
        .map_or(LearningStyle::Mixed, LearningStyle::from)
}

/// Builds the result for a final score vector.
pub fn resolve(scores: ScoreVector, tie_break: &TieBreakOrder) -> AnalysisResult {
    AnalysisResult::new(
        dominant_style(&scores, tie_break),
        StylePercentages::from_scores(&scores),
        scores,
    )
}
