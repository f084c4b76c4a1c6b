//! Closed-question scorer - tallies categorical survey answers.

use serde::Serialize;

use crate::domain::foundation::Style;

use super::answers::SurveyAnswers;
use super::score_vector::ScoreVector;

/// Points awarded per parsed closed answer.
pub const POINTS_PER_CLOSED_ANSWER: u32 = 1;

/// Tally of the closed questions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClosedScores {
    pub scores: ScoreVector,
    /// Number of answers that parsed to a style. Sizes the open-text weight;
    /// it is not a style score.
    pub closed_count: u32,
}

/// Scores every answer except the free-text one.
///
/// Unparseable, `MIXED` and blank answers are skipped silently: closed
/// questions are optional and input is uncurated.
pub fn score_closed(answers: &SurveyAnswers, free_text_key: &str) -> ClosedScores {
    answers
        .iter()
        .filter(|(question, _)| *question != free_text_key)
        .filter_map(|(_, answer)| answer.and_then(Style::parse_answer))
        .fold(ClosedScores::default(), |mut tally, style| {
            tally.scores.add(style, POINTS_PER_CLOSED_ANSWER);
            tally.closed_count += 1;
            tally
        })
}
