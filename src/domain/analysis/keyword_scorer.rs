//! Open-text keyword scorer with negation suppression.
//!
//! Substring matching on normalized tokens stands in for stemming: keyword
//! fragments are word roots, so declined and conjugated forms still match.
//! A keyword preceded by a negation cue within a small window is not
//! counted ("nie lubię obrazów" must not vote for VISUAL).

use serde::Serialize;
use tracing::debug;

use crate::domain::foundation::Style;

use super::lexicon::KeywordLexicon;
use super::normalizer::{normalize, tokenize};
use super::outcome::ClassificationOutcome;
use super::score_vector::ScoreVector;

/// Minimum normalized length of a free-text answer worth analysing.
pub const DEFAULT_MIN_TEXT_LENGTH: usize = 5;

/// Number of preceding tokens inspected for a negation cue.
pub const DEFAULT_NEGATION_WINDOW: usize = 3;

/// Per-style keyword hit counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct KeywordTally {
    pub counts: ScoreVector,
    /// Keyword hits dropped because of a nearby negation.
    pub suppressed: u32,
}

impl KeywordTally {
    /// The style with the strictly highest count, if any.
    pub fn winner(&self) -> ClassificationOutcome {
        let max = self.counts.max();
        if max == 0 {
            return ClassificationOutcome::Indeterminate;
        }
        let mut leaders = self.counts.iter().filter(|(_, count)| *count == max);
        match (leaders.next(), leaders.next()) {
            (Some((style, _)), None) => ClassificationOutcome::Detected(style),
            _ => ClassificationOutcome::Indeterminate,
        }
    }
}

/// Negation-aware keyword scorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordScorer {
    pub min_text_length: usize,
    pub negation_window: usize,
}

impl Default for KeywordScorer {
    fn default() -> Self {
        Self {
            min_text_length: DEFAULT_MIN_TEXT_LENGTH,
            negation_window: DEFAULT_NEGATION_WINDOW,
        }
    }
}

impl KeywordScorer {
    /// True if the text is long enough to carry a signal.
    pub fn is_substantive(&self, text: &str) -> bool {
        normalize(text).trim().chars().count() >= self.min_text_length
    }

    /// Classifies free text by keyword majority.
    pub fn score(&self, text: &str, lexicon: &KeywordLexicon) -> ClassificationOutcome {
        if !self.is_substantive(text) {
            return ClassificationOutcome::Indeterminate;
        }
        let tally = self.tally(text, lexicon);
        debug!(
            visual = tally.counts.get(Style::Visual),
            auditory = tally.counts.get(Style::Auditory),
            kinesthetic = tally.counts.get(Style::Kinesthetic),
            suppressed = tally.suppressed,
            "Keyword tally"
        );
        tally.winner()
    }

    /// Counts keyword hits per style without applying the length gate.
    pub fn tally(&self, text: &str, lexicon: &KeywordLexicon) -> KeywordTally {
        let normalized = normalize(text);
        let tokens: Vec<&str> = tokenize(&normalized).collect();
        let mut tally = KeywordTally::default();

        for (i, token) in tokens.iter().enumerate() {
            // A token carrying a cue is never a positive hit ("nienawidze"
            // contains "widz").
            if lexicon.contains_negation(token) {
                continue;
            }

            let window_start = i.saturating_sub(self.negation_window);
            let negated = tokens[window_start..i]
                .iter()
                .any(|previous| lexicon.contains_negation(previous));

            for style in Style::ALL {
                if !lexicon.matches(style, token) {
                    continue;
                }
                if negated {
                    debug!(token = %token, style = %style, "Keyword suppressed by negation");
                    tally.suppressed += 1;
                } else {
                    tally.counts.add(style, 1);
                }
            }
        }

        tally
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scorer() -> KeywordScorer {
        KeywordScorer::default()
    }

    fn polish() -> &'static KeywordLexicon {
        KeywordLexicon::polish()
    }

    #[test]
    fn short_text_is_indeterminate() {
        assert_eq!(scorer().score("rys", polish()), ClassificationOutcome::Indeterminate);
        assert_eq!(scorer().score("   ", polish()), ClassificationOutcome::Indeterminate);
        assert_eq!(scorer().score("", polish()), ClassificationOutcome::Indeterminate);
    }

    #[test]
    fn auditory_text_is_detected() {
        let outcome = scorer().score("uwielbiam słuchać muzyki i rozmawiać", polish());
        assert_eq!(outcome, ClassificationOutcome::Detected(Style::Auditory));
    }

    #[test]
    fn negated_keyword_is_suppressed() {
        let tally = scorer().tally("nie lubię obrazów", polish());
        assert_eq!(tally.counts.get(Style::Visual), 0);
        assert_eq!(tally.suppressed, 1);
        assert_eq!(
            scorer().score("nie lubię obrazów", polish()),
            ClassificationOutcome::Indeterminate
        );
    }

    #[test]
    fn same_keyword_without_negation_counts() {
        let tally = scorer().tally("bardzo lubię obrazy", polish());
        assert_eq!(tally.counts.get(Style::Visual), 1);
        assert_eq!(
            scorer().score("bardzo lubię obrazy", polish()),
            ClassificationOutcome::Detected(Style::Visual)
        );
    }

    #[test]
    fn negation_at_window_edge_suppresses() {
        // "nie" is three tokens before "obrazy".
        let tally = scorer().tally("nie wiem czy obrazy", polish());
        assert_eq!(tally.counts.get(Style::Visual), 0);
        assert_eq!(tally.suppressed, 1);
    }

    #[test]
    fn negation_just_outside_window_does_not_suppress() {
        // "nie" is four tokens before "obrazy".
        let tally = scorer().tally("nie wiem czy tak obrazy", polish());
        assert_eq!(tally.counts.get(Style::Visual), 1);
        assert_eq!(tally.suppressed, 0);
    }

    #[test]
    fn negation_far_before_keyword_does_not_suppress() {
        // "nie" is five tokens before "obrazy".
        let tally = scorer().tally("nie wiem czy bardzo lubie obrazy", polish());
        assert_eq!(tally.counts.get(Style::Visual), 1);
        assert_eq!(tally.suppressed, 0);
    }

    #[test]
    fn window_size_is_respected() {
        let scorer = KeywordScorer {
            negation_window: 4,
            ..KeywordScorer::default()
        };
        let tally = scorer.tally("nie wiem czy tak obrazy", polish());
        assert_eq!(tally.counts.get(Style::Visual), 0);
        assert_eq!(tally.suppressed, 1);
    }

    #[test]
    fn movement_roots_vote_only_kinesthetic() {
        let tally = scorer().tally("lubię ruch", polish());
        assert_eq!(tally.counts.get(Style::Auditory), 0);
        assert_eq!(tally.counts.get(Style::Kinesthetic), 1);
        assert_eq!(
            scorer().score("lubię ruch", polish()),
            ClassificationOutcome::Detected(Style::Kinesthetic)
        );
    }

    #[test]
    fn negation_token_itself_is_not_a_keyword() {
        // "nienawidze" contains the visual root "widz".
        let tally = scorer().tally("nienawidze czekac", polish());
        assert_eq!(tally.counts.get(Style::Visual), 0);
        assert_eq!(tally.suppressed, 0);
    }

    #[test]
    fn tie_is_indeterminate() {
        let lexicon = KeywordLexicon::builder("t")
            .keywords(Style::Visual, ["obraz"])
            .keywords(Style::Auditory, ["sluch"])
            .keywords(Style::Kinesthetic, ["ruch"])
            .build()
            .unwrap();
        assert_eq!(
            scorer().score("obraz i sluchanie", &lexicon),
            ClassificationOutcome::Indeterminate
        );
    }

    #[test]
    fn no_keywords_is_indeterminate() {
        assert_eq!(
            scorer().score("lubie pierogi z kapusta", polish()),
            ClassificationOutcome::Indeterminate
        );
    }

    #[test]
    fn window_of_zero_disables_suppression() {
        let scorer = KeywordScorer {
            negation_window: 0,
            ..KeywordScorer::default()
        };
        assert_eq!(
            scorer.score("nie lubię obrazów", polish()),
            ClassificationOutcome::Detected(Style::Visual)
        );
    }

    #[test]
    fn winner_requires_strict_maximum() {
        let tally = KeywordTally {
            counts: ScoreVector::new().with(Style::Visual, 2).with(Style::Kinesthetic, 2),
            suppressed: 0,
        };
        assert_eq!(tally.winner(), ClassificationOutcome::Indeterminate);

        let tally = KeywordTally {
            counts: ScoreVector::new().with(Style::Visual, 2).with(Style::Kinesthetic, 1),
            suppressed: 0,
        };
        assert_eq!(tally.winner(), ClassificationOutcome::Detected(Style::Visual));
    }
}
