//! Tunable parameters of one analysis run.

use super::answers::DEFAULT_FREE_TEXT_KEY;
use super::fusion::FusionPolicy;
use super::keyword_scorer::KeywordScorer;
use super::resolver::TieBreakOrder;

/// Everything the pipeline needs besides the lexicon and the classifier.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisPolicy {
    /// Answer key holding the free-text description.
    pub free_text_key: String,
    pub keyword_scorer: KeywordScorer,
    pub fusion: FusionPolicy,
    pub tie_break: TieBreakOrder,
}

impl Default for AnalysisPolicy {
    fn default() -> Self {
        Self {
            free_text_key: DEFAULT_FREE_TEXT_KEY.to_string(),
            keyword_scorer: KeywordScorer::default(),
            fusion: FusionPolicy::default(),
            tie_break: TieBreakOrder::default(),
        }
    }
}

impl AnalysisPolicy {
    pub fn with_free_text_key(mut self, key: impl Into<String>) -> Self {
        self.free_text_key = key.into();
        self
    }

    pub fn with_keyword_scorer(mut self, scorer: KeywordScorer) -> Self {
        self.keyword_scorer = scorer;
        self
    }

    pub fn with_fusion(mut self, fusion: FusionPolicy) -> Self {
        self.fusion = fusion;
        self
    }

    pub fn with_tie_break(mut self, tie_break: TieBreakOrder) -> Self {
        self.tie_break = tie_break;
        self
    }
}
