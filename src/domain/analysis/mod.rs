//! Analysis Module - Pure scoring pipeline for learning-style inference.
//!
//! Everything here is synchronous and free of I/O apart from loading a
//! lexicon file. The external classifier lives behind a port and is
//! orchestrated by the application layer.
//!
//! # Components
//!
//! - `normalize` / `tokenize` - Diacritic folding and word splitting
//! - `KeywordLexicon` - Versioned keyword roots and negation cues
//! - `score_closed` - Tally of categorical answers
//! - `KeywordScorer` - Negation-aware keyword majority on free text
//! - `FusionPolicy` - Weighted vote of the open-text signal
//! - `resolve` - Dominant style, tie-break and percentages

mod answers;
mod closed_scorer;
mod fusion;
mod keyword_scorer;
mod lexicon;
mod normalizer;
mod outcome;
mod policy;
mod resolver;
mod result;
mod score_vector;

pub use answers::{SurveyAnswers, DEFAULT_FREE_TEXT_KEY};
pub use closed_scorer::{score_closed, ClosedScores, POINTS_PER_CLOSED_ANSWER};
pub use fusion::{
    FusionPolicy, DEFAULT_MAX_OPEN_WEIGHT, DEFAULT_MIN_OPEN_WEIGHT, DEFAULT_OPEN_TEXT_FACTOR,
};
pub use keyword_scorer::{
    KeywordScorer, KeywordTally, DEFAULT_MIN_TEXT_LENGTH, DEFAULT_NEGATION_WINDOW,
};
pub use lexicon::{
    ClassifierHint, KeywordLexicon, KeywordLexiconBuilder, KeywordOverlap, LexiconError,
};
pub use normalizer::{normalize, tokenize};
pub use outcome::{ClassificationOutcome, OpenTextSignal, OpenTextSource};
pub use policy::AnalysisPolicy;
pub use resolver::{dominant_style, resolve, StylePercentages, TieBreakOrder};
pub use result::{AnalysisResult, ScoreBreakdown};
pub use score_vector::ScoreVector;
