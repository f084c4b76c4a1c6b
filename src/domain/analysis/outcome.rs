//! Outcome of analysing the free-text answer.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Style;

/// Result of a single open-text signal source.
///
/// `Indeterminate` means "no usable signal" and is distinct from the final
/// `MIXED` verdict: it lets the next source, or fusion, fall through cleanly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "style", rename_all = "snake_case")]
pub enum ClassificationOutcome {
    Detected(Style),
    Indeterminate,
}

impl ClassificationOutcome {
    pub fn style(&self) -> Option<Style> {
        match self {
            ClassificationOutcome::Detected(style) => Some(*style),
            ClassificationOutcome::Indeterminate => None,
        }
    }

    pub fn is_indeterminate(&self) -> bool {
        matches!(self, ClassificationOutcome::Indeterminate)
    }
}

impl From<Option<Style>> for ClassificationOutcome {
    fn from(style: Option<Style>) -> Self {
        style.map_or(ClassificationOutcome::Indeterminate, ClassificationOutcome::Detected)
    }
}

/// Which source produced the open-text signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OpenTextSource {
    /// The external zero-shot classifier.
    Classifier,
    /// The keyword scorer.
    Keywords,
    /// No free text worth analysing, or neither source produced a signal.
    Absent,
}

/// Open-text signal together with its provenance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenTextSignal {
    pub source: OpenTextSource,
    pub outcome: ClassificationOutcome,
}

impl OpenTextSignal {
    pub fn absent() -> Self {
        Self {
            source: OpenTextSource::Absent,
            outcome: ClassificationOutcome::Indeterminate,
        }
    }

    pub fn detected(source: OpenTextSource, style: Style) -> Self {
        Self {
            source,
            outcome: ClassificationOutcome::Detected(style),
        }
    }
}
