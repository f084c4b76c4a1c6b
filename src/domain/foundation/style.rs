//! Sensory learning styles.
//!
//! `Style` is the scoring vocabulary (what survey answers and free text can
//! vote for). `LearningStyle` is the verdict vocabulary, which adds `Mixed`
//! for "no style dominates".

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// A style that can receive points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Style {
    Visual,
    Auditory,
    Kinesthetic,
}

impl Style {
    /// All scoring styles in canonical order.
    pub const ALL: [Style; 3] = [Style::Visual, Style::Auditory, Style::Kinesthetic];

    /// Returns the canonical upper-case name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Style::Visual => "VISUAL",
            Style::Auditory => "AUDITORY",
            Style::Kinesthetic => "KINESTHETIC",
        }
    }

    /// Position in `Style::ALL`, used for fixed-size per-style storage.
    pub(crate) const fn index(self) -> usize {
        match self {
            Style::Visual => 0,
            Style::Auditory => 1,
            Style::Kinesthetic => 2,
        }
    }

    /// Parses a closed-question answer.
    ///
    /// Case-insensitive, surrounding whitespace ignored. `"mixed"` and any
    /// other value yield `None`: only the three scoring styles are legal
    /// closed answers.
    pub fn parse_answer(value: &str) -> Option<Style> {
        let value = value.trim();
        Style::ALL
            .into_iter()
            .find(|style| style.as_str().eq_ignore_ascii_case(value))
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Style {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Style::parse_answer(s).ok_or_else(|| ValidationError::unknown_style(s.trim()))
    }
}

/// Final verdict of an analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LearningStyle {
    Visual,
    Auditory,
    Kinesthetic,
    /// No style dominates, or there was no signal at all.
    Mixed,
}

impl LearningStyle {
    /// Returns the canonical upper-case name.
    pub fn as_str(&self) -> &'static str {
        match self {
            LearningStyle::Visual => "VISUAL",
            LearningStyle::Auditory => "AUDITORY",
            LearningStyle::Kinesthetic => "KINESTHETIC",
            LearningStyle::Mixed => "MIXED",
        }
    }

    /// Returns the scoring style, or `None` for `Mixed`.
    pub fn as_scoring(&self) -> Option<Style> {
        match self {
            LearningStyle::Visual => Some(Style::Visual),
            LearningStyle::Auditory => Some(Style::Auditory),
            LearningStyle::Kinesthetic => Some(Style::Kinesthetic),
            LearningStyle::Mixed => None,
        }
    }
}

impl From<Style> for LearningStyle {
    fn from(style: Style) -> Self {
        match style {
            Style::Visual => LearningStyle::Visual,
            Style::Auditory => LearningStyle::Auditory,
            Style::Kinesthetic => LearningStyle::Kinesthetic,
        }
    }
}

impl fmt::Display for LearningStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_answer_is_case_insensitive() {
        assert_eq!(Style::parse_answer("visual"), Some(Style::Visual));
        assert_eq!(Style::parse_answer("AUDITORY"), Some(Style::Auditory));
        assert_eq!(Style::parse_answer("  Kinesthetic "), Some(Style::Kinesthetic));
    }

    #[test]
    fn parse_answer_rejects_mixed_and_garbage() {
        assert_eq!(Style::parse_answer("mixed"), None);
        assert_eq!(Style::parse_answer(""), None);
        assert_eq!(Style::parse_answer("visually"), None);
    }

    #[test]
    fn from_str_reports_unknown_style() {
        let err = "tactile".parse::<Style>().unwrap_err();
        assert!(matches!(err, ValidationError::UnknownStyle { .. }));
    }

    #[test]
    fn learning_style_converts_from_style() {
        for style in Style::ALL {
            let verdict = LearningStyle::from(style);
            assert_eq!(verdict.as_str(), style.as_str());
            assert_eq!(verdict.as_scoring(), Some(style));
        }
        assert_eq!(LearningStyle::Mixed.as_scoring(), None);
    }

    #[test]
    fn styles_serialize_screaming_case() {
        assert_eq!(serde_json::to_string(&Style::Kinesthetic).unwrap(), "\"KINESTHETIC\"");
        assert_eq!(serde_json::to_string(&LearningStyle::Mixed).unwrap(), "\"MIXED\"");
    }
}
