//! Keyword lexicon - per-style keyword fragments and negation cues.
//!
//! A lexicon is data, not logic: it is loaded from YAML (the Polish lexicon
//! is bundled) and validated once at construction. All fragments are stored
//! normalized, so matching is a plain substring test on normalized tokens.
//!
//! # Invariants
//!
//! - Every scoring style has at least one keyword.
//! - Fragments are non-empty and letters-only after normalization (tokens
//!   never contain anything else, so other fragments could never match).
//! - Keyword sets are disjoint from the negation set.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use thiserror::Error;

use crate::domain::foundation::Style;

use super::normalizer::normalize;

const BUNDLED_POLISH: &str = include_str!("../../../lexicons/pl.yaml");

static POLISH: Lazy<KeywordLexicon> = Lazy::new(|| {
    KeywordLexicon::from_yaml_str(BUNDLED_POLISH).expect("bundled Polish lexicon must be valid")
});

/// Errors raised while building or loading a lexicon.
#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("lexicon version cannot be empty")]
    EmptyVersion,

    #[error("no keywords defined for {style}")]
    MissingKeywords { style: Style },

    #[error("invalid fragment '{fragment}' in {list}: {reason}")]
    InvalidFragment {
        list: String,
        fragment: String,
        reason: &'static str,
    },

    #[error("'{fragment}' is both a {style} keyword and a negation cue")]
    NegationOverlap { style: Style, fragment: String },

    #[error("failed to parse lexicon: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("failed to read lexicon file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// A keyword that also matches every token another style's keyword matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordOverlap<'a> {
    pub style: Style,
    pub keyword: &'a str,
    pub inside_style: Style,
    pub inside_keyword: &'a str,
}

/// English cue phrase appended for a style when any trigger root appears.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ClassifierHint {
    pub triggers: Vec<String>,
    pub phrase: String,
}

/// Validated, normalized keyword lexicon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordLexicon {
    version: String,
    keywords: [BTreeSet<String>; 3],
    negations: BTreeSet<String>,
    classifier_hints: BTreeMap<Style, ClassifierHint>,
}

impl KeywordLexicon {
    /// Starts building a lexicon with the given version tag.
    pub fn builder(version: impl Into<String>) -> KeywordLexiconBuilder {
        KeywordLexiconBuilder {
            version: version.into(),
            keywords: BTreeMap::new(),
            negations: Vec::new(),
            classifier_hints: BTreeMap::new(),
        }
    }

    /// The bundled Polish lexicon.
    pub fn polish() -> &'static KeywordLexicon {
        &POLISH
    }

    /// Parses and validates a YAML lexicon document.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, LexiconError> {
        let document: LexiconDocument = serde_yaml::from_str(yaml)?;
        let mut builder = KeywordLexicon::builder(document.version).negations(document.negations);
        for (style, fragments) in document.keywords {
            builder = builder.keywords(style, fragments);
        }
        for (style, hint) in document.classifier_hints {
            builder = builder.classifier_hint(style, hint.triggers, hint.phrase);
        }
        builder.build()
    }

    /// Reads and validates a YAML lexicon file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LexiconError> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path).map_err(|source| LexiconError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml_str(&yaml)
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Keyword fragments for a style.
    pub fn keywords(&self, style: Style) -> &BTreeSet<String> {
        &self.keywords[style.index()]
    }

    pub fn negations(&self) -> &BTreeSet<String> {
        &self.negations
    }

    pub fn classifier_hints(&self) -> &BTreeMap<Style, ClassifierHint> {
        &self.classifier_hints
    }

    /// True if the normalized token contains any negation cue.
    pub fn contains_negation(&self, token: &str) -> bool {
        self.negations.iter().any(|cue| token.contains(cue.as_str()))
    }

    /// True if the normalized token contains any keyword of `style`.
    pub fn matches(&self, style: Style, token: &str) -> bool {
        self.keywords(style)
            .iter()
            .any(|keyword| token.contains(keyword.as_str()))
    }

    /// Keywords that contain a negation cue and therefore can never match.
    pub fn shadowed_keywords(&self) -> Vec<(Style, &str)> {
        Style::ALL
            .into_iter()
            .flat_map(|style| {
                self.keywords(style)
                    .iter()
                    .filter(|keyword| self.contains_negation(keyword))
                    .map(move |keyword| (style, keyword.as_str()))
            })
            .collect()
    }

    /// Keywords contained in another style's keyword. Any token matching
    /// the longer keyword votes for both styles.
    pub fn overlapping_keywords(&self) -> Vec<KeywordOverlap<'_>> {
        let mut overlaps = Vec::new();
        for style in Style::ALL {
            for keyword in self.keywords(style) {
                for inside_style in Style::ALL.into_iter().filter(|other| *other != style) {
                    overlaps.extend(
                        self.keywords(inside_style)
                            .iter()
                            .filter(|other| other.contains(keyword.as_str()))
                            .map(|other| KeywordOverlap {
                                style,
                                keyword,
                                inside_style,
                                inside_keyword: other,
                            }),
                    );
                }
            }
        }
        overlaps
    }
}

/// Builder for [`KeywordLexicon`].
#[derive(Debug, Clone)]
pub struct KeywordLexiconBuilder {
    version: String,
    keywords: BTreeMap<Style, Vec<String>>,
    negations: Vec<String>,
    classifier_hints: BTreeMap<Style, ClassifierHint>,
}

impl KeywordLexiconBuilder {
    /// Adds keyword fragments for a style.
    pub fn keywords<I, S>(mut self, style: Style, fragments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords
            .entry(style)
            .or_default()
            .extend(fragments.into_iter().map(Into::into));
        self
    }

    /// Adds negation cue fragments.
    pub fn negations<I, S>(mut self, fragments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.negations.extend(fragments.into_iter().map(Into::into));
        self
    }

    /// Sets the classifier hint for a style.
    pub fn classifier_hint<I, S>(
        mut self,
        style: Style,
        triggers: I,
        phrase: impl Into<String>,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.classifier_hints.insert(
            style,
            ClassifierHint {
                triggers: triggers.into_iter().map(Into::into).collect(),
                phrase: phrase.into(),
            },
        );
        self
    }

    /// Validates and normalizes every fragment.
    pub fn build(self) -> Result<KeywordLexicon, LexiconError> {
        let version = self.version.trim().to_string();
        if version.is_empty() {
            return Err(LexiconError::EmptyVersion);
        }

        let negations = normalize_fragments("negations", &self.negations)?;

        let mut keywords: [BTreeSet<String>; 3] = Default::default();
        for style in Style::ALL {
            let fragments = self.keywords.get(&style).map(Vec::as_slice).unwrap_or(&[]);
            let normalized = normalize_fragments(style.as_str(), fragments)?;
            if normalized.is_empty() {
                return Err(LexiconError::MissingKeywords { style });
            }
            if let Some(fragment) = normalized.intersection(&negations).next() {
                return Err(LexiconError::NegationOverlap {
                    style,
                    fragment: fragment.clone(),
                });
            }
            keywords[style.index()] = normalized;
        }

        let mut classifier_hints = BTreeMap::new();
        for (style, hint) in self.classifier_hints {
            let list = format!("{} hints", style);
            let triggers = normalize_fragments(&list, &hint.triggers)?;
            let phrase = hint.phrase.trim().to_string();
            if phrase.is_empty() {
                return Err(LexiconError::InvalidFragment {
                    list,
                    fragment: hint.phrase,
                    reason: "hint phrase is empty",
                });
            }
            classifier_hints.insert(
                style,
                ClassifierHint {
                    triggers: triggers.into_iter().collect(),
                    phrase,
                },
            );
        }

        Ok(KeywordLexicon {
            version,
            keywords,
            negations,
            classifier_hints,
        })
    }
}

fn normalize_fragments(list: &str, fragments: &[String]) -> Result<BTreeSet<String>, LexiconError> {
    fragments
        .iter()
        .map(|raw| {
            let fragment = normalize(raw.trim());
            if fragment.is_empty() {
                return Err(LexiconError::InvalidFragment {
                    list: list.to_string(),
                    fragment: raw.clone(),
                    reason: "empty after normalization",
                });
            }
            if !fragment.chars().all(char::is_alphabetic) {
                return Err(LexiconError::InvalidFragment {
                    list: list.to_string(),
                    fragment: raw.clone(),
                    reason: "fragments may only contain letters",
                });
            }
            Ok(fragment)
        })
        .collect()
}

#[derive(Debug, Deserialize)]
struct LexiconDocument {
    version: String,
    #[serde(default)]
    negations: Vec<String>,
    keywords: BTreeMap<Style, Vec<String>>,
    #[serde(default)]
    classifier_hints: BTreeMap<Style, ClassifierHint>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn small_lexicon() -> KeywordLexicon {
        KeywordLexicon::builder("test-1")
            .keywords(Style::Visual, ["obraz", "Wykres"])
            .keywords(Style::Auditory, ["słuch"])
            .keywords(Style::Kinesthetic, ["ruch"])
            .negations(["nie", "bez"])
            .build()
            .unwrap()
    }

    #[test]
    fn bundled_polish_lexicon_loads() {
        let lexicon = KeywordLexicon::polish();
        assert_eq!(lexicon.version(), "pl-2024.3");
        assert!(lexicon.keywords(Style::Visual).contains("obraz"));
        assert!(lexicon.keywords(Style::Auditory).contains("muzyk"));
        assert!(lexicon.keywords(Style::Kinesthetic).contains("ruch"));
        assert!(lexicon.negations().contains("nie"));
        assert_eq!(lexicon.classifier_hints().len(), 3);
    }

    #[test]
    fn bundled_polish_lexicon_has_no_shadowed_keywords() {
        assert!(KeywordLexicon::polish().shadowed_keywords().is_empty());
    }

    #[test]
    fn bundled_polish_lexicon_has_no_cross_style_overlaps() {
        assert!(KeywordLexicon::polish().overlapping_keywords().is_empty());
    }

    #[test]
    fn cross_style_overlaps_are_reported() {
        let lexicon = KeywordLexicon::builder("overlap")
            .keywords(Style::Visual, ["obraz"])
            .keywords(Style::Auditory, ["sluch", "uch"])
            .keywords(Style::Kinesthetic, ["ruch"])
            .build()
            .unwrap();

        assert_eq!(
            lexicon.overlapping_keywords(),
            vec![KeywordOverlap {
                style: Style::Auditory,
                keyword: "uch",
                inside_style: Style::Kinesthetic,
                inside_keyword: "ruch",
            }]
        );
    }

    #[test]
    fn builder_normalizes_fragments() {
        let lexicon = small_lexicon();
        assert!(lexicon.keywords(Style::Visual).contains("wykres"));
        assert!(lexicon.keywords(Style::Auditory).contains("sluch"));
    }

    #[test]
    fn builder_rejects_keyword_equal_to_negation() {
        let result = KeywordLexicon::builder("bad")
            .keywords(Style::Visual, ["obraz", "nie"])
            .keywords(Style::Auditory, ["sluch"])
            .keywords(Style::Kinesthetic, ["ruch"])
            .negations(["nie"])
            .build();

        match result {
            Err(LexiconError::NegationOverlap { style, fragment }) => {
                assert_eq!(style, Style::Visual);
                assert_eq!(fragment, "nie");
            }
            other => panic!("Expected NegationOverlap, got {:?}", other),
        }
    }

    #[test]
    fn builder_rejects_missing_style() {
        let result = KeywordLexicon::builder("bad")
            .keywords(Style::Visual, ["obraz"])
            .keywords(Style::Auditory, ["sluch"])
            .build();
        assert!(matches!(
            result,
            Err(LexiconError::MissingKeywords { style: Style::Kinesthetic })
        ));
    }

    #[test]
    fn builder_rejects_non_letter_fragments() {
        let result = KeywordLexicon::builder("bad")
            .keywords(Style::Visual, ["obraz"])
            .keywords(Style::Auditory, ["mp3"])
            .keywords(Style::Kinesthetic, ["ruch"])
            .build();
        assert!(matches!(result, Err(LexiconError::InvalidFragment { .. })));
    }

    #[test]
    fn builder_rejects_empty_version() {
        let result = KeywordLexicon::builder("  ")
            .keywords(Style::Visual, ["obraz"])
            .build();
        assert!(matches!(result, Err(LexiconError::EmptyVersion)));
    }

    #[test]
    fn matching_is_substring_based() {
        let lexicon = small_lexicon();
        assert!(lexicon.matches(Style::Visual, "obrazow"));
        assert!(lexicon.matches(Style::Kinesthetic, "poruchu"));
        assert!(!lexicon.matches(Style::Auditory, "obrazow"));
        assert!(lexicon.contains_negation("niestety"));
        assert!(!lexicon.contains_negation("obraz"));
    }

    #[test]
    fn shadowed_keywords_are_reported() {
        let lexicon = KeywordLexicon::builder("shadow")
            .keywords(Style::Visual, ["malow", "obraz"])
            .keywords(Style::Auditory, ["sluch"])
            .keywords(Style::Kinesthetic, ["taniec"])
            .negations(["malo", "ani"])
            .build()
            .unwrap();

        let shadowed = lexicon.shadowed_keywords();
        assert_eq!(
            shadowed,
            vec![(Style::Visual, "malow"), (Style::Kinesthetic, "taniec")]
        );
    }

    #[test]
    fn yaml_document_parses() {
        let yaml = r#"
version: "en-0.1"
negations: [not, never]
keywords:
  VISUAL: [picture, chart]
  AUDITORY: [listen]
  KINESTHETIC: [move]
classifier_hints:
  VISUAL:
    triggers: [picture]
    phrase: "images."
"#;
        let lexicon = KeywordLexicon::from_yaml_str(yaml).unwrap();
        assert_eq!(lexicon.version(), "en-0.1");
        assert_eq!(lexicon.keywords(Style::Visual).len(), 2);
        assert_eq!(
            lexicon.classifier_hints().get(&Style::Visual).unwrap().phrase,
            "images."
        );
    }

    #[test]
    fn yaml_with_unknown_style_fails() {
        let yaml = r#"
version: "x"
keywords:
  TACTILE: [touch]
"#;
        assert!(matches!(
            KeywordLexicon::from_yaml_str(yaml),
            Err(LexiconError::Parse(_))
        ));
    }

    #[test]
    fn from_path_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "version: file-1\nkeywords:\n  VISUAL: [obraz]\n  AUDITORY: [sluch]\n  KINESTHETIC: [ruch]\n"
        )
        .unwrap();

        let lexicon = KeywordLexicon::from_path(file.path()).unwrap();
        assert_eq!(lexicon.version(), "file-1");
        assert!(lexicon.negations().is_empty());
    }

    #[test]
    fn from_path_reports_missing_file() {
        let result = KeywordLexicon::from_path("/definitely/not/here.yaml");
        assert!(matches!(result, Err(LexiconError::Io { .. })));
    }
}
