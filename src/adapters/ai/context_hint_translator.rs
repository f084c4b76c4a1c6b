//! Context Hint Translator - Appends English cue phrases to Polish text.
//!
//! English NLI models miss Polish idioms ("mam przed oczami"). When a
//! token contains a trigger root of a style, that style's cue phrase is
//! appended as `[Context clues: ...]`. Triggers follow the keyword scorer's
//! negation rules, so "nie lubię obrazów" gets no visual hint. No network
//! involved.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::analysis::{normalize, tokenize, KeywordLexicon, DEFAULT_NEGATION_WINDOW};
use crate::domain::foundation::Style;
use crate::ports::{TextTranslator, TranslationError};

/// Lexicon-driven text enrichment.
#[derive(Debug, Clone)]
pub struct ContextHintTranslator {
    lexicon: Arc<KeywordLexicon>,
    negation_window: usize,
}

impl ContextHintTranslator {
    pub fn new(lexicon: Arc<KeywordLexicon>) -> Self {
        Self {
            lexicon,
            negation_window: DEFAULT_NEGATION_WINDOW,
        }
    }

    /// Sets how many preceding tokens are checked for a negation cue.
    pub fn with_negation_window(mut self, negation_window: usize) -> Self {
        self.negation_window = negation_window;
        self
    }

    /// Returns the text with cue phrases appended, or unchanged.
    pub fn enrich(&self, text: &str) -> String {
        let normalized = normalize(text);
        let tokens: Vec<&str> = tokenize(&normalized).collect();
        let hints = self.lexicon.classifier_hints();

        let phrases: Vec<&str> = Style::ALL
            .into_iter()
            .filter_map(|style| hints.get(&style))
            .filter(|hint| self.triggered(&tokens, &hint.triggers))
            .map(|hint| hint.phrase.as_str())
            .collect();

        if phrases.is_empty() {
            text.to_string()
        } else {
            format!("{} [Context clues: {}]", text, phrases.join(" "))
        }
    }

    /// True if an un-negated token contains any trigger.
    fn triggered(&self, tokens: &[&str], triggers: &[String]) -> bool {
        let lexicon = &self.lexicon;
        tokens.iter().enumerate().any(|(i, token)| {
            if lexicon.contains_negation(token)
                || !triggers.iter().any(|t| token.contains(t.as_str()))
            {
                return false;
            }
            let window_start = i.saturating_sub(self.negation_window);
            !tokens[window_start..i]
                .iter()
                .any(|previous| lexicon.contains_negation(previous))
        })
    }
}

#[async_trait]
impl TextTranslator for ContextHintTranslator {
    async fn prepare(&self, text: &str) -> Result<String, TranslationError> {
        Ok(self.enrich(text))
    }

    fn name(&self) -> &'static str {
        "context_hints"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn translator() -> ContextHintTranslator {
        ContextHintTranslator::new(Arc::new(KeywordLexicon::polish().clone()))
    }

    #[test]
    fn appends_hint_for_triggered_style() {
        let enriched = translator().enrich("Lubię słuchać podcastów");
        assert_eq!(
            enriched,
            "Lubię słuchać podcastów [Context clues: auditory learning style. listening. sound. discussion.]"
        );
    }

    #[test]
    fn appends_hints_in_style_order() {
        let enriched = translator().enrich("Sport i schematy");
        let visual = enriched.find("visual learning style").unwrap();
        let kinesthetic = enriched.find("kinesthetic learning style").unwrap();
        assert!(visual < kinesthetic);
    }

    #[test]
    fn negated_trigger_adds_no_hint() {
        assert_eq!(translator().enrich("nie lubię obrazów"), "nie lubię obrazów");
    }

    #[test]
    fn only_negated_style_is_dropped() {
        let enriched = translator().enrich("nie lubię obrazów, wolę sport");
        assert!(!enriched.contains("visual learning style"));
        assert!(enriched.contains("kinesthetic learning style"));
    }

    #[test]
    fn window_of_zero_keeps_negated_triggers() {
        let enriched = translator().with_negation_window(0).enrich("nie lubię obrazów");
        assert!(enriched.contains("visual learning style"));
    }

    #[test]
    fn leaves_text_without_triggers_unchanged() {
        assert_eq!(translator().enrich("lubię pierogi"), "lubię pierogi");
    }

    #[tokio::test]
    async fn prepare_never_fails() {
        let prepared = translator().prepare("").await.unwrap();
        assert_eq!(prepared, "");
    }
}
