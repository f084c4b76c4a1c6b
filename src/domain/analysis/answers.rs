//! Survey answers as handed over by the ingestion layer.

use serde::Deserialize;
use std::collections::HashMap;

/// Default key of the free-text self-description.
pub const DEFAULT_FREE_TEXT_KEY: &str = "userDescription";

/// Question id → answer. Order is irrelevant.
///
/// Deserialization is lenient: a JSON value that is not a string (null,
/// number, object, ...) is kept as "no answer" instead of rejecting the
/// whole submission, because survey input is uncurated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "HashMap<String, serde_json::Value>")]
pub struct SurveyAnswers {
    answers: HashMap<String, Option<String>>,
}

impl SurveyAnswers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an answer.
    pub fn with_answer(mut self, question: impl Into<String>, answer: impl Into<String>) -> Self {
        self.answers.insert(question.into(), Some(answer.into()));
        self
    }

    /// Adds a question that was left unanswered.
    pub fn with_blank(mut self, question: impl Into<String>) -> Self {
        self.answers.insert(question.into(), None);
        self
    }

    /// Returns the answer for a question, if present and non-null.
    pub fn get(&self, question: &str) -> Option<&str> {
        self.answers.get(question).and_then(|a| a.as_deref())
    }

    /// Iterates over all questions and their (possibly missing) answers.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.answers
            .iter()
            .map(|(question, answer)| (question.as_str(), answer.as_deref()))
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }
}

impl From<HashMap<String, serde_json::Value>> for SurveyAnswers {
    fn from(raw: HashMap<String, serde_json::Value>) -> Self {
        let answers = raw
            .into_iter()
            .map(|(question, value)| {
                let answer = match value {
                    serde_json::Value::String(s) => Some(s),
                    _ => None,
                };
                (question, answer)
            })
            .collect();
        Self { answers }
    }
}

impl<K, V> FromIterator<(K, V)> for SurveyAnswers
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let answers = iter
            .into_iter()
            .map(|(question, answer)| (question.into(), Some(answer.into())))
            .collect();
        Self { answers }
    }
}
