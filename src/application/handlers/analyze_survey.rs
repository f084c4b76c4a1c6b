//! AnalyzeSurveyHandler - Infers the dominant learning style of one survey.
//!
//! Pipeline: closed answers are tallied, the free-text answer (when long
//! enough) goes to the external classifier if one is configured and falls
//! back to keyword scoring when the classifier has no answer, the open-text
//! vote is weighted into the closed tally, and the dominant style is
//! resolved. The handler never fails; persisting the verdict is the
//! caller's job.

use std::sync::Arc;
use tracing::{debug, info, info_span, Instrument};
use uuid::Uuid;

use crate::domain::analysis::{
    resolve, score_closed, AnalysisPolicy, AnalysisResult, ClassificationOutcome,
    KeywordLexicon, OpenTextSignal, OpenTextSource, ScoreBreakdown, SurveyAnswers,
};
use crate::ports::{ClassifierInfo, StyleClassifier};

/// Command to analyse one survey submission.
#[derive(Debug, Clone)]
pub struct AnalyzeSurveyCommand {
    pub answers: SurveyAnswers,
}

impl AnalyzeSurveyCommand {
    pub fn new(answers: SurveyAnswers) -> Self {
        Self { answers }
    }
}

/// Handler for survey analysis.
///
/// Holds only immutable state and can be shared across tasks.
pub struct AnalyzeSurveyHandler {
    classifier: Arc<dyn StyleClassifier>,
    lexicon: Arc<KeywordLexicon>,
    policy: AnalysisPolicy,
}

impl AnalyzeSurveyHandler {
    pub fn new(
        classifier: Arc<dyn StyleClassifier>,
        lexicon: Arc<KeywordLexicon>,
        policy: AnalysisPolicy,
    ) -> Self {
        Self {
            classifier,
            lexicon,
            policy,
        }
    }

    /// True when the external classifier is configured.
    pub fn is_ai_available(&self) -> bool {
        self.classifier.is_available()
    }

    pub fn policy(&self) -> &AnalysisPolicy {
        &self.policy
    }

    /// Name and model of the open-text classifier.
    pub fn classifier_info(&self) -> ClassifierInfo {
        self.classifier.classifier_info()
    }

    pub async fn handle(&self, cmd: AnalyzeSurveyCommand) -> AnalysisResult {
        let span = info_span!(
            "analyze_survey",
            analysis_id = %Uuid::new_v4(),
            answers = cmd.answers.len()
        );
        self.analyze(&cmd.answers).instrument(span).await
    }

    async fn analyze(&self, answers: &SurveyAnswers) -> AnalysisResult {
        let policy = &self.policy;

        // 1. Closed questions
        let closed = score_closed(answers, &policy.free_text_key);
        debug!(closed_count = closed.closed_count, "Closed answers scored");

        // 2. Free text
        let open_text = self.open_text_signal(answers.get(&policy.free_text_key)).await;

        // 3. Fusion
        let open_text_weight = policy
            .fusion
            .applied_weight(closed.closed_count, open_text.outcome);
        let fused = policy
            .fusion
            .fuse(closed.scores, closed.closed_count, open_text.outcome);

        // 4. Resolution
        let result = resolve(fused, &policy.tie_break).with_breakdown(ScoreBreakdown {
            closed,
            open_text,
            open_text_weight,
        });

        info!(
            dominant_style = %result.dominant_style(),
            open_text_source = ?open_text.source,
            open_text_weight,
            "Survey analysed"
        );

        result
    }

    /// Classifier first, keywords second.
    async fn open_text_signal(&self, text: Option<&str>) -> OpenTextSignal {
        let scorer = &self.policy.keyword_scorer;

        let Some(text) = text.filter(|text| scorer.is_substantive(text)) else {
            debug!("No substantive free text");
            return OpenTextSignal::absent();
        };

        if self.classifier.is_available() {
            if let ClassificationOutcome::Detected(style) = self.classifier.classify(text).await {
                return OpenTextSignal::detected(OpenTextSource::Classifier, style);
            }
            debug!("Classifier indeterminate, falling back to keywords");
        }

        match scorer.score(text, &self.lexicon) {
            ClassificationOutcome::Detected(style) => {
                OpenTextSignal::detected(OpenTextSource::Keywords, style)
            }
            ClassificationOutcome::Indeterminate => OpenTextSignal::absent(),
        }
    }
}
