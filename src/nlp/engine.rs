//! Process-wide NLP engine.
//!
//! Owns one instance of each collaborator (annotator, sentiment classifier,
//! synonym dictionary), constructed once at startup and shared read-only
//! across requests. All backends are `Send + Sync`; nothing here is mutated
//! after construction.

use super::annotate::{AnnotateError, AnnotatorBackend, Document, RuleAnnotator};
use super::sentiment::{LexiconSentimentBackend, SentimentBackend, SentimentPrediction};
use super::synonyms::SynonymDictionary;

pub struct NlpEngine {
    annotator: Box<dyn AnnotatorBackend>,
    sentiment: Box<dyn SentimentBackend>,
    synonyms: SynonymDictionary,
}

impl NlpEngine {
    /// Build the engine with the built-in backends.
    pub fn new() -> Self {
        Self::with_backends(
            Box::new(RuleAnnotator::new()),
            Box::new(LexiconSentimentBackend::new()),
        )
    }

    /// Build the engine with custom backends.
    pub fn with_backends(
        annotator: Box<dyn AnnotatorBackend>,
        sentiment: Box<dyn SentimentBackend>,
    ) -> Self {
        Self {
            annotator,
            sentiment,
            synonyms: SynonymDictionary::builtin(),
        }
    }

    /// Annotate raw text into a `Document`.
    pub fn annotate(&self, text: &str) -> Result<Document, AnnotateError> {
        let doc = self.annotator.annotate(text)?;
        tracing::debug!(
            backend = self.annotator.backend_id(),
            sentences = doc.sentences.len(),
            entities = doc.entities.len(),
            "annotated text"
        );
        Ok(doc)
    }

    /// Classify the overall sentiment of a text.
    pub fn classify_sentiment(&self, text: &str) -> SentimentPrediction {
        let prediction = self.sentiment.classify(text);
        tracing::debug!(
            backend = self.sentiment.backend_id(),
            label = ?prediction.label,
            score = prediction.score,
            "classified sentiment"
        );
        prediction
    }

    /// The synonym dictionary.
    pub fn synonyms(&self) -> &SynonymDictionary {
        &self.synonyms
    }
}

impl Default for NlpEngine {
    fn default() -> Self {
        Self::new()
    }
}
