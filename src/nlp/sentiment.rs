//! Lexicon-based sentiment classification.
//!
//! Provides a `SentimentBackend` trait for pluggable classifiers and a
//! built-in `LexiconSentimentBackend` that scores text against a weighted
//! word lexicon with single-token negation flipping. Emits one top label
//! with a confidence score, the contract the report exposes.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

/// Sentiment label for a whole text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SentimentLabel {
    Positive,
    Negative,
}

/// A single sentiment classification: top label plus confidence in
/// [0.5, 1.0).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentPrediction {
    pub label: SentimentLabel,
    pub score: f64,
}

/// Trait for pluggable sentiment backends.
pub trait SentimentBackend: Send + Sync {
    /// Human-readable backend identifier (e.g. "lexicon").
    fn backend_id(&self) -> &str;

    /// Classify the overall sentiment of a text.
    fn classify(&self, text: &str) -> SentimentPrediction;
}

/// Weighted-lexicon sentiment backend.
///
/// A word directly preceded by a negation token contributes its weight with
/// the sign flipped. Texts with no lexicon hits classify as weakly positive,
/// matching the argmax behavior of a two-class classifier on neutral input.
pub struct LexiconSentimentBackend;

impl LexiconSentimentBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LexiconSentimentBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentBackend for LexiconSentimentBackend {
    fn backend_id(&self) -> &str {
        "lexicon"
    }

    fn classify(&self, text: &str) -> SentimentPrediction {
        let mut tally = 0.0_f64;
        let mut prev: Option<String> = None;

        for word in text.unicode_words() {
            let lower = word.to_lowercase();
            if let Some(weight) = LEXICON.get(lower.as_str()) {
                let negated = prev
                    .as_deref()
                    .map(|p| NEGATIONS.contains(p))
                    .unwrap_or(false);
                tally += if negated { -weight } else { *weight };
            }
            prev = Some(lower);
        }

        let label = if tally < 0.0 {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Positive
        };
        let magnitude = tally.abs();
        let score = 0.5 + 0.5 * (magnitude / (magnitude + 2.0));

        SentimentPrediction { label, score }
    }
}

static NEGATIONS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "not", "no", "never", "neither", "nor", "hardly", "barely", "scarcely", "without",
        "cannot", "can't", "isn't", "wasn't", "aren't", "weren't", "don't", "doesn't", "didn't",
        "won't", "wouldn't", "shouldn't", "couldn't",
    ]
    .into_iter()
    .collect()
});

static LEXICON: LazyLock<HashMap<&'static str, f64>> = LazyLock::new(|| {
    [
        // strongly positive
        ("excellent", 3.0),
        ("outstanding", 3.0),
        ("wonderful", 3.0),
        ("fantastic", 3.0),
        ("superb", 3.0),
        ("amazing", 3.0),
        ("brilliant", 3.0),
        ("delightful", 3.0),
        ("perfect", 3.0),
        ("love", 3.0),
        ("loved", 3.0),
        // positive
        ("good", 2.0),
        ("great", 2.0),
        ("impressive", 2.0),
        ("enjoyable", 2.0),
        ("pleasant", 2.0),
        ("happy", 2.0),
        ("glad", 2.0),
        ("effective", 2.0),
        ("reliable", 2.0),
        ("valuable", 2.0),
        ("successful", 2.0),
        ("beautiful", 2.0),
        ("strong", 2.0),
        ("recommend", 2.0),
        ("recommended", 2.0),
        ("win", 2.0),
        ("winning", 2.0),
        ("benefit", 2.0),
        ("beneficial", 2.0),
        // mildly positive
        ("nice", 1.0),
        ("fine", 1.0),
        ("useful", 1.0),
        ("helpful", 1.0),
        ("clear", 1.0),
        ("clean", 1.0),
        ("fresh", 1.0),
        ("easy", 1.0),
        ("improved", 1.0),
        ("improvement", 1.0),
        ("better", 1.0),
        ("works", 1.0),
        ("worked", 1.0),
        ("like", 1.0),
        ("liked", 1.0),
        ("interesting", 1.0),
        ("solid", 1.0),
        ("smooth", 1.0),
        ("positive", 1.0),
        // mildly negative
        ("slow", -1.0),
        ("unclear", -1.0),
        ("confusing", -1.0),
        ("difficult", -1.0),
        ("hard", -1.0),
        ("weak", -1.0),
        ("boring", -1.0),
        ("dull", -1.0),
        ("noisy", -1.0),
        ("messy", -1.0),
        ("worse", -1.0),
        ("negative", -1.0),
        ("problem", -1.0),
        ("problems", -1.0),
        ("issue", -1.0),
        ("issues", -1.0),
        // negative
        ("bad", -2.0),
        ("poor", -2.0),
        ("disappointing", -2.0),
        ("disappointed", -2.0),
        ("broken", -2.0),
        ("fail", -2.0),
        ("failed", -2.0),
        ("failure", -2.0),
        ("wrong", -2.0),
        ("unreliable", -2.0),
        ("useless", -2.0),
        ("annoying", -2.0),
        ("frustrating", -2.0),
        ("ugly", -2.0),
        ("lose", -2.0),
        ("losing", -2.0),
        ("lost", -2.0),
        ("harm", -2.0),
        ("harmful", -2.0),
        // strongly negative
        ("terrible", -3.0),
        ("horrible", -3.0),
        ("awful", -3.0),
        ("dreadful", -3.0),
        ("disastrous", -3.0),
        ("abysmal", -3.0),
        ("hate", -3.0),
        ("hated", -3.0),
        ("worst", -3.0),
        ("catastrophic", -3.0),
    ]
    .into_iter()
    .collect()
});

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(text: &str) -> SentimentPrediction {
        LexiconSentimentBackend::new().classify(text)
    }

    #[test]
    fn test_positive_text() {
        let prediction = classify("This is an excellent and wonderful result.");
        assert_eq!(prediction.label, SentimentLabel::Positive);
        assert!(prediction.score > 0.5);
    }

    #[test]
    fn test_negative_text() {
        let prediction = classify("A terrible, awful experience from start to finish.");
        assert_eq!(prediction.label, SentimentLabel::Negative);
        assert!(prediction.score > 0.5);
    }

    #[test]
    fn test_negation_flips_polarity() {
        let prediction = classify("The report was not good.");
        assert_eq!(prediction.label, SentimentLabel::Negative);
    }

    #[test]
    fn test_neutral_text_defaults_positive() {
        let prediction = classify("The meeting is on Tuesday at three.");
        assert_eq!(prediction.label, SentimentLabel::Positive);
        assert!((prediction.score - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_score_bounded_below_one() {
        let prediction =
            classify("Excellent excellent excellent wonderful amazing fantastic superb.");
        assert!(prediction.score < 1.0);
        assert!(prediction.score > 0.8);
    }

    #[test]
    fn test_stronger_signal_scores_higher() {
        let mild = classify("This is nice.");
        let strong = classify("This is excellent, wonderful, and amazing.");
        assert!(strong.score > mild.score);
    }
}
