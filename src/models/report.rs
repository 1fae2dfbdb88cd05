//! Report types produced by content analysis.
//!
//! `AnalysisReport` is the wire shape of a successful `/chat` response:
//! eight fixed sections, each typed. Map-valued sections use `IndexMap`
//! so JSON key order matches insertion order.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::nlp::{ReadabilityScores, SentimentPrediction};

/// Suggestion to simplify one sentence that carries long words.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimplifySuggestion {
    pub sentence: String,
    pub complex_words: Vec<String>,
    pub recommendation: String,
}

/// Suggestion to shorten one long sentence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConcisenessSuggestion {
    pub sentence: String,
    pub recommendation: String,
}

/// Aggregate analysis for one piece of content. Built once per request,
/// never mutated after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub readability: ReadabilityScores,
    pub sentiment: SentimentPrediction,
    pub simplification: Vec<SimplifySuggestion>,
    pub alternatives: IndexMap<String, Vec<String>>,
    pub jargon: Vec<String>,
    pub keywords: IndexMap<String, usize>,
    pub conciseness: Vec<ConcisenessSuggestion>,
    pub glossary: IndexMap<String, String>,
}
