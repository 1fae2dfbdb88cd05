//! Content enhancement: derives the report sections from one annotated
//! piece of text.
//!
//! A `ContentEnhancer` is built per request, annotates its content once,
//! and exposes each report section as a pure function of that annotation
//! (plus two direct metric calls on the raw text). Sections are independent;
//! none caches, retries, or mutates shared state.

use std::collections::BTreeSet;

use indexmap::IndexMap;
use thiserror::Error;

use crate::models::{AnalysisReport, ConcisenessSuggestion, SimplifySuggestion};
use crate::nlp::{
    readability, AnnotateError, Document, EntityLabel, NlpEngine, PosTag, ReadabilityScores,
    SentimentPrediction,
};

/// Maximum number of synonym alternatives kept per token.
const MAX_ALTERNATIVES: usize = 5;

/// Maximum number of keyword entries in the report.
const MAX_KEYWORDS: usize = 10;

/// Alphabetic tokens longer than this many characters mark a sentence as
/// complex.
const COMPLEX_WORD_CHARS: usize = 10;

/// Sentences with more whitespace-delimited words than this get a
/// conciseness flag.
const CONCISE_WORD_LIMIT: usize = 20;

const SIMPLIFY_RECOMMENDATION: &str = "Consider simplifying or breaking this sentence.";
const CONCISE_RECOMMENDATION: &str = "Consider rephrasing to make it shorter.";
const GLOSSARY_PLACEHOLDER: &str = "Definition placeholder (could use APIs for definitions)";

/// Errors from content analysis.
#[derive(Debug, Error)]
pub enum EnhanceError {
    /// Input was empty after trimming; the handler maps this to a 400.
    #[error("No content provided.")]
    EmptyContent,

    /// The annotator could not process the input.
    #[error("annotation failed: {0}")]
    Annotation(#[from] AnnotateError),
}

/// Audience the content is written for. Accepted for forward compatibility;
/// no derivation uses it yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TargetAudience {
    #[default]
    General,
    Technical,
}

/// Per-request analysis over one piece of content.
pub struct ContentEnhancer<'a> {
    engine: &'a NlpEngine,
    content: String,
    #[allow(dead_code)]
    target_audience: TargetAudience,
    doc: Document,
}

impl<'a> std::fmt::Debug for ContentEnhancer<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentEnhancer")
            .field("content", &self.content)
            .field("target_audience", &self.target_audience)
            .field("doc", &self.doc)
            .finish()
    }
}

impl<'a> ContentEnhancer<'a> {
    /// Validate and annotate the content. Rejects input that is empty after
    /// trimming; annotation failures propagate.
    pub fn new(
        engine: &'a NlpEngine,
        content: impl Into<String>,
        target_audience: TargetAudience,
    ) -> Result<Self, EnhanceError> {
        let content = content.into();
        if content.trim().is_empty() {
            return Err(EnhanceError::EmptyContent);
        }
        let doc = engine.annotate(&content)?;
        Ok(Self {
            engine,
            content,
            target_audience,
            doc,
        })
    }

    /// Flesch reading ease and Gunning fog, passed through unmodified.
    pub fn readability_scores(&self) -> ReadabilityScores {
        readability::score(&self.content)
    }

    /// Top sentiment label with its confidence score.
    pub fn sentiment_analysis(&self) -> SentimentPrediction {
        self.engine.classify_sentiment(&self.content)
    }

    /// Sentences containing at least one alphabetic token longer than ten
    /// characters, in input order, with the offending words listed.
    pub fn simplify_sentences(&self) -> Vec<SimplifySuggestion> {
        self.doc
            .sentences
            .iter()
            .filter_map(|sentence| {
                let complex_words: Vec<String> = sentence
                    .tokens
                    .iter()
                    .filter(|t| t.is_alpha && t.char_len() > COMPLEX_WORD_CHARS)
                    .map(|t| t.text.clone())
                    .collect();
                if complex_words.is_empty() {
                    return None;
                }
                Some(SimplifySuggestion {
                    sentence: sentence.text.clone(),
                    complex_words,
                    recommendation: SIMPLIFY_RECOMMENDATION.to_string(),
                })
            })
            .collect()
    }

    /// Up to five synonyms per adjective, verb, or noun token. Sense groups
    /// for a token are unioned, multi-word entries rendered with spaces, and
    /// the synonym matching the original surface form dropped. Candidates
    /// are held in a `BTreeSet`, so truncation is deterministic and
    /// alphabetical. Tokens with no synonyms are omitted.
    pub fn suggest_alternatives(&self) -> IndexMap<String, Vec<String>> {
        let mut alternatives = IndexMap::new();
        for token in self.doc.tokens() {
            if !matches!(token.tag, PosTag::Adjective | PosTag::Verb | PosTag::Noun) {
                continue;
            }
            if alternatives.contains_key(&token.text) {
                continue;
            }
            let mut candidates = BTreeSet::new();
            for group in self.engine.synonyms().synsets(&token.text) {
                for member in group {
                    if *member != token.text.as_str() {
                        candidates.insert(member.replace('_', " "));
                    }
                }
            }
            if candidates.is_empty() {
                continue;
            }
            alternatives.insert(
                token.text.clone(),
                candidates.into_iter().take(MAX_ALTERNATIVES).collect(),
            );
        }
        alternatives
    }

    /// Surface strings of entities labeled organization, technology, or
    /// science. Other labels are ignored, so output is dominated by
    /// organization names.
    pub fn identify_jargon(&self) -> Vec<String> {
        self.doc
            .entities
            .iter()
            .filter(|e| {
                matches!(
                    e.label,
                    EntityLabel::Organization | EntityLabel::Technology | EntityLabel::Science
                )
            })
            .map(|e| e.text.clone())
            .collect()
    }

    /// The ten most frequent lowercased alphabetic tokens with their counts,
    /// descending; ties keep first-occurrence order.
    pub fn keyword_recommendations(&self) -> IndexMap<String, usize> {
        let mut counts: IndexMap<String, usize> = IndexMap::new();
        for token in self.doc.tokens() {
            if token.is_alpha {
                *counts.entry(token.text.to_lowercase()).or_insert(0) += 1;
            }
        }
        let mut entries: Vec<(String, usize)> = counts.into_iter().collect();
        // stable sort: equal counts stay in first-seen order
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries.truncate(MAX_KEYWORDS);
        entries.into_iter().collect()
    }

    /// Sentences with more than twenty whitespace-delimited words, in input
    /// order.
    pub fn concise_suggestions(&self) -> Vec<ConcisenessSuggestion> {
        self.doc
            .sentences
            .iter()
            .filter(|s| s.text.split_whitespace().count() > CONCISE_WORD_LIMIT)
            .map(|s| ConcisenessSuggestion {
                sentence: s.text.clone(),
                recommendation: CONCISE_RECOMMENDATION.to_string(),
            })
            .collect()
    }

    /// Glossary skeleton: every jargon term mapped to the placeholder
    /// definition. Real definition lookup is deferred.
    pub fn glossary_builder(&self) -> IndexMap<String, String> {
        self.identify_jargon()
            .into_iter()
            .map(|term| (term, GLOSSARY_PLACEHOLDER.to_string()))
            .collect()
    }

    /// All eight sections combined. The request handler calls only this.
    pub fn overall_analysis(&self) -> AnalysisReport {
        AnalysisReport {
            readability: self.readability_scores(),
            sentiment: self.sentiment_analysis(),
            simplification: self.simplify_sentences(),
            alternatives: self.suggest_alternatives(),
            jargon: self.identify_jargon(),
            keywords: self.keyword_recommendations(),
            conciseness: self.concise_suggestions(),
            glossary: self.glossary_builder(),
        }
    }
}
