//! Natural-language building blocks behind pluggable backends.
//!
//! Annotation, readability, sentiment, and synonym lookup are independent
//! capabilities; each ships one built-in rule or lexicon implementation
//! with no external models or runtime downloads.

pub mod annotate;
pub mod readability;
pub mod sentiment;
pub mod synonyms;

mod engine;

pub use annotate::{
    AnnotateError, AnnotatorBackend, Document, Entity, EntityLabel, PosTag, RuleAnnotator,
    Sentence, Token,
};
pub use engine::NlpEngine;
pub use readability::ReadabilityScores;
pub use sentiment::{
    LexiconSentimentBackend, SentimentBackend, SentimentLabel, SentimentPrediction,
};
pub use synonyms::SynonymDictionary;
