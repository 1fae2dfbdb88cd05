//! prosecheck - writing-quality diagnostics for draft text.
//!
//! Accepts a block of text over HTTP (or via the one-shot CLI) and returns
//! readability scores, sentiment, sentence-simplification and conciseness
//! suggestions, synonym alternatives, jargon detection, keyword frequency,
//! and a glossary skeleton.

pub mod cli;
pub mod config;
pub mod enhancer;
pub mod models;
pub mod nlp;
pub mod server;
