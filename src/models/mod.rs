//! Data types shared across services and interfaces.

mod report;

pub use report::{AnalysisReport, ConcisenessSuggestion, SimplifySuggestion};
