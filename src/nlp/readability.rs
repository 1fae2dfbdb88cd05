//! Readability metrics: Flesch reading ease and Gunning fog index.
//!
//! Both metrics work directly on raw text with their own lightweight word
//! and sentence counts, independent of the full annotation pipeline.

use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

/// Words with at least this many syllables count as complex for the fog
/// index.
const FOG_COMPLEX_SYLLABLES: usize = 3;

/// Readability metrics for a block of text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReadabilityScores {
    pub flesch_reading_ease: f64,
    pub gunning_fog_index: f64,
}

/// Compute both readability metrics for a text.
pub fn score(text: &str) -> ReadabilityScores {
    ReadabilityScores {
        flesch_reading_ease: flesch_reading_ease(text),
        gunning_fog_index: gunning_fog_index(text),
    }
}

/// Flesch reading ease: 206.835 − 1.015 (words/sentences) − 84.6
/// (syllables/words). Higher is easier; everyday prose lands around 60–80.
pub fn flesch_reading_ease(text: &str) -> f64 {
    let words: Vec<&str> = text.unicode_words().collect();
    if words.is_empty() {
        return 0.0;
    }
    let sentences = sentence_count(text) as f64;
    let word_count = words.len() as f64;
    let syllables: usize = words.iter().map(|w| syllable_count(w)).sum();

    206.835 - 1.015 * (word_count / sentences) - 84.6 * (syllables as f64 / word_count)
}

/// Gunning fog index: 0.4 ((words/sentences) + 100 (complex/words)).
/// Approximates the years of schooling needed on first reading.
pub fn gunning_fog_index(text: &str) -> f64 {
    let words: Vec<&str> = text.unicode_words().collect();
    if words.is_empty() {
        return 0.0;
    }
    let sentences = sentence_count(text) as f64;
    let word_count = words.len() as f64;
    let complex = words
        .iter()
        .filter(|w| syllable_count(w) >= FOG_COMPLEX_SYLLABLES)
        .count() as f64;

    0.4 * ((word_count / sentences) + 100.0 * (complex / word_count))
}

fn sentence_count(text: &str) -> usize {
    text.unicode_sentences()
        .filter(|s| !s.trim().is_empty())
        .count()
        .max(1)
}

/// Estimate syllables by counting vowel groups, discounting a silent
/// trailing "e". Every word counts at least one.
pub fn syllable_count(word: &str) -> usize {
    let lower = word.to_lowercase();
    let mut count = 0;
    let mut prev_vowel = false;
    for c in lower.chars() {
        let vowel = matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y');
        if vowel && !prev_vowel {
            count += 1;
        }
        prev_vowel = vowel;
    }
    if lower.ends_with('e') && !lower.ends_with("le") && count > 1 {
        count -= 1;
    }
    count.max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_syllable_counts() {
        assert_eq!(syllable_count("cat"), 1);
        assert_eq!(syllable_count("table"), 2);
        assert_eq!(syllable_count("gnome"), 1);
        assert_eq!(syllable_count("readability"), 5);
        assert_eq!(syllable_count("sophisticated"), 5);
        assert_eq!(syllable_count("a"), 1);
    }

    #[test]
    fn test_empty_text_scores_zero() {
        assert_eq!(flesch_reading_ease(""), 0.0);
        assert_eq!(gunning_fog_index(""), 0.0);
    }

    #[test]
    fn test_simple_text_reads_easier_than_dense_text() {
        let simple = "The cat sat on the mat. The dog ran to the park.";
        let dense = "Institutional accountability necessitates comprehensive organizational \
                     transparency regarding multidimensional administrative responsibilities.";
        assert!(flesch_reading_ease(simple) > flesch_reading_ease(dense));
        assert!(gunning_fog_index(simple) < gunning_fog_index(dense));
    }

    #[test]
    fn test_fog_counts_complex_words() {
        // One 20-word sentence, zero words of three or more syllables.
        let text = "The big red fox ran very fast to the old barn and then went back home to rest for now.";
        let fog = gunning_fog_index(text);
        assert!((fog - 0.4 * 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_simple_prose_scores_in_easy_band() {
        let score = flesch_reading_ease("The cat sat on the mat.");
        assert!(score > 80.0, "got {score}");
    }
}
