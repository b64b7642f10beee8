//! Readability scoring over raw, unnormalized text.
//!
//! The headline score is Flesch Reading Ease:
//! `206.835 - 1.015 * (words/sentences) - 84.6 * (syllables/words)`.
//! Higher is easier; 60–70 is plain English. Flesch–Kincaid Grade Level is computed
//! from the same counts and reported alongside it.

use serde::{Deserialize, Serialize};

/// Score reported for text with no words. Sits below every "hard to read" threshold.
pub const EMPTY_TEXT_SCORE: f64 = 0.0;

pub const FORMULA_NAME: &str = "flesch_reading_ease";

const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u', 'y'];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadabilityReport {
    pub formula: String,
    /// Flesch Reading Ease. Not clamped; degenerate text can go negative or above 100.
    pub reading_ease: f64,
    /// Flesch–Kincaid Grade Level, informational only.
    pub grade_level: f64,
    pub sentences: usize,
    pub words: usize,
    pub syllables: usize,
}

/// Computes readability for `text`. Never fails: text without words yields
/// [`EMPTY_TEXT_SCORE`] for both scores.
pub fn score_readability(text: &str) -> ReadabilityReport {
    let words: Vec<&str> = text
        .split_whitespace()
        .filter(|w| w.chars().any(char::is_alphanumeric))
        .collect();
    let sentences = count_sentences(text);
    let syllables: usize = words.iter().map(|w| count_syllables(w)).sum();

    if words.is_empty() || sentences == 0 {
        return ReadabilityReport {
            formula: FORMULA_NAME.to_string(),
            reading_ease: EMPTY_TEXT_SCORE,
            grade_level: EMPTY_TEXT_SCORE,
            sentences,
            words: words.len(),
            syllables,
        };
    }

    let words_per_sentence = words.len() as f64 / sentences as f64;
    let syllables_per_word = syllables as f64 / words.len() as f64;

    let reading_ease = 206.835 - 1.015 * words_per_sentence - 84.6 * syllables_per_word;
    let grade_level = 0.39 * words_per_sentence + 11.8 * syllables_per_word - 15.59;

    ReadabilityReport {
        formula: FORMULA_NAME.to_string(),
        reading_ease,
        grade_level,
        sentences,
        words: words.len(),
        syllables,
    }
}

/// Counts sentences. A run of `.`, `!`, `?` closes one sentence if any alphanumeric text
/// preceded it; trailing text without a terminator counts as one more. A period directly
/// followed by an alphanumeric character (`3.5`, `example.com`) is not a terminator.
fn count_sentences(text: &str) -> usize {
    let mut sentences = 0;
    let mut pending = false;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '.' if chars.peek().is_some_and(|n| n.is_alphanumeric()) => {}
            '.' | '!' | '?' => {
                if pending {
                    sentences += 1;
                    pending = false;
                }
            }
            c if c.is_alphanumeric() => pending = true,
            _ => {}
        }
    }

    if pending {
        sentences += 1;
    }
    sentences
}

/// Heuristic syllable count: vowel groups, minus a silent trailing `e`, minimum one.
/// Tokens without letters (numbers) count as one syllable.
fn count_syllables(word: &str) -> usize {
    let letters: String = word
        .chars()
        .filter(|c| c.is_alphabetic())
        .flat_map(char::to_lowercase)
        .collect();

    if letters.is_empty() {
        return 1;
    }

    let mut groups = 0;
    let mut prev_vowel = false;
    for c in letters.chars() {
        let vowel = VOWELS.contains(&c);
        if vowel && !prev_vowel {
            groups += 1;
        }
        prev_vowel = vowel;
    }

    if groups > 1 && letters.ends_with('e') && !letters.ends_with("le") {
        groups -= 1;
    }

    groups.max(1)
}
