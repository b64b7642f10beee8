//! Content Metrics Analyzer — `(text, target_keyword) -> AnalysisResult`.
//!
//! Pure and stateless. Keyword counting runs over the normalized token stream
//! (see [`crate::analysis::tokens`]); readability runs over the raw text.
//!
//! Known limitation, kept on purpose: the keyword is only lowercased, never
//! tokenized, so a keyword containing spaces or punctuation can never equal a
//! single token and always reports a frequency of zero.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::analysis::readability::{score_readability, ReadabilityReport};
use crate::analysis::tokens::TokenCounts;

/// Density below this percentage triggers the keyword suggestion.
pub const MIN_KEYWORD_DENSITY: f64 = 2.0;
/// Reading Ease below this triggers the readability suggestion.
pub const MIN_READABILITY_SCORE: f64 = 60.0;

pub const HARD_TO_READ_SUGGESTION: &str =
    "The content may be hard to read. Consider simplifying the language.";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisInput {
    pub text: String,
    pub target_keyword: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub keyword_frequency: usize,
    pub total_word_count: usize,
    /// Percentage in `[0, 100]`, full precision.
    pub keyword_density: f64,
    /// Flesch Reading Ease of the raw text.
    pub readability_score: f64,
    pub readability: ReadabilityReport,
    pub suggestions: Vec<String>,
}

/// Analyzes `text` against `target_keyword`.
///
/// Fails only when the keyword is empty or whitespace. Empty text is valid and
/// yields zero density plus the sentinel readability score.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn analyze(text: &str, target_keyword: &str) -> Result<AnalysisResult, AnalysisError> {
    if target_keyword.trim().is_empty() {
        return Err(AnalysisError::InvalidInput(
            "target_keyword cannot be empty".to_string(),
        ));
    }

    let counts = TokenCounts::from_text(text);
    let keyword_frequency = counts.get(&target_keyword.to_lowercase());
    let total_word_count = counts.total();
    let keyword_density = keyword_density(keyword_frequency, total_word_count);

    let readability = score_readability(text);
    let readability_score = readability.reading_ease;

    let suggestions = build_suggestions(target_keyword, keyword_density, readability_score);

    tracing::debug!(
        keyword_frequency,
        total_word_count,
        keyword_density,
        readability_score,
        "Content analyzed"
    );

    Ok(AnalysisResult {
        keyword_frequency,
        total_word_count,
        keyword_density,
        readability_score,
        readability,
        suggestions,
    })
}

impl AnalysisInput {
    pub fn analyze(&self) -> Result<AnalysisResult, AnalysisError> {
        analyze(&self.text, &self.target_keyword)
    }
}

fn keyword_density(frequency: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    frequency as f64 / total as f64 * 100.0
}

/// Builds suggestions in fixed order: keyword density first, readability second.
fn build_suggestions(target_keyword: &str, density: f64, readability: f64) -> Vec<String> {
    let mut suggestions = Vec::new();
    if density < MIN_KEYWORD_DENSITY {
        suggestions.push(keyword_suggestion(target_keyword));
    }
    if readability < MIN_READABILITY_SCORE {
        suggestions.push(HARD_TO_READ_SUGGESTION.to_string());
    }
    suggestions
}

pub fn keyword_suggestion(target_keyword: &str) -> String {
    format!(
        "Increase the usage of the target keyword '{target_keyword}' to improve keyword density."
    )
}
