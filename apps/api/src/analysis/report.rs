//! Presentation boundary for analyzer output.
//!
//! Rounding to two decimals and the "looks good" fallback live here, never in the
//! analyzer itself.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::analysis::analyzer::AnalysisResult;
use crate::analysis::tokens::tokenize;

pub const LOOKS_GOOD_MESSAGE: &str = "Your content looks great! No further optimizations needed.";

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub target_keyword: String,
    #[serde(flatten)]
    pub result: AnalysisResult,
    /// `keyword_density` formatted to two decimals, e.g. `"25.00"`.
    pub keyword_density_display: String,
    pub readability_display: String,
    /// Suggestions, or the single looks-good message when there are none.
    pub messages: Vec<String>,
    pub looks_good: bool,
    pub warnings: Vec<String>,
    pub analyzed_at: DateTime<Utc>,
}

impl AnalysisReport {
    pub fn from_result(target_keyword: &str, result: AnalysisResult) -> Self {
        let looks_good = result.suggestions.is_empty();
        let messages = if looks_good {
            vec![LOOKS_GOOD_MESSAGE.to_string()]
        } else {
            result.suggestions.clone()
        };

        Self {
            target_keyword: target_keyword.to_string(),
            keyword_density_display: format!("{:.2}", result.keyword_density),
            readability_display: format!("{:.2}", result.readability_score),
            messages,
            looks_good,
            warnings: keyword_warnings(target_keyword),
            analyzed_at: Utc::now(),
            result,
        }
    }
}

/// Flags keywords that can never match a single normalized token.
fn keyword_warnings(target_keyword: &str) -> Vec<String> {
    let lowered = target_keyword.to_lowercase();
    let tokens = tokenize(target_keyword);

    if tokens.len() > 1 {
        vec![format!(
            "Target keyword '{target_keyword}' spans {} words; only single-word keywords are counted, so its frequency is always 0.",
            tokens.len()
        )]
    } else if !tokens.first().is_some_and(|t| *t == lowered) {
        vec![format!(
            "Target keyword '{target_keyword}' contains punctuation or symbols; it can never match a word in the content."
        )]
    } else {
        vec![]
    }
}
