//! Version comparison — analyzes a previous and a current draft independently and
//! reports how the metrics moved.

use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::{analyze, AnalysisError};
use crate::analysis::report::AnalysisReport;

#[derive(Debug, Clone, Deserialize)]
pub struct CompareRequest {
    pub previous_text: String,
    pub current_text: String,
    pub target_keyword: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ComparisonReport {
    pub previous: AnalysisReport,
    pub current: AnalysisReport,
    /// All deltas are `current - previous`.
    pub keyword_frequency_delta: i64,
    pub word_count_delta: i64,
    pub density_delta: f64,
    pub readability_delta: f64,
    /// Suggestions raised for the previous draft that the current one no longer triggers.
    pub resolved_suggestions: Vec<String>,
    pub new_suggestions: Vec<String>,
}

pub fn compare_versions(
    previous_text: &str,
    current_text: &str,
    target_keyword: &str,
) -> Result<ComparisonReport, AnalysisError> {
    let previous =
        AnalysisReport::from_result(target_keyword, analyze(previous_text, target_keyword)?);
    let current =
        AnalysisReport::from_result(target_keyword, analyze(current_text, target_keyword)?);

    let prev = &previous.result;
    let curr = &current.result;

    let resolved_suggestions = difference(&prev.suggestions, &curr.suggestions);
    let new_suggestions = difference(&curr.suggestions, &prev.suggestions);

    Ok(ComparisonReport {
        keyword_frequency_delta: curr.keyword_frequency as i64 - prev.keyword_frequency as i64,
        word_count_delta: curr.total_word_count as i64 - prev.total_word_count as i64,
        density_delta: curr.keyword_density - prev.keyword_density,
        readability_delta: curr.readability_score - prev.readability_score,
        resolved_suggestions,
        new_suggestions,
        previous,
        current,
    })
}

/// Items of `a` not present in `b`, in `a`'s order.
fn difference(a: &[String], b: &[String]) -> Vec<String> {
    a.iter().filter(|s| !b.contains(s)).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyzer::HARD_TO_READ_SUGGESTION;

    const HARD: &str = "Comprehensive organizational restructuring necessitated \
                        interdepartmental communication protocols.";
    const EASY: &str = "SEO is fun. We like SEO. It is easy.";

    #[test]
    fn test_improved_draft_resolves_suggestions() {
        let report = compare_versions(HARD, EASY, "seo").unwrap();
        assert_eq!(report.previous.result.suggestions.len(), 2);
        assert!(report.current.result.suggestions.is_empty());
        assert_eq!(report.resolved_suggestions.len(), 2);
        assert!(report.new_suggestions.is_empty());
        assert!(report.readability_delta > 0.0);
        assert!(report.density_delta > 0.0);
        assert_eq!(report.keyword_frequency_delta, 2);
    }

    #[test]
    fn test_regressed_draft_reports_new_suggestions() {
        let report = compare_versions(EASY, HARD, "seo").unwrap();
        assert!(report.resolved_suggestions.is_empty());
        assert_eq!(report.new_suggestions.len(), 2);
        assert_eq!(report.new_suggestions[1], HARD_TO_READ_SUGGESTION);
        assert!(report.readability_delta < 0.0);
        assert_eq!(report.word_count_delta, 7 - 9);
    }

    #[test]
    fn test_identical_drafts_have_zero_deltas() {
        let report = compare_versions(EASY, EASY, "seo").unwrap();
        assert_eq!(report.keyword_frequency_delta, 0);
        assert_eq!(report.word_count_delta, 0);
        assert_eq!(report.density_delta, 0.0);
        assert_eq!(report.readability_delta, 0.0);
        assert!(report.resolved_suggestions.is_empty());
        assert!(report.new_suggestions.is_empty());
    }

    #[test]
    fn test_empty_keyword_fails_comparison() {
        assert!(compare_versions(EASY, HARD, "").is_err());
    }

    #[test]
    fn test_difference_preserves_order() {
        let a = vec!["x".to_string(), "y".to_string(), "z".to_string()];
        let b = vec!["y".to_string()];
        assert_eq!(difference(&a, &b), vec!["x".to_string(), "z".to_string()]);
    }
}
