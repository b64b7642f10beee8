//! Token normalization for keyword counting.
//!
//! A token is a maximal run of alphanumeric characters after lowercasing. Everything
//! else (punctuation, symbols, whitespace, underscores) separates tokens.

use std::collections::HashMap;

/// Lowercases `text` and collapses every run of non-alphanumeric characters into a
/// single space.
///
/// Lowercasing runs over the whole string so context-sensitive mappings (Greek final
/// sigma) agree with `str::to_lowercase` on the keyword.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let mut out = String::with_capacity(lowered.len());
    let mut in_gap = false;

    for c in lowered.chars() {
        if c.is_alphanumeric() {
            out.push(c);
            in_gap = false;
        } else if !in_gap {
            out.push(' ');
            in_gap = true;
        }
    }

    out
}

/// Splits text into normalized tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    normalize(text)
        .split_whitespace()
        .map(String::from)
        .collect()
}

/// Token occurrence counts for a piece of text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenCounts {
    counts: HashMap<String, usize>,
}

impl TokenCounts {
    pub fn from_text(text: &str) -> Self {
        let mut counts: HashMap<String, usize> = HashMap::new();
        for token in normalize(text).split_whitespace() {
            *counts.entry(token.to_string()).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Occurrences of `token`. The lookup key is used as given; callers lowercase it.
    pub fn get(&self, token: &str) -> usize {
        self.counts.get(token).copied().unwrap_or(0)
    }

    /// Sum of all occurrence counts.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }
}
