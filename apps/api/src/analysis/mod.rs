//! Content analysis: keyword density, readability and improvement suggestions.
//!
//! `analyzer` is the pure core. `report` and `comparison` shape its output for
//! callers; `handlers` exposes it over HTTP.

pub mod analyzer;
pub mod comparison;
pub mod handlers;
pub mod readability;
pub mod report;
pub mod tokens;

pub use analyzer::{analyze, AnalysisError};
pub use comparison::{compare_versions, ComparisonReport};
pub use report::AnalysisReport;
