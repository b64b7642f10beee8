//! Axum route handlers for the Generation API.

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::analysis::{analyze, compare_versions, AnalysisReport, ComparisonReport};
use crate::errors::AppError;
use crate::generation::generator::{ContentBrief, ContentKind, GenerationRequest};
use crate::generation::industry::{find_industry, Industry, INDUSTRIES};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub content: String,
    pub content_type: ContentKind,
    pub industry: Option<&'static str>,
    pub report: AnalysisReport,
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct OptimizeRequest {
    pub content: String,
    pub target_keyword: String,
}

#[derive(Debug, Serialize)]
pub struct OptimizeResponse {
    /// False when the submitted content already had no suggestions and was returned unchanged.
    pub revised: bool,
    pub revised_content: String,
    pub comparison: ComparisonReport,
}

#[derive(Debug, Serialize)]
pub struct IndustryKeywordsResponse {
    pub industry: &'static str,
    pub name: &'static str,
    pub keywords: &'static [&'static str],
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/content/generate
///
/// Generates SEO copy for a keyword and analyzes the result.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(request): Json<GenerationRequest>,
) -> Result<Json<GenerateResponse>, AppError> {
    let brief = ContentBrief::from_request(request)?;

    info!(
        "Generating {} for keyword '{}'",
        brief.content_type.label(),
        brief.target_keyword
    );
    let content = state.generator.generate(&brief).await?;

    let result = analyze(&content, &brief.target_keyword)?;
    let report = AnalysisReport::from_result(&brief.target_keyword, result);
    info!(
        "Generated {} words, density {}%",
        report.result.total_word_count, report.keyword_density_display
    );

    Ok(Json(GenerateResponse {
        content,
        content_type: brief.content_type,
        industry: brief.industry.map(|i| i.slug),
        report,
        generated_at: Utc::now(),
    }))
}

/// POST /api/v1/content/optimize
///
/// Revises existing copy against its own suggestions and compares both versions.
/// Content with no suggestions is returned as-is without calling the generator.
pub async fn handle_optimize(
    State(state): State<AppState>,
    Json(request): Json<OptimizeRequest>,
) -> Result<Json<OptimizeResponse>, AppError> {
    if request.content.trim().is_empty() {
        return Err(AppError::Validation("content cannot be empty".to_string()));
    }

    let initial = analyze(&request.content, &request.target_keyword)?;

    let (revised, revised_content) = if initial.suggestions.is_empty() {
        info!("Content already optimized; skipping revision");
        (false, request.content.clone())
    } else {
        info!(
            "Revising content against {} suggestions",
            initial.suggestions.len()
        );
        let content = state
            .generator
            .revise(&request.content, &request.target_keyword, &initial.suggestions)
            .await?;
        (true, content)
    };

    let comparison = compare_versions(&request.content, &revised_content, &request.target_keyword)?;

    Ok(Json(OptimizeResponse {
        revised,
        revised_content,
        comparison,
    }))
}

/// GET /api/v1/industries
pub async fn handle_list_industries() -> Json<&'static [Industry]> {
    Json(INDUSTRIES)
}

/// GET /api/v1/industries/:industry/keywords
pub async fn handle_industry_keywords(
    Path(industry): Path<String>,
) -> Result<Json<IndustryKeywordsResponse>, AppError> {
    let found = find_industry(&industry)
        .ok_or_else(|| AppError::NotFound(format!("Unknown industry '{industry}'")))?;

    Ok(Json(IndustryKeywordsResponse {
        industry: found.slug,
        name: found.name,
        keywords: found.keywords,
    }))
}
