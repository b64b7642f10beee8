//! Content Generator — pluggable, trait-based text generation collaborator.
//!
//! Default: `LlmContentGenerator` (Gemini via `llm_client`).
//! `AppState` holds an `Arc<dyn ContentGenerator>`, so handlers never see the backend.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::generation::industry::{find_industry, Industry};
use crate::generation::prompts::{
    GENERATION_PROMPT_TEMPLATE, GENERATION_SYSTEM, INDUSTRY_FOCUS_TEMPLATE,
    REVISION_PROMPT_TEMPLATE, REVISION_SYSTEM,
};
use crate::llm_client::prompts::{NATURAL_KEYWORD_INSTRUCTION, PLAIN_OUTPUT_INSTRUCTION};
use crate::llm_client::LlmClient;

/// Kind of marketing copy to produce.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    #[default]
    Article,
    BlogPost,
    ProductDescription,
    SocialMediaPost,
    LandingPage,
}

impl ContentKind {
    pub fn label(self) -> &'static str {
        match self {
            ContentKind::Article => "article",
            ContentKind::BlogPost => "blog post",
            ContentKind::ProductDescription => "product description",
            ContentKind::SocialMediaPost => "social media post",
            ContentKind::LandingPage => "landing page",
        }
    }
}

/// Request body for content generation.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerationRequest {
    pub target_keyword: String,
    pub industry: Option<String>,
    #[serde(default)]
    pub content_type: ContentKind,
}

/// A validated generation request with the industry resolved against the catalogue.
#[derive(Debug, Clone)]
pub struct ContentBrief {
    pub target_keyword: String,
    pub content_type: ContentKind,
    pub industry: Option<&'static Industry>,
}

impl ContentBrief {
    pub fn from_request(request: GenerationRequest) -> Result<Self, AppError> {
        let target_keyword = request.target_keyword.trim().to_string();
        if target_keyword.is_empty() {
            return Err(AppError::Validation(
                "target_keyword cannot be empty".to_string(),
            ));
        }

        let industry = match request.industry.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(slug) => Some(
                find_industry(slug)
                    .ok_or_else(|| AppError::NotFound(format!("Unknown industry '{slug}'")))?,
            ),
        };

        Ok(Self {
            target_keyword,
            content_type: request.content_type,
            industry,
        })
    }
}

/// The generator trait. Implement this to swap the text-generation backend without
/// touching handlers.
#[async_trait]
pub trait ContentGenerator: Send + Sync {
    /// Writes new copy for the brief.
    async fn generate(&self, brief: &ContentBrief) -> Result<String, AppError>;

    /// Rewrites `content` to address the analyzer's `suggestions`.
    async fn revise(
        &self,
        content: &str,
        target_keyword: &str,
        suggestions: &[String],
    ) -> Result<String, AppError>;
}

/// Gemini-backed generator.
pub struct LlmContentGenerator(pub LlmClient);

#[async_trait]
impl ContentGenerator for LlmContentGenerator {
    async fn generate(&self, brief: &ContentBrief) -> Result<String, AppError> {
        let prompt = build_generation_prompt(brief);
        self.0
            .call_text(&prompt, &system_prompt(GENERATION_SYSTEM))
            .await
            .map_err(|e| AppError::Llm(format!("Content generation failed: {e}")))
    }

    async fn revise(
        &self,
        content: &str,
        target_keyword: &str,
        suggestions: &[String],
    ) -> Result<String, AppError> {
        let prompt = build_revision_prompt(content, target_keyword, suggestions);
        self.0
            .call_text(&prompt, &system_prompt(REVISION_SYSTEM))
            .await
            .map_err(|e| AppError::Llm(format!("Content revision failed: {e}")))
    }
}

fn system_prompt(base: &str) -> String {
    format!("{base} {NATURAL_KEYWORD_INSTRUCTION} {PLAIN_OUTPUT_INSTRUCTION}")
}

pub fn build_generation_prompt(brief: &ContentBrief) -> String {
    let mut prompt = GENERATION_PROMPT_TEMPLATE
        .replace("{content_label}", brief.content_type.label())
        .replace("{target_keyword}", &brief.target_keyword);

    if let Some(industry) = brief.industry {
        prompt.push_str(
            &INDUSTRY_FOCUS_TEMPLATE
                .replace("{industry_name}", industry.name)
                .replace("{industry_keywords}", &industry.keywords.join(", ")),
        );
    }

    prompt
}

pub fn build_revision_prompt(
    content: &str,
    target_keyword: &str,
    suggestions: &[String],
) -> String {
    let suggestions = suggestions
        .iter()
        .map(|s| format!("- {s}"))
        .collect::<Vec<_>>()
        .join("\n");

    REVISION_PROMPT_TEMPLATE
        .replace("{target_keyword}", target_keyword)
        .replace("{suggestions}", &suggestions)
        .replace("{content}", content)
}
