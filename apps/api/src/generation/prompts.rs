// All LLM prompt constants for the Generation module.
// Reuses cross-cutting fragments from llm_client::prompts.

/// System prompt for SEO copy generation. Extended at runtime with shared fragments.
pub const GENERATION_SYSTEM: &str = "You are an expert SEO copywriter. \
    You write clear, accurate marketing content that ranks well in search engines \
    and reads well for people.";

/// Generation prompt template.
/// Replace: {content_label}, {target_keyword}
pub const GENERATION_PROMPT_TEMPLATE: &str =
    "Write an SEO-friendly {content_label} about {target_keyword}";

/// Appended to the generation prompt when an industry is selected.
/// Replace: {industry_name}, {industry_keywords}
pub const INDUSTRY_FOCUS_TEMPLATE: &str = "\n\nThe audience works in the {industry_name} industry. \
    Where it fits naturally, also cover these related topics: {industry_keywords}.";

/// System prompt for revising existing copy against analyzer suggestions.
pub const REVISION_SYSTEM: &str = "You are an expert SEO editor. \
    You improve existing marketing content while keeping its meaning, facts and structure.";

/// Revision prompt template.
/// Replace: {target_keyword}, {suggestions}, {content} (content last)
pub const REVISION_PROMPT_TEMPLATE: &str = r#"Revise the content below for the target keyword "{target_keyword}".

Address every one of these issues found by our SEO analysis:
{suggestions}

CONTENT:
{content}"#;
