// Content generation collaborator.
// Implements: SEO copy generation, revision against analyzer suggestions, industry keywords.
// All LLM calls go through llm_client — no direct Gemini calls here.

pub mod generator;
pub mod handlers;
pub mod industry;
pub mod prompts;
