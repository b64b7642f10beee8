// Shared prompt fragments.
// Each service that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting prompt fragments.

/// Instruction that keeps generated copy free of chat framing.
pub const PLAIN_OUTPUT_INSTRUCTION: &str = "\
    Respond with the finished text only. \
    Do NOT add a preamble, closing remarks, or notes about what you changed. \
    Do NOT wrap the text in code fences.";

/// Instruction that keeps keyword usage readable.
pub const NATURAL_KEYWORD_INSTRUCTION: &str = "\
    Use the target keyword naturally as a standalone word. \
    Do NOT keyword-stuff. \
    Prefer short sentences and common words so the text stays easy to read.";
