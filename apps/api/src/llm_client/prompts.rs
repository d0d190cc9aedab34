// Shared prompt fragments.
// Each service that needs model calls defines its own prompts.rs alongside it;
// this file holds the pieces they have in common.

/// System prompt fragment that asks for Markdown and nothing else.
pub const MARKDOWN_ONLY_SYSTEM: &str = "You are a precise, practical assistant. \
    Respond in GitHub-flavored Markdown. \
    Do NOT wrap the whole answer in a code fence. \
    Do NOT include apologies or meta commentary about being an AI.";

/// Keeps feedback tied to the text the user actually supplied.
pub const GROUNDING_INSTRUCTION: &str = "\
    CRITICAL: Only reference experience, employers, and numbers that appear in the \
    resume text provided. Do NOT invent achievements or metrics. \
    When suggesting a rewrite, keep every fact from the original bullet.";
