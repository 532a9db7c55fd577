//! # Prompts
//!
//! Fixed completion prompts for each digest section, and the fallback text used
//! when a section cannot be generated.

use crate::domain::types::SnippetKind;

pub const INSIGHT_PROMPT: &str =
    "Share one interesting fact or insight about programming, software development, or computer science.";
pub const FOCUS_PROMPT: &str =
    "Give me one specific and actionable focus suggestion for a software developer today.";
pub const TRIVIA_PROMPT: &str = "Give a fun, short programming trivia or fact.";
pub const PATTERN_PROMPT: &str =
    "Name one common software architecture pattern and describe it briefly.";
pub const TOOL_PROMPT: &str =
    "Recommend one lesser-known but useful developer tool or CLI utility.";

pub const INSIGHT_FALLBACK: &str = "Stay curious and keep building.";
pub const TRIVIA_FALLBACK: &str = "The first computer bug was an actual moth.";
pub const PATTERN_FALLBACK: &str = "MVC (Model-View-Controller) separates concerns in web apps.";
pub const TOOL_FALLBACK: &str = "Try `jq` – a powerful CLI JSON processor.";

pub fn prompt_for(kind: SnippetKind) -> &'static str {
    match kind {
        SnippetKind::Insight => INSIGHT_PROMPT,
        SnippetKind::Focus => FOCUS_PROMPT,
        SnippetKind::Trivia => TRIVIA_PROMPT,
        SnippetKind::Pattern => PATTERN_PROMPT,
        SnippetKind::Tool => TOOL_PROMPT,
    }
}

/// Focus has no fallback: a failed focus suggestion aborts the digest.
pub fn fallback_for(kind: SnippetKind) -> Option<&'static str> {
    match kind {
        SnippetKind::Insight => Some(INSIGHT_FALLBACK),
        SnippetKind::Focus => None,
        SnippetKind::Trivia => Some(TRIVIA_FALLBACK),
        SnippetKind::Pattern => Some(PATTERN_FALLBACK),
        SnippetKind::Tool => Some(TOOL_FALLBACK),
    }
}
