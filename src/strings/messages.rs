//! # Messages
//!
//! Contains constant strings for user-facing messages and the digest section labels.

pub const UNAUTHORIZED: &str = "⛔ Unauthorized user.";
pub const ALREADY_RUNNING: &str = "⏳ A briefing is already being prepared.";

pub const NOW_COMMAND: &str = "/now";

pub const DIGEST_TITLE: &str = "Daily Dev Briefing";
pub const HEADLINES_LABEL: &str = "📰 **Tech Headlines:**";
pub const INSIGHT_LABEL: &str = "🧠 **Insight of the Day:**";
pub const FOCUS_LABEL: &str = "🎯 **Focus Suggestion:**";
pub const TRIVIA_LABEL: &str = "🧩 **Fun Dev Trivia:**";
pub const PATTERN_LABEL: &str = "🏛️ **Architecture Pattern:**";
pub const TOOL_LABEL: &str = "🔧 **Tool You Should Know:**";

pub fn digest_header(date_label: &str) -> String {
    format!("📅 **{date_label}** – {DIGEST_TITLE}")
}
