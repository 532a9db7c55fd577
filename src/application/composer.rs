//! # Digest Composer
//!
//! Pure formatting of the digest message. Output depends only on the inputs.

use chrono::NaiveDate;

use crate::domain::types::DigestMessage;
use crate::strings::messages;

/// `"Wednesday, October 14"`
pub fn date_label(date: NaiveDate) -> String {
    date.format("%A, %B %-d").to_string()
}

pub fn compose(
    headlines: &[String],
    insight: &str,
    focus: &str,
    trivia: &str,
    pattern: &str,
    tool: &str,
    date: NaiveDate,
) -> String {
    DigestMessage {
        date_label: date_label(date),
        headlines: headlines.to_vec(),
        insight: insight.to_string(),
        focus: focus.to_string(),
        trivia: trivia.to_string(),
        pattern: pattern.to_string(),
        tool: tool.to_string(),
    }
    .render()
}

impl DigestMessage {
    /// Render as Markdown. An empty headline list yields a single empty bullet.
    pub fn render(&self) -> String {
        let sections = [
            messages::digest_header(&self.date_label),
            format!(
                "{}\n- {}",
                messages::HEADLINES_LABEL,
                self.headlines.join("\n- ")
            ),
            format!("{}\n_{}_", messages::INSIGHT_LABEL, self.insight),
            format!("{}\n{}", messages::FOCUS_LABEL, self.focus),
            format!("{}\n{}", messages::TRIVIA_LABEL, self.trivia),
            format!("{}\n{}", messages::PATTERN_LABEL, self.pattern),
            format!("{}\n{}", messages::TOOL_LABEL, self.tool),
        ];
        sections.join("\n\n")
    }
}
