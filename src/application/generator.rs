//! # Content Generator
//!
//! Produces the generated sections of the digest, one completion per section.
//! Every section except the focus suggestion falls back to fixed text on failure.

use anyhow::{Result, anyhow};
use std::sync::Arc;

use crate::domain::traits::LlmProvider;
use crate::domain::types::SnippetKind;
use crate::strings::{logs, prompts};

pub struct ContentGenerator {
    llm: Arc<dyn LlmProvider>,
    model: String,
}

impl ContentGenerator {
    pub fn new(llm: Arc<dyn LlmProvider>, model: impl Into<String>) -> Self {
        Self {
            llm,
            model: model.into(),
        }
    }

    /// Run the section's prompt and return the trimmed first choice.
    pub async fn generate(&self, kind: SnippetKind) -> Result<String> {
        let text = self
            .llm
            .completion(prompts::prompt_for(kind), &self.model)
            .await
            .map_err(|e| anyhow!(e))?;
        Ok(text.trim().to_string())
    }

    /// Generate a section that has fallback text. Never fails; a blank reply
    /// counts as a failure.
    async fn generate_or_fallback(&self, kind: SnippetKind) -> String {
        let result = self.generate(kind).await.and_then(|text| {
            if text.is_empty() {
                Err(anyhow!("empty completion"))
            } else {
                Ok(text)
            }
        });
        match result {
            Ok(text) => text,
            Err(e) => {
                tracing::error!("{}", logs::snippet_failed(kind.as_str(), &e.to_string()));
                prompts::fallback_for(kind).unwrap_or_default().to_string()
            }
        }
    }

    pub async fn insight(&self) -> String {
        self.generate_or_fallback(SnippetKind::Insight).await
    }

    /// The only section without a fallback: errors reach the caller, a blank
    /// reply is returned as-is.
    pub async fn focus(&self) -> Result<String> {
        self.generate(SnippetKind::Focus).await
    }

    pub async fn trivia(&self) -> String {
        self.generate_or_fallback(SnippetKind::Trivia).await
    }

    pub async fn pattern(&self) -> String {
        self.generate_or_fallback(SnippetKind::Pattern).await
    }

    pub async fn tool(&self) -> String {
        self.generate_or_fallback(SnippetKind::Tool).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strings::prompts::*;
    use crate::test_support::MockLlm;

    fn generator(llm: MockLlm) -> ContentGenerator {
        ContentGenerator::new(Arc::new(llm), "gpt-4")
    }

    #[tokio::test]
    async fn test_output_is_trimmed() {
        let llm = MockLlm::new().reply(TRIVIA_PROMPT, "\n  COBOL is older than C.  \n");
        assert_eq!(generator(llm).trivia().await, "COBOL is older than C.");
    }

    #[tokio::test]
    async fn test_fallbacks_on_failure() {
        let g = generator(MockLlm::new().fail(INSIGHT_PROMPT, "HTTP 500"));
        assert_eq!(g.insight().await, INSIGHT_FALLBACK);
        assert_eq!(g.trivia().await, TRIVIA_FALLBACK);
        assert_eq!(g.pattern().await, PATTERN_FALLBACK);
        assert_eq!(g.tool().await, TOOL_FALLBACK);
    }

    #[tokio::test]
    async fn test_blank_completion_uses_fallback() {
        let g = generator(MockLlm::new().reply(TOOL_PROMPT, "   "));
        assert_eq!(g.tool().await, TOOL_FALLBACK);
    }

    #[tokio::test]
    async fn test_blank_focus_is_returned_empty() {
        let g = generator(MockLlm::new().reply(FOCUS_PROMPT, " \n\t "));
        assert_eq!(g.focus().await.unwrap(), "");
    }

    #[tokio::test]
    async fn test_focus_propagates_failure() {
        let g = generator(MockLlm::new().fail(FOCUS_PROMPT, "invalid api key"));
        let err = g.focus().await.unwrap_err();
        assert!(err.to_string().contains("invalid api key"));
    }

    #[tokio::test]
    async fn test_focus_success() {
        let g = generator(MockLlm::new().reply(FOCUS_PROMPT, "Ship one small thing today."));
        assert_eq!(g.focus().await.unwrap(), "Ship one small thing today.");
    }
}
