//! # Command Router
//!
//! Routes incoming messages to the appropriate command handler (in `interface/commands`).
//! Only `/now` is recognised; every other message is ignored.

use anyhow::Result;
use std::sync::Arc;

use crate::application::pipeline::DigestPipeline;
use crate::domain::traits::ChatProvider;
use crate::domain::types::RunOutcome;
use crate::interface::commands;
use crate::strings::messages;

pub struct CommandRouter {
    pipeline: Arc<DigestPipeline>,
}

impl CommandRouter {
    pub fn new(pipeline: Arc<DigestPipeline>) -> Self {
        Self { pipeline }
    }

    pub async fn route<C>(&self, chat: &C, message: &str, sender: &str) -> Result<Option<RunOutcome>>
    where
        C: ChatProvider,
    {
        let msg = message.trim();
        let cmd = msg.split_whitespace().next().unwrap_or_default();

        if !is_now_command(cmd) {
            return Ok(None);
        }

        tracing::info!(
            "Router dispatching cmd='{}' room='{}' sender='{}'",
            cmd,
            chat.room_id(),
            sender
        );
        commands::now::handle_now(&self.pipeline, chat, sender).await
    }
}

/// `/now`, optionally addressed as `/now@botname`.
fn is_now_command(token: &str) -> bool {
    token.split('@').next() == Some(messages::NOW_COMMAND)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::feed::FeedReader;
    use crate::application::generator::ContentGenerator;
    use crate::domain::types::MessageFormat;
    use crate::strings::prompts::FOCUS_PROMPT;
    use crate::test_support::{MockChat, MockFeeds, MockLlm};

    const DIGEST_ROOM: &str = "!digest:example.org";
    const OTHER_ROOM: &str = "!elsewhere:example.org";

    fn setup() -> (CommandRouter, Arc<MockChat>, Arc<MockLlm>) {
        let digest_chat = Arc::new(MockChat::new(DIGEST_ROOM));
        let llm = Arc::new(MockLlm::new().reply(FOCUS_PROMPT, "Ship one small thing today."));
        let reader = FeedReader::new(
            Arc::new(MockFeeds::new().item("https://a.example/feed", "T1", "L1")),
            vec!["https://a.example/feed".to_string()],
            3,
        );
        let pipeline = DigestPipeline::new(
            reader,
            ContentGenerator::new(llm.clone(), "gpt-4"),
            digest_chat.clone(),
        );
        (CommandRouter::new(Arc::new(pipeline)), digest_chat, llm)
    }

    #[test]
    fn test_command_matching() {
        assert!(is_now_command("/now"));
        assert!(is_now_command("/now@briefing"));
        assert!(!is_now_command("now"));
        assert!(!is_now_command("/nowhere"));
        assert!(!is_now_command("/status"));
        assert!(!is_now_command(""));
    }

    #[tokio::test]
    async fn test_authorized_trigger_runs_pipeline() {
        let (router, digest_chat, llm) = setup();

        let outcome = router
            .route(digest_chat.as_ref(), "/now", "@alice:example.org")
            .await
            .unwrap();

        assert_eq!(outcome, Some(RunOutcome::Delivered));
        assert_eq!(llm.calls(), 5);
        let sent = digest_chat.sent();
        assert_eq!(sent.len(), 1);
        assert!(sent[0].0.contains("- T1 - L1"));
        assert_eq!(sent[0].1, MessageFormat::Markdown);
    }

    #[tokio::test]
    async fn test_unauthorized_room_gets_one_reply_and_no_run() {
        let (router, digest_chat, llm) = setup();
        let stranger = MockChat::new(OTHER_ROOM);

        let outcome = router
            .route(&stranger, "  /now please ", "@mallory:example.org")
            .await
            .unwrap();

        assert_eq!(outcome, None);
        assert_eq!(
            stranger.sent(),
            vec![(messages::UNAUTHORIZED.to_string(), MessageFormat::Plain)]
        );
        assert_eq!(llm.calls(), 0);
        assert!(digest_chat.sent().is_empty());
    }

    #[tokio::test]
    async fn test_other_messages_ignored() {
        let (router, digest_chat, llm) = setup();

        for text in ["hello", "what is /now?", "", ".help"] {
            let outcome = router.route(digest_chat.as_ref(), text, "@alice:example.org").await.unwrap();
            assert_eq!(outcome, None);
        }
        assert!(digest_chat.sent().is_empty());
        assert_eq!(llm.calls(), 0);
    }
}
