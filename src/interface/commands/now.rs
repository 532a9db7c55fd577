//! # Now Command
//!
//! Handles the `/now` command.
//! Runs the briefing on demand when issued from the digest room; anyone else is refused.

use crate::application::pipeline::DigestPipeline;
use crate::domain::traits::ChatProvider;
use crate::domain::types::{MessageFormat, RunOutcome};
use crate::strings::{logs, messages};
use anyhow::Result;

/// Returns `None` when the trigger was refused.
pub async fn handle_now(
    pipeline: &DigestPipeline,
    chat: &impl ChatProvider,
    sender: &str,
) -> Result<Option<RunOutcome>> {
    if chat.room_id() != pipeline.room_id() {
        tracing::warn!("{}", logs::unauthorized_trigger(&chat.room_id(), sender));
        chat.send_message(messages::UNAUTHORIZED, MessageFormat::Plain)
            .await
            .map_err(|e| anyhow::anyhow!(e))?;
        return Ok(None);
    }

    let outcome = pipeline.run().await;
    if outcome == RunOutcome::Busy {
        chat.send_message(messages::ALREADY_RUNNING, MessageFormat::Plain)
            .await
            .map_err(|e| anyhow::anyhow!(e))?;
    }
    Ok(Some(outcome))
}
