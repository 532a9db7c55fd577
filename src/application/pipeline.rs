//! # Digest Pipeline
//!
//! Fetch, generate, compose and deliver one digest.
//!
//! The feed reader and the five generator sections run concurrently and are joined
//! before composition. A failed focus suggestion short-circuits the join and the run
//! is aborted without sending. Only one run may be in flight: a trigger that arrives
//! while another run holds the guard is dropped and reported as [`RunOutcome::Busy`].

use anyhow::Result;
use chrono::{Local, NaiveDate};
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::application::composer;
use crate::application::feed::FeedReader;
use crate::application::generator::ContentGenerator;
use crate::domain::traits::ChatProvider;
use crate::domain::types::{MessageFormat, RunOutcome};
use crate::strings::logs;

pub struct DigestPipeline {
    reader: FeedReader,
    generator: ContentGenerator,
    chat: Arc<dyn ChatProvider>,
    running: Mutex<()>,
}

impl DigestPipeline {
    pub fn new(reader: FeedReader, generator: ContentGenerator, chat: Arc<dyn ChatProvider>) -> Self {
        Self {
            reader,
            generator,
            chat,
            running: Mutex::new(()),
        }
    }

    /// Room the digest is delivered to.
    pub fn room_id(&self) -> String {
        self.chat.room_id()
    }

    /// Run the pipeline for today's local date.
    pub async fn run(&self) -> RunOutcome {
        self.run_for(Local::now().date_naive()).await
    }

    pub async fn run_for(&self, date: NaiveDate) -> RunOutcome {
        let Ok(_guard) = self.running.try_lock() else {
            return RunOutcome::Busy;
        };

        let text = match self.build_digest(date).await {
            Ok(text) => text,
            Err(e) => {
                tracing::error!("{}", logs::digest_aborted(&format!("{e:#}")));
                return RunOutcome::Aborted;
            }
        };

        match self.chat.send_message(&text, MessageFormat::Markdown).await {
            Ok(_) => {
                tracing::info!("{}", logs::MESSAGE_SENT);
                RunOutcome::Delivered
            }
            Err(e) => {
                tracing::error!("{}", logs::send_failed(&e));
                RunOutcome::DeliveryFailed
            }
        }
    }

    pub async fn build_digest(&self, date: NaiveDate) -> Result<String> {
        let (headlines, insight, focus, trivia, pattern, tool) = tokio::try_join!(
            async { Ok::<_, anyhow::Error>(self.reader.headlines().await) },
            async { Ok::<_, anyhow::Error>(self.generator.insight().await) },
            self.generator.focus(),
            async { Ok::<_, anyhow::Error>(self.generator.trivia().await) },
            async { Ok::<_, anyhow::Error>(self.generator.pattern().await) },
            async { Ok::<_, anyhow::Error>(self.generator.tool().await) },
        )?;

        Ok(composer::compose(
            &headlines, &insight, &focus, &trivia, &pattern, &tool, date,
        ))
    }
}
