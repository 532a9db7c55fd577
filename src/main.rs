//! # Main Entry Point
//!
//! Wires the daily briefing bot together:
//! - Domain: Configuration, Types and Traits
//! - Infrastructure: Matrix, Feeds, LLM
//! - Application: Feed Reader, Generator, Composer, Pipeline, Scheduler, Router
//! - Interface: Command Handlers
//!

mod application;
mod domain;
mod infrastructure;
mod interface;
mod strings;
#[cfg(test)]
mod test_support;

use anyhow::{Context, Result};
use clap::Parser;
use matrix_sdk::{
    Client,
    config::SyncSettings,
    room::Room,
    ruma::RoomId,
    ruma::events::room::{
        member::{MembershipState, StrippedRoomMemberEvent},
        message::{MessageType, SyncRoomMessageEvent},
    },
};
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use crate::application::feed::FeedReader;
use crate::application::generator::ContentGenerator;
use crate::application::pipeline::DigestPipeline;
use crate::application::router::CommandRouter;
use crate::application::scheduler::{DailySchedule, Scheduler};
use crate::domain::config::{AppConfig, DEFAULT_CONFIG_PATH};
use crate::domain::types::RunOutcome;
use crate::infrastructure::feeds::HttpFeedSource;
use crate::infrastructure::llm::{Client as LlmClient, ProviderConfig};
use crate::infrastructure::matrix::MatrixService;
use crate::strings::logs;

/// Daily developer briefing bot for Matrix.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Path to the YAML configuration file
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Build and send one briefing, then exit
    #[arg(long)]
    once: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // 1. Load Configuration
    dotenvy::dotenv().ok();
    let config = AppConfig::load(&args.config)?;

    // 2. Logging Setup
    if !std::path::Path::new("data").exists() {
        fs::create_dir("data").context("Failed to create data directory")?;
    }

    // Clear previous session log
    let log_path = std::path::Path::new("data/briefing.log");
    if log_path.exists() {
        let _ = fs::remove_file(log_path);
    }

    let file_appender = tracing_appender::rolling::never("data", "briefing.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(
            "info,matrix_sdk=warn,matrix_sdk_base=warn,matrix_sdk_crypto=error,ruma=warn,hyper=warn,reqwest=warn",
        )
    });

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false);
    let console_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stdout);

    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(console_layer)
        .init();

    let matrix = &config.services.matrix;
    tracing::info!("{}", logs::config_loaded(&matrix.username, &matrix.room_id));

    // 3. Initialize Infrastructure
    let provider_config = ProviderConfig::from_completion_config(&config.services.openai)?;
    let llm = Arc::new(LlmClient::new(provider_config)?);
    let feeds = Arc::new(HttpFeedSource::new()?);
    let schedule = DailySchedule::parse(&config.digest.time)?;

    // 4. Matrix Setup
    let client = Client::builder()
        .homeserver_url(&matrix.homeserver)
        .build()
        .await?;

    client
        .matrix_auth()
        .login_username(&matrix.username, &matrix.password()?)
        .initial_device_display_name("briefing")
        .send()
        .await
        .context("Matrix login failed")?;
    tracing::info!("{}", logs::LOGIN_SUCCESS);

    if let Some(name) = &matrix.display_name {
        tracing::info!("{}", logs::setting_display_name(name));
        if let Err(e) = client.account().set_display_name(Some(name.as_str())).await {
            tracing::warn!("{}", logs::set_display_name_fail(&e.to_string()));
        }
    }

    // Initial sync: learn joined rooms and skip the message backlog
    let initial = client
        .sync_once(SyncSettings::default())
        .await
        .context("Initial sync failed")?;

    let digest_room = match MatrixService::for_room_id(&client, &matrix.room_id) {
        Ok(service) => service,
        Err(_) => {
            let room_id = RoomId::parse(&matrix.room_id)
                .with_context(|| format!("Invalid room id {}", matrix.room_id))?;
            let room = client
                .join_room_by_id(&room_id)
                .await
                .with_context(|| format!("Failed to join digest room {}", matrix.room_id))?;
            MatrixService::new(room)
        }
    };

    // 5. Application Components
    let reader = FeedReader::new(
        feeds,
        config.digest.feeds.clone(),
        config.digest.headline_limit,
    );
    let model = llm.default_model().to_string();
    let generator = ContentGenerator::new(llm, model);
    let pipeline = Arc::new(DigestPipeline::new(reader, generator, Arc::new(digest_room)));

    if args.once {
        let outcome = pipeline.run().await;
        tracing::info!("One-shot briefing finished: {:?}", outcome);
        return Ok(());
    }

    // 6. Daily Timer
    tracing::info!("Daily briefing scheduled at {} local time", schedule.at().format("%H:%M"));
    let sched_pipeline = pipeline.clone();
    tokio::spawn(async move {
        Scheduler::local(schedule)
            .run(|| {
                let pipeline = sched_pipeline.clone();
                async move {
                    if pipeline.run().await == RunOutcome::Busy {
                        tracing::warn!("{}", logs::SCHEDULED_RUN_SKIPPED);
                    }
                }
            })
            .await;
    });

    // 7. Event Handlers
    let router = Arc::new(CommandRouter::new(pipeline.clone()));

    client.add_event_handler(move |ev: SyncRoomMessageEvent, room: Room| {
        let router = router.clone();

        async move {
            let Some(original_msg) = ev.as_original() else {
                return;
            };
            if original_msg.sender == room.own_user_id() {
                return;
            }

            if let MessageType::Text(text_content) = &original_msg.content.msgtype {
                let chat = MatrixService::new(room);
                match router
                    .route(&chat, &text_content.body, original_msg.sender.as_str())
                    .await
                {
                    Ok(Some(outcome)) => tracing::info!("Manual briefing finished: {:?}", outcome),
                    Ok(None) => {}
                    Err(e) => tracing::error!("Failed to route message: {}", e),
                }
            }
        }
    });

    // Handle Invites
    client.add_event_handler(|ev: StrippedRoomMemberEvent, room: Room| async move {
        if ev.content.membership == MembershipState::Invite {
            tracing::info!("{}", logs::invite_received(room.room_id().as_str()));
            if let Err(e) = room.join().await {
                tracing::warn!("{}", logs::join_invite_fail(&e.to_string()));
            }
        }
    });

    // 8. Sync Loop
    tracing::info!("{}", logs::SYNC_LOOP_START);
    let settings = SyncSettings::default().token(initial.next_batch);
    if let Err(e) = client.sync(settings).await {
        tracing::error!("{}", logs::sync_loop_fail(&e.to_string()));
    }

    Ok(())
}
