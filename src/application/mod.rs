//! # Application Layer
//!
//! Contains the core logic and orchestration of the bot.
//! This includes the feed reader, content generation, composition, the run pipeline,
//! the daily scheduler and command routing.

pub mod composer;
pub mod feed;
pub mod generator;
pub mod pipeline;
pub mod router;
pub mod scheduler;
