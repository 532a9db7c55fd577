//! # Interface Layer
//!
//! Entry points for inbound chat commands.

pub mod commands;
