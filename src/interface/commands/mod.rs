//! # Command Handlers
//!
//! Contains the handler functions for each supported command.
//! These handlers are invoked by the Router.

pub mod now;
