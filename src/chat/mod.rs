//! Chat application module for interactive sessions against the relay.
//!
//! This module provides the terminal interaction surface built on top of
//! the uplink client library. It supports:
//!
//! - Session lifecycle control with `/connect`
//! - Character-paced display of replies via the reveal stream
//! - ANSI-styled speaker tags
//! - Slash commands for session inspection
//!
//! # Architecture
//!
//! The module is organized into several components:
//!
//! - [`config`]: CLI argument parsing and configuration
//! - [`commands`]: Slash command parsing and handling
//! - [`render`]: Terminal output rendering
//!
//! The session state machine itself lives in [`crate::session`]; this
//! module only binds user input to it and reflects its state back out.

mod commands;
mod config;
mod render;

pub use commands::{ChatCommand, help_text, parse_command};
pub use config::{ChatArgs, ChatConfig};
pub use render::{PlainTextRenderer, Renderer};
