//! Chat application module for talking to the AI navigator.
//!
//! This module provides the terminal front-end built on top of the cosmos
//! client library. It supports:
//!
//! - Free-text messages and numeric selection of question options
//! - Slash commands for inspecting quests, goals, and the user profile
//! - Configurable backend URL and session id
//!
//! # Architecture
//!
//! The module is organized into two components:
//!
//! - [`config`]: CLI argument parsing and configuration
//! - [`commands`]: Slash command parsing and handling
//!
//! The conversation itself lives in [`crate::conversation`].

mod commands;
mod config;

pub use crate::render::{PlainTextRenderer, Renderer};
pub use commands::{ChatCommand, help_text, parse_command};
pub use config::{ChatArgs, ChatConfig};
