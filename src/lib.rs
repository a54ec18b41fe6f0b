// Public modules
pub mod chat;
pub mod client;
pub mod conversation;
pub mod error;
pub mod observability;
pub mod render;
pub mod transcript;
pub mod types;

// Re-exports
pub use client::Cosmos;
pub use conversation::{Conversation, NavigatorApi, TurnOutcome};
pub use error::{Error, Result};
pub use render::{PlainTextRenderer, Renderer, render_transcript, sanitize};
pub use transcript::Transcript;
pub use types::*;
