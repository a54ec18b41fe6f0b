//! The conversation transcript.
//!
//! A transcript is the ordered list of displayed chat messages for the
//! current session. It is strictly append-only: messages are never edited,
//! removed, or reordered, and a new session starts from an empty transcript.

use crate::types::{ChatMessage, MessageKind, Sender};

/// An append-only, chronologically ordered sequence of chat messages.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
}

impl Transcript {
    /// Creates an empty transcript.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a message and returns a reference to it.
    pub fn push(&mut self, message: ChatMessage) -> &ChatMessage {
        self.messages.push(message);
        self.messages.last().expect("transcript is non-empty")
    }

    /// Appends a plain user message.
    pub fn push_user(&mut self, text: impl Into<String>) -> &ChatMessage {
        self.push(ChatMessage::user(text))
    }

    /// Appends a plain navigator message.
    pub fn push_agent(&mut self, text: impl Into<String>) -> &ChatMessage {
        self.push(ChatMessage::agent(text))
    }

    /// Appends a navigator question with its answer options.
    pub fn push_question(
        &mut self,
        text: impl Into<String>,
        options: Vec<String>,
    ) -> &ChatMessage {
        self.push(ChatMessage::question(text, options))
    }

    /// Appends a navigator final-plan message.
    pub fn push_final_plan(&mut self, text: impl Into<String>) -> &ChatMessage {
        self.push(ChatMessage::final_plan(text))
    }

    /// Returns the messages in chronological order.
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Returns the number of messages.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Returns true if the transcript has no messages.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Returns the most recent message, if any.
    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    /// Returns the options of the most recent navigator question, if the
    /// question has not yet been answered by a later navigator turn.
    ///
    /// Used to map a bare option selection onto the question it answers.
    pub fn pending_options(&self) -> Option<&[String]> {
        for message in self.messages.iter().rev() {
            if message.sender == Sender::Agent {
                return match &message.kind {
                    MessageKind::Question { options } => Some(options.as_slice()),
                    _ => None,
                };
            }
        }
        None
    }
}
