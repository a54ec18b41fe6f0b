use serde::{Deserialize, Serialize};

/// Who authored a chat message.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    /// The person driving the conversation.
    User,
    /// The AI navigator.
    Agent,
}

/// The kind of a chat message.
///
/// Plain messages and final plans carry only their text; questions also carry
/// the ordered set of answer options offered to the user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MessageKind {
    /// An ordinary conversational message.
    Plain,

    /// A follow-up question with selectable answer options.
    Question {
        /// Answer options, in the order the navigator offered them.
        options: Vec<String>,
    },

    /// The terminal message carrying the generated career plan.
    FinalPlan,
}

impl MessageKind {
    /// Returns true if this is a plain message.
    pub fn is_plain(&self) -> bool {
        matches!(self, MessageKind::Plain)
    }

    /// Returns true if this is a question with options.
    pub fn is_question(&self) -> bool {
        matches!(self, MessageKind::Question { .. })
    }

    /// Returns true if this is a final plan.
    pub fn is_final_plan(&self) -> bool {
        matches!(self, MessageKind::FinalPlan)
    }

    /// Returns the answer options if this is a question, or None otherwise.
    pub fn options(&self) -> Option<&[String]> {
        match self {
            MessageKind::Question { options } => Some(options),
            _ => None,
        }
    }
}

/// One entry in a conversation transcript.
///
/// Messages are immutable once appended to a [`Transcript`](crate::Transcript).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatMessage {
    /// The message text.
    pub text: String,
    /// Who authored the message.
    pub sender: Sender,
    /// What kind of message this is.
    #[serde(flatten)]
    pub kind: MessageKind,
}

impl ChatMessage {
    /// Creates a plain message from the user.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sender: Sender::User,
            kind: MessageKind::Plain,
        }
    }

    /// Creates a plain message from the navigator.
    pub fn agent(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sender: Sender::Agent,
            kind: MessageKind::Plain,
        }
    }

    /// Creates a question message from the navigator.
    pub fn question(text: impl Into<String>, options: Vec<String>) -> Self {
        Self {
            text: text.into(),
            sender: Sender::Agent,
            kind: MessageKind::Question { options },
        }
    }

    /// Creates a final-plan message from the navigator.
    pub fn final_plan(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sender: Sender::Agent,
            kind: MessageKind::FinalPlan,
        }
    }
}
