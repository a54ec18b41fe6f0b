use serde::{Deserialize, Serialize};

/// A follow-up question from the navigator.
///
/// The options are ordered and each is a complete answer: selecting one sends
/// its literal text back as the next message.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuestionTurn {
    /// The question text.
    pub text: String,
    /// Answer options, in the order offered.
    #[serde(default)]
    pub options: Vec<String>,
}

impl QuestionTurn {
    /// Creates a new question turn.
    pub fn new(text: impl Into<String>, options: Vec<String>) -> Self {
        Self {
            text: text.into(),
            options,
        }
    }
}
