use serde::{Deserialize, Serialize};

/// A plain conversational turn with no further structure.
///
/// Responses with an unrecognized or absent `type` tag decode as this variant
/// as long as they carry a string `text` field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlainTurn {
    /// The message text.
    pub text: String,
}

impl PlainTurn {
    /// Creates a new plain turn.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}
