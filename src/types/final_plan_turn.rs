use serde::{Deserialize, Serialize};

/// The terminal turn carrying a generated career plan.
///
/// The text may contain embedded newlines intended as hard line breaks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FinalPlanTurn {
    /// The plan text.
    pub text: String,
}

impl FinalPlanTurn {
    /// Creates a new final-plan turn.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}
