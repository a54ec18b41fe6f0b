use serde::{Deserialize, Serialize};

use crate::types::UserProfile;

/// The backend's answer to a quest completion attempt.
///
/// A successful completion carries the updated profile; a rejected one
/// (already completed, unknown quest id) carries only a message.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuestOutcome {
    /// Whether the quest was completed and rewards granted.
    pub success: bool,

    /// Explanation when the completion was rejected.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// The updated profile after a successful completion.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_data: Option<UserProfile>,
}
