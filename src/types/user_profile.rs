use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

fn default_level() -> u32 {
    1
}

fn default_streak() -> u32 {
    1
}

/// The full user progress aggregate served by the backend.
///
/// Every field carries a default so a sparse or partially broken response
/// still decodes; `UserProfile::default()` doubles as the fallback object
/// displayed when the backend cannot be reached at all.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserProfile {
    /// Current level.
    #[serde(default = "default_level")]
    pub level: u32,

    /// Experience points toward the next level.
    #[serde(default)]
    pub xp: u32,

    /// Career coins balance.
    #[serde(default)]
    pub coins: u32,

    /// Earned badge identifiers.
    #[serde(default)]
    pub badges: Vec<String>,

    /// Identifiers of completed quests.
    #[serde(default)]
    pub completed_quests: Vec<u32>,

    /// The selected career path, if any.
    #[serde(default)]
    pub career_path: Option<String>,

    /// Per-skill progress, 0-100.
    #[serde(default)]
    pub skills_progress: BTreeMap<String, u32>,

    /// Identifiers of goals the user has opted into.
    #[serde(default)]
    pub selected_goals: Vec<String>,

    /// Identifiers of goals the user has completed.
    #[serde(default)]
    pub completed_goals: Vec<String>,

    /// Consecutive daily logins.
    #[serde(default = "default_streak")]
    pub daily_streak: u32,

    /// Lifetime count of completed quests.
    #[serde(default)]
    pub total_quests_completed: u32,

    /// Lifetime XP earned.
    #[serde(default)]
    pub total_xp_earned: u32,

    /// Lifetime coins earned.
    #[serde(default)]
    pub total_coins_earned: u32,

    /// Last login timestamp as reported by the backend.
    #[serde(default)]
    pub last_login: String,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            level: default_level(),
            xp: 0,
            coins: 0,
            badges: Vec::new(),
            completed_quests: Vec::new(),
            career_path: None,
            skills_progress: BTreeMap::new(),
            selected_goals: Vec::new(),
            completed_goals: Vec::new(),
            daily_streak: default_streak(),
            total_quests_completed: 0,
            total_xp_earned: 0,
            total_coins_earned: 0,
            last_login: String::new(),
        }
    }
}
