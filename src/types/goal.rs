use serde::{Deserialize, Serialize};

/// A goal from the goal catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Goal {
    /// Goal identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// XP awarded on completion.
    pub xp_reward: u32,
    /// Coins awarded on completion.
    pub coins_reward: u32,
    /// Goal category (progress, quests, achievements, ...).
    pub category: String,
}

/// The goal catalog, grouped by horizon.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GoalCatalog {
    /// Goals achievable in the near term.
    #[serde(default)]
    pub short_term: Vec<Goal>,
    /// Goals with a longer horizon.
    #[serde(default)]
    pub medium_term: Vec<Goal>,
}

impl GoalCatalog {
    /// Iterates over every goal in the catalog.
    pub fn iter(&self) -> impl Iterator<Item = &Goal> {
        self.short_term.iter().chain(self.medium_term.iter())
    }
}
