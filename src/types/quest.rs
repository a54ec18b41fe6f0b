use serde::{Deserialize, Serialize};

/// A quest from the mission catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Quest {
    /// Quest identifier.
    pub id: u32,
    /// Display name.
    pub name: String,
    /// XP awarded on completion.
    pub xp: u32,
    /// Coins awarded on completion.
    pub coins: u32,
    /// The skill this quest trains.
    pub skill: String,
    /// Quest category (education, reading, social, practice, ...).
    #[serde(rename = "type")]
    pub kind: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialization() {
        let json = r#"{"id":1,"name":"Complete Python course","xp":100,"coins":50,"skill":"Python","type":"education"}"#;
        let quest: Quest = serde_json::from_str(json).unwrap();
        assert_eq!(quest.id, 1);
        assert_eq!(quest.kind, "education");
        assert_eq!(quest.skill, "Python");
    }
}
