use serde::{Deserialize, Serialize};

/// A career path from the catalog.
///
/// The backend serves paths as a map of name to this value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CareerPath {
    /// The skills this path develops.
    pub skills: Vec<String>,
    /// A one-line description of the role.
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn catalog_map_deserialization() {
        let json = r#"{
            "Data Scientist": {
                "skills": ["Python", "SQL"],
                "description": "Specialist in data analysis and ML model building"
            }
        }"#;
        let paths: BTreeMap<String, CareerPath> = serde_json::from_str(json).unwrap();
        assert_eq!(paths["Data Scientist"].skills, vec!["Python", "SQL"]);
    }
}
