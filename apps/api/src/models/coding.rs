use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

/// A programming challenge from the static catalog, as handed to callers and persisted
/// inside an analysis. Only ever selected from the catalog, never authored at runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodingQuestion {
    pub id: String,
    pub question: String,
    pub difficulty: Difficulty,
    pub category: String,
    pub tags: Vec<String>,
    pub solution: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code_example: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_complexity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub space_complexity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub hints: Vec<String>,
}
