use serde::{Deserialize, Serialize};

use crate::domain::story::StoryNode;

// Where a scenario record came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScenarioSource {
    Predefined,
    AiGenerated,
    FileGenerated,
}

// Metadata describing one playable story instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    pub id: String,
    pub title: String,
    pub description: String,
    pub theme: String,
    pub difficulty: String,
    pub complexity: String,
    #[serde(rename = "estimatedPlayTime")]
    pub estimated_play_time: u32,
    pub source: ScenarioSource,
    pub created_at: String,
}

// A scenario together with its story graph and the echoed upload preview.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedScenario {
    #[serde(flatten)]
    pub scenario: Scenario,
    #[serde(rename = "fileContent")]
    pub file_content: Option<String>,
    #[serde(rename = "storyNodes")]
    pub story_nodes: Vec<StoryNode>,
}

// Estimated play time in minutes for a difficulty label.
pub fn estimated_play_time(difficulty: &str) -> u32 {
    match difficulty {
        "easy" => 30,
        "hard" => 90,
        _ => 60,
    }
}

// Complexity label shown next to the difficulty.
pub fn complexity_for(difficulty: &str) -> &'static str {
    match difficulty {
        "easy" => "simple",
        "hard" => "complex",
        _ => "moderate",
    }
}
