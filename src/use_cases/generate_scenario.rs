use uuid::Uuid;

use crate::domain::ports::Clock;
use crate::domain::scenario::{
    GeneratedScenario, Scenario, ScenarioSource, complexity_for, estimated_play_time,
};
use crate::use_cases::story_template::{START_NODE_ID, fixed_story_graph};

pub const DEFAULT_THEME: &str = "fantasy";
pub const DEFAULT_DIFFICULTY: &str = "medium";
// Uploaded text longer than this many characters is cut and suffixed with "...".
pub const FILE_CONTENT_PREVIEW_CHARS: usize = 200;

// Input for scenario generation. Every field is optional.
#[derive(Debug, Default)]
pub struct ScenarioPrompt {
    pub theme: Option<String>,
    pub difficulty: Option<String>,
    pub file_content: Option<String>,
}

// Scenario generation use case with an injected clock.
pub struct GenerateScenarioUseCase<C> {
    pub clock: C,
}

impl<C> GenerateScenarioUseCase<C>
where
    C: Clock,
{
    pub fn execute(&self, prompt: ScenarioPrompt) -> GeneratedScenario {
        let theme = or_default(prompt.theme, DEFAULT_THEME);
        let difficulty = or_default(prompt.difficulty, DEFAULT_DIFFICULTY);
        let file_content = prompt.file_content.as_deref().map(truncate_file_content);

        let source = if file_content.is_some() {
            ScenarioSource::FileGenerated
        } else {
            ScenarioSource::AiGenerated
        };

        let graph = fixed_story_graph(&theme, &difficulty);
        debug_assert!(graph.node(START_NODE_ID).is_some());
        debug_assert!(graph.dangling_links().is_empty());

        let scenario = Scenario {
            id: format!("ai_{}", Uuid::new_v4().simple()),
            title: format!("The {} Chronicle", capitalize(&theme)),
            description: format!(
                "A {difficulty} {theme} adventure where every choice shapes your fate."
            ),
            complexity: complexity_for(&difficulty).to_string(),
            estimated_play_time: estimated_play_time(&difficulty),
            source,
            created_at: self.clock.timestamp(),
            theme,
            difficulty,
        };

        GeneratedScenario {
            scenario,
            file_content,
            story_nodes: graph.into_nodes(),
        }
    }
}

// Keep at most `FILE_CONTENT_PREVIEW_CHARS` characters, appending "..." when cut.
pub fn truncate_file_content(content: &str) -> String {
    match content.char_indices().nth(FILE_CONTENT_PREVIEW_CHARS) {
        Some((cut, _)) => format!("{}...", &content[..cut]),
        None => content.to_string(),
    }
}

// Absent and blank values both fall back.
fn or_default(value: Option<String>, fallback: &str) -> String {
    value
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| fallback.to_string())
}

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
