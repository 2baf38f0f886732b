// Use cases layer: scenario templating and mock fixtures.

pub mod fixtures;
pub mod generate_scenario;
pub mod read_file;
pub mod story_template;
#[cfg(test)]
pub(crate) mod test_support;

pub use generate_scenario::{GenerateScenarioUseCase, ScenarioPrompt};
pub use read_file::{FileEcho, read_file};
