// Domain layer: scenario, story and session entities plus ports.

pub mod errors;
pub mod ports;
pub mod scenario;
pub mod session;
pub mod story;

pub use errors::{CatalogError, RequestError};
pub use ports::{Clock, ScenarioCatalog};
pub use scenario::{GeneratedScenario, Scenario, ScenarioSource};
pub use session::MultiplayerSession;
pub use story::{StoryChoice, StoryGraph, StoryNode};
