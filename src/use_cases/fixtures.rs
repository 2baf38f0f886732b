use crate::domain::ports::Clock;
use crate::domain::scenario::{Scenario, ScenarioSource, complexity_for, estimated_play_time};
use crate::domain::session::MultiplayerSession;

// The single canned "ai_generated" scenario. Built fresh per request.
pub fn ai_scenarios(clock: &impl Clock) -> Vec<Scenario> {
    let difficulty = "medium";
    vec![Scenario {
        id: "ai_1".to_string(),
        title: "The Cursed Lighthouse".to_string(),
        description: "A lighthouse keeper vanished on a stormy night. The light still burns."
            .to_string(),
        theme: "mystery".to_string(),
        difficulty: difficulty.to_string(),
        complexity: complexity_for(difficulty).to_string(),
        estimated_play_time: estimated_play_time(difficulty),
        source: ScenarioSource::AiGenerated,
        created_at: clock.timestamp(),
    }]
}

// Mock lobby listing.
pub fn multiplayer_sessions() -> Vec<MultiplayerSession> {
    vec![
        session("session_1", "Dragon's Lair Raid", 3, 6),
        session("session_2", "Midnight Heist", 2, 4),
        session("session_3", "Haunted Expedition", 5, 5),
    ]
}

fn session(id: &str, name: &str, players: u32, max_players: u32) -> MultiplayerSession {
    MultiplayerSession {
        id: id.to_string(),
        name: name.to_string(),
        players,
        max_players,
    }
}
