use serde::Serialize;

// Mock multiplayer session listing entry. Never mutated.
#[derive(Debug, Clone, Serialize)]
pub struct MultiplayerSession {
    pub id: String,
    pub name: String,
    pub players: u32,
    #[serde(rename = "maxPlayers")]
    pub max_players: u32,
}

impl MultiplayerSession {
    pub fn is_full(&self) -> bool {
        self.players >= self.max_players
    }
}
