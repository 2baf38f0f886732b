use std::collections::BTreeMap;

use crate::domain::story::{StoryChoice, StoryGraph, StoryNode};

pub const START_NODE_ID: &str = "start";

// Build the fixed eight-node story graph. Only the prose changes with the
// theme and difficulty; ids, links and effects are always the same.
pub fn fixed_story_graph(theme: &str, difficulty: &str) -> StoryGraph {
    StoryGraph::new(vec![
        node(
            START_NODE_ID,
            "The Threshold",
            format!("Your {difficulty} {theme} journey begins where two paths vanish into mist."),
            vec![
                choice(
                    "start_investigate",
                    "Follow the strange lights",
                    "investigate",
                    &[("curiosity", 1)],
                ),
                choice(
                    "start_allies",
                    "Seek companions in the nearby village",
                    "gather_allies",
                    &[("charisma", 1)],
                ),
            ],
        ),
        node(
            "investigate",
            "Whispers in the Dark",
            format!("The lights lead you deeper into the {theme} wilds. Something whispers."),
            vec![
                choice(
                    "investigate_passage",
                    "Search for the source of the whispers",
                    "hidden_passage",
                    &[("courage", 1)],
                ),
                choice(
                    "investigate_guardian",
                    "Call out and demand answers",
                    "confront_guardian",
                    &[("strength", 1)],
                ),
            ],
        ),
        node(
            "gather_allies",
            "Unlikely Companions",
            format!("Wary locals join you, though they fear what this {theme} land hides."),
            vec![
                choice(
                    "allies_guardian",
                    "March together on the guardian's keep",
                    "confront_guardian",
                    &[("charisma", 1), ("strength", 1)],
                ),
                choice(
                    "allies_passage",
                    "Let a local guide you through a secret way",
                    "hidden_passage",
                    &[("wisdom", 1)],
                ),
            ],
        ),
        node(
            "hidden_passage",
            "The Hidden Passage",
            "A narrow tunnel winds beneath the earth, carved with forgotten runes.",
            vec![
                choice(
                    "passage_decipher",
                    "Decipher the runes",
                    "ancient_vault",
                    &[("wisdom", 2)],
                ),
                choice(
                    "passage_rush",
                    "Rush ahead before the torches fail",
                    "ambush",
                    &[("courage", -1)],
                ),
            ],
        ),
        node(
            "confront_guardian",
            "The Guardian's Challenge",
            format!("An ancient guardian bars the way. On {difficulty} its patience is thin."),
            vec![
                choice(
                    "guardian_fight",
                    "Draw your weapon",
                    "ancient_vault",
                    &[("strength", 2)],
                ),
                choice(
                    "guardian_retreat",
                    "Fall back into the shadows",
                    "ambush",
                    &[("health", -2)],
                ),
            ],
        ),
        node(
            "ambush",
            "Ambush!",
            "Figures burst from hiding. There is no time to think.",
            vec![
                choice(
                    "ambush_stand",
                    "Stand your ground",
                    "ancient_vault",
                    &[("courage", 2), ("health", -1)],
                ),
                choice(
                    "ambush_flee",
                    "Flee toward the distant light",
                    "finale",
                    &[("health", -3)],
                ),
            ],
        ),
        node(
            "ancient_vault",
            "The Ancient Vault",
            format!("The heart of the {theme} mystery lies before you, glittering."),
            vec![
                choice("vault_relic", "Take the relic", "finale", &[("gold", 5)]),
                choice(
                    "vault_seal",
                    "Seal the vault forever",
                    "finale",
                    &[("wisdom", 1)],
                ),
            ],
        ),
        node(
            "finale",
            "Finale",
            format!("Your {theme} tale reaches its end. Your choices will be remembered."),
            Vec::new(),
        ),
    ])
}

fn node(
    id: &str,
    title: &str,
    description: impl Into<String>,
    choices: Vec<StoryChoice>,
) -> StoryNode {
    StoryNode {
        id: id.to_string(),
        title: title.to_string(),
        description: description.into(),
        choices,
    }
}

fn choice(id: &str, text: &str, next_node: &str, effect: &[(&str, i32)]) -> StoryChoice {
    StoryChoice {
        id: id.to_string(),
        text: text.to_string(),
        next_node: next_node.to_string(),
        effect: effect
            .iter()
            .map(|(attribute, delta)| (attribute.to_string(), *delta))
            .collect::<BTreeMap<_, _>>(),
    }
}
