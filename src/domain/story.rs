use serde::Serialize;
use std::collections::{BTreeMap, HashSet};

// One player choice leading to another node.
#[derive(Debug, Clone, Serialize)]
pub struct StoryChoice {
    pub id: String,
    pub text: String,
    // Target node id; resolved client-side only.
    #[serde(rename = "nextNode")]
    pub next_node: String,
    // Attribute name -> delta. BTreeMap keeps the wire order stable.
    pub effect: BTreeMap<String, i32>,
}

// One narrative beat. A node without choices ends the story.
#[derive(Debug, Clone, Serialize)]
pub struct StoryNode {
    pub id: String,
    pub title: String,
    pub description: String,
    pub choices: Vec<StoryChoice>,
}

// A set of story nodes linked by `nextNode` ids.
#[derive(Debug, Clone, Default)]
pub struct StoryGraph {
    nodes: Vec<StoryNode>,
}

impl StoryGraph {
    pub fn new(nodes: Vec<StoryNode>) -> Self {
        Self { nodes }
    }

    pub fn node(&self, id: &str) -> Option<&StoryNode> {
        self.nodes.iter().find(|node| node.id == id)
    }

    // Every (choice id, missing target) pair whose `nextNode` names no node.
    pub fn dangling_links(&self) -> Vec<(String, String)> {
        let ids: HashSet<&str> = self.nodes.iter().map(|node| node.id.as_str()).collect();
        self.nodes
            .iter()
            .flat_map(|node| node.choices.iter())
            .filter(|choice| !ids.contains(choice.next_node.as_str()))
            .map(|choice| (choice.id.clone(), choice.next_node.clone()))
            .collect()
    }

    pub fn into_nodes(self) -> Vec<StoryNode> {
        self.nodes
    }
}
