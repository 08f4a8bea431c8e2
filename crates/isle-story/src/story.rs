//! The story graph: nodes, choices, and construction-time validation.

use std::collections::{HashMap, HashSet, VecDeque};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{StoryError, StoryResult};

/// Prompt shown when a node does not declare its own.
pub const DEFAULT_PROMPT: &str = "What do you do?";

/// Normalize player input or a choice label for matching.
pub fn normalize(input: &str) -> String {
    input.trim().to_lowercase()
}

/// Unique identifier of a story node.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    /// Create a node identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// How a terminal node concludes the story.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ending {
    /// The player reached a good ending.
    Victory,
    /// The player died or otherwise lost.
    Defeat,
}

impl fmt::Display for Ending {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Victory => write!(f, "victory"),
            Self::Defeat => write!(f, "defeat"),
        }
    }
}

/// A labeled transition to another node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    /// Label the player types to pick this choice.
    pub label: String,
    /// Node this choice leads to.
    pub target: NodeId,
}

impl Choice {
    /// Create a new choice.
    pub fn new(label: impl Into<String>, target: impl Into<NodeId>) -> Self {
        Self {
            label: label.into(),
            target: target.into(),
        }
    }
}

/// A single narrative beat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    /// Unique identifier.
    pub id: NodeId,
    /// Text displayed when the node is entered.
    pub text: String,
    /// Question asked before listing the choices.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
    /// Outgoing choices, in display order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub choices: Vec<Choice>,
    /// Set on terminal nodes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ending: Option<Ending>,
}

impl Node {
    /// Create a node with the given id and text.
    pub fn new(id: impl Into<NodeId>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            prompt: None,
            choices: Vec::new(),
            ending: None,
        }
    }

    /// Set the prompt.
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = Some(prompt.into());
        self
    }

    /// Add a choice.
    pub fn with_choice(mut self, label: impl Into<String>, target: impl Into<NodeId>) -> Self {
        self.choices.push(Choice::new(label, target));
        self
    }

    /// Mark this node as an ending.
    pub fn with_ending(mut self, ending: Ending) -> Self {
        self.ending = Some(ending);
        self
    }

    /// Whether reaching this node ends the session.
    pub fn is_terminal(&self) -> bool {
        self.ending.is_some()
    }

    /// The prompt to show, falling back to [`DEFAULT_PROMPT`].
    pub fn prompt(&self) -> &str {
        self.prompt.as_deref().unwrap_or(DEFAULT_PROMPT)
    }

    /// Choice labels in display order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.choices.iter().map(|c| c.label.as_str())
    }

    /// Find the choice whose label equals an already normalized input.
    pub fn find_choice(&self, normalized: &str) -> Option<&Choice> {
        self.choices.iter().find(|c| c.label == normalized)
    }
}

/// Authoring form of a story, as written in JSON.
///
/// Nothing is checked until [`StoryFile::build`] turns it into a [`Story`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoryFile {
    /// Story title.
    pub title: String,
    /// Text shown under the title banner.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intro: Option<String>,
    /// Node the session starts at.
    pub root: NodeId,
    /// All nodes, in authoring order.
    pub nodes: Vec<Node>,
}

impl StoryFile {
    /// Start a story with a title and root node id.
    pub fn new(title: impl Into<String>, root: impl Into<NodeId>) -> Self {
        Self {
            title: title.into(),
            intro: None,
            root: root.into(),
            nodes: Vec::new(),
        }
    }

    /// Set the intro text.
    pub fn with_intro(mut self, intro: impl Into<String>) -> Self {
        self.intro = Some(intro.into());
        self
    }

    /// Add a node.
    pub fn with_node(mut self, node: Node) -> Self {
        self.nodes.push(node);
        self
    }

    /// Normalize labels and check every graph invariant.
    pub fn build(self) -> StoryResult<Story> {
        let mut nodes = self.nodes;
        let mut index = HashMap::with_capacity(nodes.len());

        for (i, node) in nodes.iter_mut().enumerate() {
            if node.id.as_str().trim().is_empty() {
                return Err(StoryError::EmptyNodeId);
            }
            if index.insert(node.id.clone(), i).is_some() {
                return Err(StoryError::DuplicateNode(node.id.clone()));
            }

            match (node.is_terminal(), node.choices.is_empty()) {
                (false, true) => return Err(StoryError::DeadEnd(node.id.clone())),
                (true, false) => return Err(StoryError::TerminalWithChoices(node.id.clone())),
                _ => {}
            }

            let mut seen = HashSet::new();
            for choice in &mut node.choices {
                choice.label = normalize(&choice.label);
                if choice.label.is_empty() {
                    return Err(StoryError::EmptyLabel(node.id.clone()));
                }
                if !seen.insert(choice.label.clone()) {
                    return Err(StoryError::DuplicateLabel {
                        node: node.id.clone(),
                        label: choice.label.clone(),
                    });
                }
            }
        }

        let Some(&root_index) = index.get(&self.root) else {
            return Err(StoryError::MissingRoot(self.root));
        };

        for node in &nodes {
            for choice in &node.choices {
                if !index.contains_key(&choice.target) {
                    return Err(StoryError::DanglingTarget {
                        node: node.id.clone(),
                        label: choice.label.clone(),
                        target: choice.target.clone(),
                    });
                }
            }
        }

        Ok(Story {
            title: self.title,
            intro: self.intro,
            root: self.root,
            root_index,
            nodes,
            index,
        })
    }
}

/// A validated, immutable story graph.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "StoryFile", into = "StoryFile")]
pub struct Story {
    title: String,
    intro: Option<String>,
    root: NodeId,
    root_index: usize,
    nodes: Vec<Node>,
    index: HashMap<NodeId, usize>,
}

impl TryFrom<StoryFile> for Story {
    type Error = StoryError;

    fn try_from(file: StoryFile) -> StoryResult<Self> {
        file.build()
    }
}

impl From<Story> for StoryFile {
    fn from(story: Story) -> Self {
        Self {
            title: story.title,
            intro: story.intro,
            root: story.root,
            nodes: story.nodes,
        }
    }
}

impl Story {
    /// Parse and validate a story from JSON.
    pub fn from_json(source: &str) -> StoryResult<Self> {
        let file: StoryFile = serde_json::from_str(source)?;
        file.build()
    }

    /// Serialize the story as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> StoryResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Story title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Intro text shown under the title banner.
    pub fn intro(&self) -> Option<&str> {
        self.intro.as_deref()
    }

    /// The node every session starts at.
    pub fn root(&self) -> &Node {
        &self.nodes[self.root_index]
    }

    /// Look up a node by id.
    pub fn node(&self, id: &NodeId) -> Option<&Node> {
        self.index.get(id).and_then(|&i| self.nodes.get(i))
    }

    /// All nodes in authoring order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of terminal nodes.
    pub fn ending_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_terminal()).count()
    }

    /// Nodes that no path from the root reaches, in authoring order.
    pub fn unreachable_nodes(&self) -> Vec<&NodeId> {
        let mut visited: HashSet<&NodeId> = HashSet::new();
        let mut queue = VecDeque::from([&self.root]);

        while let Some(id) = queue.pop_front() {
            if !visited.insert(id) {
                continue;
            }
            if let Some(node) = self.node(id) {
                queue.extend(node.choices.iter().map(|c| &c.target));
            }
        }

        self.nodes
            .iter()
            .map(|n| &n.id)
            .filter(|id| !visited.contains(id))
            .collect()
    }
}
