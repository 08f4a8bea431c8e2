//! Error types for the story engine.

use thiserror::Error;

use crate::story::NodeId;

/// Result type for story operations.
pub type StoryResult<T> = Result<T, StoryError>;

/// Errors raised while building a story or playing through it.
#[derive(Debug, Error)]
pub enum StoryError {
    /// The designated root node is not part of the story.
    #[error("root node not found: {0}")]
    MissingRoot(NodeId),

    /// A node was declared with an empty identifier.
    #[error("node id must not be empty")]
    EmptyNodeId,

    /// Two nodes share the same identifier.
    #[error("duplicate node id: {0}")]
    DuplicateNode(NodeId),

    /// A non-terminal node offers no way forward.
    #[error("node {0} has no choices and no ending")]
    DeadEnd(NodeId),

    /// An ending node also declares choices.
    #[error("ending node {0} must not have choices")]
    TerminalWithChoices(NodeId),

    /// A choice label is blank after trimming.
    #[error("node {0} has a choice with an empty label")]
    EmptyLabel(NodeId),

    /// Two choices on one node normalize to the same label.
    #[error("node {node} has duplicate choice label \"{label}\"")]
    DuplicateLabel {
        /// Node declaring the choices.
        node: NodeId,
        /// The normalized label.
        label: String,
    },

    /// A choice points at a node that does not exist.
    #[error("choice \"{label}\" on node {node} targets unknown node {target}")]
    DanglingTarget {
        /// Node declaring the choice.
        node: NodeId,
        /// The choice label.
        label: String,
        /// The missing target.
        target: NodeId,
    },

    /// `advance` was called after an ending was reached.
    #[error("session already ended at {0}")]
    SessionFinished(NodeId),

    /// Story JSON could not be parsed.
    #[error("invalid story file: {0}")]
    Parse(#[from] serde_json::Error),

    /// Reading input or writing output failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_node() {
        let err = StoryError::DanglingTarget {
            node: NodeId::new("crossroad"),
            label: "left".to_string(),
            target: NodeId::new("lake"),
        };
        assert_eq!(
            err.to_string(),
            "choice \"left\" on node crossroad targets unknown node lake"
        );
    }
}
