//! Play session: the current-node pointer and the `advance` step.

use tracing::{debug, info};

use crate::error::{StoryError, StoryResult};
use crate::story::{Node, Story, normalize};

/// Result of feeding one line of input to a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step<'s> {
    /// The input matched a choice; this is the node now current.
    Moved(&'s Node),
    /// The input matched nothing; the session stays on this node.
    Retry(&'s Node),
}

impl<'s> Step<'s> {
    /// The node current after this step.
    pub fn node(&self) -> &'s Node {
        match *self {
            Self::Moved(node) | Self::Retry(node) => node,
        }
    }
}

/// One playthrough of a story.
///
/// Sessions borrow the story immutably, so any number of them can walk the
/// same graph independently.
#[derive(Debug, Clone)]
pub struct Session<'s> {
    story: &'s Story,
    current: &'s Node,
}

impl<'s> Session<'s> {
    /// Start a new session at the story's root node.
    pub fn start(story: &'s Story) -> Self {
        let current = story.root();
        info!(story = story.title(), root = %current.id, "session started");
        Self { story, current }
    }

    /// The node the player is at.
    pub fn current(&self) -> &'s Node {
        self.current
    }

    /// Whether the current node is an ending.
    pub fn is_finished(&self) -> bool {
        self.current.is_terminal()
    }

    /// Feed one line of raw player input.
    ///
    /// Input is trimmed and lowercased, then compared exactly against the
    /// current node's labels. Blank or unknown input yields [`Step::Retry`].
    /// Calling this once an ending is reached is an error.
    pub fn advance(&mut self, input: &str) -> StoryResult<Step<'s>> {
        if self.is_finished() {
            return Err(StoryError::SessionFinished(self.current.id.clone()));
        }

        let normalized = normalize(input);
        let Some(choice) = self.current.find_choice(&normalized) else {
            debug!(node = %self.current.id, input = %normalized, "no matching choice");
            return Ok(Step::Retry(self.current));
        };

        let next = self
            .story
            .node(&choice.target)
            .ok_or_else(|| StoryError::DanglingTarget {
                node: self.current.id.clone(),
                label: choice.label.clone(),
                target: choice.target.clone(),
            })?;

        debug!(from = %self.current.id, to = %next.id, label = %choice.label, "advanced");
        self.current = next;

        if let Some(ending) = next.ending {
            info!(node = %next.id, %ending, "session ended");
        }

        Ok(Step::Moved(next))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::story::{Ending, Node, StoryFile};
    use proptest::prelude::*;

    fn fork() -> Story {
        StoryFile::new("Fork", "root")
            .with_node(
                Node::new("root", "A fork in the road.")
                    .with_choice("left", "treasure")
                    .with_choice("right", "pit"),
            )
            .with_node(Node::new("treasure", "Treasure found!").with_ending(Ending::Victory))
            .with_node(Node::new("pit", "You fell into a pit.").with_ending(Ending::Defeat))
            .build()
            .unwrap()
    }

    fn loop_story() -> Story {
        StoryFile::new("Loop", "hall")
            .with_node(
                Node::new("hall", "A long hall.")
                    .with_choice("door", "room")
                    .with_choice("stairs", "exit"),
            )
            .with_node(Node::new("room", "An empty room.").with_choice("back", "hall"))
            .with_node(Node::new("exit", "Fresh air.").with_ending(Ending::Victory))
            .build()
            .unwrap()
    }

    #[test]
    fn start_at_root() {
        let story = fork();
        let session = Session::start(&story);
        assert_eq!(session.current().id.as_str(), "root");
        assert!(!session.is_finished());
    }

    #[test]
    fn matching_input_moves_and_finishes() {
        let story = fork();
        let mut session = Session::start(&story);

        let step = session.advance("LEFT ").unwrap();
        assert!(matches!(step, Step::Moved(node) if node.text == "Treasure found!"));
        assert!(session.is_finished());
        assert_eq!(session.current().ending, Some(Ending::Victory));
    }

    #[test]
    fn unknown_input_retries() {
        let story = fork();
        let mut session = Session::start(&story);

        let step = session.advance("up").unwrap();
        assert!(matches!(step, Step::Retry(node) if node.id.as_str() == "root"));
        assert_eq!(session.current().id.as_str(), "root");
        assert!(!session.is_finished());

        let step = session.advance("right").unwrap();
        assert_eq!(step.node().id.as_str(), "pit");
    }

    #[test]
    fn empty_input_retries() {
        let story = fork();
        let mut session = Session::start(&story);
        assert!(matches!(session.advance("").unwrap(), Step::Retry(_)));
        assert!(matches!(session.advance("   \n").unwrap(), Step::Retry(_)));
    }

    #[test]
    fn no_abbreviations() {
        let story = fork();
        let mut session = Session::start(&story);
        assert!(matches!(session.advance("l").unwrap(), Step::Retry(_)));
        assert!(matches!(session.advance("lef").unwrap(), Step::Retry(_)));
        assert!(matches!(session.advance("left!").unwrap(), Step::Retry(_)));
    }

    #[test]
    fn advance_after_ending_is_error() {
        let story = fork();
        let mut session = Session::start(&story);
        session.advance("right").unwrap();

        let err = session.advance("left").unwrap_err();
        assert!(matches!(err, StoryError::SessionFinished(id) if id.as_str() == "pit"));
    }

    #[test]
    fn cycles_return_to_earlier_nodes() {
        let story = loop_story();
        let mut session = Session::start(&story);

        session.advance("door").unwrap();
        assert_eq!(session.current().id.as_str(), "room");
        session.advance("back").unwrap();
        assert_eq!(session.current().id.as_str(), "hall");
        session.advance("stairs").unwrap();
        assert!(session.is_finished());
    }

    #[test]
    fn sessions_are_independent() {
        let story = fork();
        let mut first = Session::start(&story);
        let second = Session::start(&story);

        first.advance("left").unwrap();
        assert!(first.is_finished());
        assert_eq!(second.current().id.as_str(), "root");
    }

    #[test]
    fn replay_is_deterministic() {
        let story = loop_story();
        let inputs = ["door", "nope", "back", "", "stairs"];

        let walk = || {
            let mut session = Session::start(&story);
            inputs
                .iter()
                .map(|input| session.advance(input).unwrap().node().id.clone())
                .collect::<Vec<_>>()
        };

        assert_eq!(walk(), walk());
    }

    proptest! {
        #[test]
        fn labels_match_in_any_case_and_padding(
            upper in prop::collection::vec(any::<bool>(), 5),
            left_pad in "[ \t]{0,3}",
            right_pad in "[ \t\r\n]{0,3}",
        ) {
            let story = loop_story();
            for (label, target) in [("door", "room"), ("stairs", "exit")] {
                let cased: String = label
                    .chars()
                    .zip(upper.iter().cycle())
                    .map(|(c, &up)| if up { c.to_ascii_uppercase() } else { c })
                    .collect();
                let input = format!("{left_pad}{cased}{right_pad}");

                let mut session = Session::start(&story);
                let step = session.advance(&input).unwrap();
                prop_assert!(matches!(step, Step::Moved(_)));
                prop_assert_eq!(session.current().id.as_str(), target);
            }
        }

        #[test]
        fn non_labels_leave_node_unchanged(input in "\\PC{0,12}") {
            let story = loop_story();
            let normalized = normalize(&input);
            prop_assume!(normalized != "door" && normalized != "stairs");

            let mut session = Session::start(&story);
            let step = session.advance(&input).unwrap();
            prop_assert!(matches!(step, Step::Retry(_)));
            prop_assert_eq!(session.current().id.as_str(), "hall");
        }
    }
}
