//! Branching story engine for Treasure Isle.
//!
//! A story is an immutable graph of narrative nodes joined by labeled
//! choices. A [`Session`] walks it one line of player input at a time, and a
//! [`Console`] drives sessions over any reader/writer pair so the same loop
//! serves the terminal and the tests.

/// The embedded Treasure Island story.
pub mod builtin;
/// Play configuration.
pub mod config;
/// Read-eval-print loop over injected I/O.
pub mod console;
/// Error types for the story engine.
pub mod error;
/// Text rendering for nodes, prompts, and endings.
pub mod narrator;
/// Play session management.
pub mod session;
/// Story graph and validation.
pub mod story;

pub use config::PlayConfig;
pub use console::{Console, Outcome};
pub use error::{StoryError, StoryResult};
pub use narrator::Narrator;
pub use session::{Session, Step};
pub use story::{Choice, Ending, Node, NodeId, Story, StoryFile, normalize};
