//! Interactive play on stdin/stdout.

use std::io;

use isle_story::{Console, Outcome, PlayConfig, Story};
use tracing::info;

/// Play the story on the terminal until an ending or end of input.
pub fn run(story: &Story, config: PlayConfig) -> Result<(), String> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock(), config);

    match console.run(story).map_err(|e| e.to_string())? {
        Outcome::Ended { node, ending } => info!(%node, %ending, "game over"),
        Outcome::InputClosed => info!("input closed"),
    }

    Ok(())
}
