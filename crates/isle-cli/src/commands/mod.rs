pub mod check;
pub mod dump;
pub mod play;

use std::path::Path;

use isle_story::{Story, builtin};
use tracing::info;

/// Load the story at `path`, or the built-in one when no path is given.
pub fn load_story(path: Option<&Path>) -> Result<Story, String> {
    let Some(path) = path else {
        return builtin::treasure_island().map_err(|e| format!("built-in story: {e}"));
    };

    let source = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    let story = Story::from_json(&source).map_err(|e| format!("{}: {e}", path.display()))?;

    info!(
        path = %path.display(),
        title = story.title(),
        nodes = story.node_count(),
        "story loaded"
    );
    Ok(story)
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::io::{self, Write};

    /// A writer whose reader has gone away, like stdout piped into `head`.
    pub struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }
}
