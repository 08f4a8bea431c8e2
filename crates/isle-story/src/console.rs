//! Read-eval-print loop over an injected reader and writer.

use std::io::{BufRead, Write};

use tracing::{debug, info};

use crate::config::PlayConfig;
use crate::error::StoryResult;
use crate::narrator::Narrator;
use crate::session::{Session, Step};
use crate::story::{Ending, Node, NodeId, Story, normalize};

/// How a playthrough stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// An ending node was reached.
    Ended {
        /// The terminal node.
        node: NodeId,
        /// Its ending.
        ending: Ending,
    },
    /// Input ran out before an ending.
    InputClosed,
}

/// Drives sessions against a line reader and an output sink.
pub struct Console<R, W> {
    reader: R,
    writer: W,
    config: PlayConfig,
    narrator: Narrator,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Create a console over the given reader and writer.
    pub fn new(reader: R, writer: W, config: PlayConfig) -> Self {
        let narrator = Narrator::new(&config);
        Self {
            reader,
            writer,
            config,
            narrator,
        }
    }

    /// Consume the console, returning the writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Play until the player declines another round or input runs out.
    ///
    /// Without replay this is a single [`Console::play`]. Returns the
    /// outcome of the last playthrough.
    pub fn run(&mut self, story: &Story) -> StoryResult<Outcome> {
        loop {
            let outcome = self.play(story)?;
            if outcome == Outcome::InputClosed || !self.config.replay {
                return Ok(outcome);
            }
            match self.ask_play_again()? {
                Some(true) => info!("starting another playthrough"),
                Some(false) => {
                    let farewell = self.narrator.farewell();
                    writeln!(self.writer, "{farewell}")?;
                    return Ok(outcome);
                }
                None => return Ok(outcome),
            }
        }
    }

    /// Play one session from the root to an ending or end of input.
    pub fn play(&mut self, story: &Story) -> StoryResult<Outcome> {
        let mut session = Session::start(story);

        if self.config.banner {
            let banner = self.narrator.banner(story);
            writeln!(self.writer, "{banner}")?;
        }
        self.show(session.current())?;

        loop {
            let current = session.current();
            if let Some(ending) = current.ending {
                let banner = self.narrator.ending(ending);
                writeln!(self.writer, "{banner}")?;
                self.writer.flush()?;
                return Ok(Outcome::Ended {
                    node: current.id.clone(),
                    ending,
                });
            }

            let prompt = self.narrator.prompt(current);
            let Some(line) = self.read_line(&prompt)? else {
                debug!(node = %current.id, "input closed");
                writeln!(self.writer)?;
                self.writer.flush()?;
                return Ok(Outcome::InputClosed);
            };

            match session.advance(&line)? {
                Step::Moved(node) => {
                    writeln!(self.writer)?;
                    self.show(node)?;
                }
                Step::Retry(node) => {
                    let retry = self.narrator.retry(node);
                    writeln!(self.writer, "{retry}")?;
                    self.show(node)?;
                }
            }
        }
    }

    fn show(&mut self, node: &Node) -> StoryResult<()> {
        let text = self.narrator.node(node);
        writeln!(self.writer, "{text}")?;
        Ok(())
    }

    /// `None` when input ran out before an answer.
    fn ask_play_again(&mut self) -> StoryResult<Option<bool>> {
        loop {
            let prompt = self.narrator.play_again();
            let Some(line) = self.read_line(&prompt)? else {
                writeln!(self.writer)?;
                return Ok(None);
            };
            match normalize(&line).as_str() {
                "yes" => return Ok(Some(true)),
                "no" => return Ok(Some(false)),
                _ => {
                    let retry = self.narrator.play_again_retry();
                    writeln!(self.writer, "{retry}")?;
                }
            }
        }
    }

    /// Write the prompt and read one line; `None` on end of input.
    ///
    /// Invalid UTF-8 is replaced rather than rejected, so it reaches the
    /// session as unmatched input.
    fn read_line(&mut self, prompt: &str) -> StoryResult<Option<String>> {
        write!(self.writer, "{prompt}")?;
        self.writer.flush()?;

        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }
}
