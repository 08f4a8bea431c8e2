//! Narrator: turns story nodes and engine steps into console text.

use colored::{ColoredString, Colorize};

use crate::config::PlayConfig;
use crate::story::{Ending, Node, Story};

const BANNER_RULE: usize = 64;
const ENDING_RULE: usize = 54;

/// Renders everything the player sees.
#[derive(Debug, Clone)]
pub struct Narrator {
    width: usize,
    color: bool,
}

impl Narrator {
    /// Create a narrator from play configuration.
    pub fn new(config: &PlayConfig) -> Self {
        Self {
            width: config.width,
            color: config.color,
        }
    }

    /// Title banner shown when a playthrough begins.
    pub fn banner(&self, story: &Story) -> String {
        let rule = "=".repeat(BANNER_RULE);
        let mut output = format!("\n{rule}\n");
        output.push_str(&self.paint(format!("Welcome to {}", story.title()), |s| s.bold()));
        output.push('\n');
        if let Some(intro) = story.intro() {
            output.push_str(&wrap(intro, self.width));
            output.push('\n');
        }
        output.push_str(&rule);
        output.push('\n');
        output
    }

    /// The node's text, wrapped.
    pub fn node(&self, node: &Node) -> String {
        wrap(&node.text, self.width)
    }

    /// Prompt listing the node's labels, e.g. `Where to? (house/explore): `.
    pub fn prompt(&self, node: &Node) -> String {
        let labels: Vec<_> = node.labels().collect();
        let line = format!("{} ({}): ", node.prompt(), labels.join("/"));
        self.paint(line, |s| s.bold())
    }

    /// Message shown when input matched no label.
    pub fn retry(&self, node: &Node) -> String {
        let labels: Vec<_> = node.labels().collect();
        self.paint(format!("Choose: {}", labels.join(", ")), |s| s.yellow())
    }

    /// Banner printed after an ending node.
    pub fn ending(&self, ending: Ending) -> String {
        match ending {
            Ending::Victory => {
                let line = self.paint("*** YOU WIN! ***".to_string(), |s| s.green().bold());
                format!("\n{line}\n")
            }
            Ending::Defeat => {
                let rule = "-".repeat(ENDING_RULE);
                let line = self.paint("Game Over.".to_string(), |s| s.red().bold());
                format!("\n{rule}\n{line}\n{rule}\n")
            }
        }
    }

    /// Question asked after an ending when replay is enabled.
    pub fn play_again(&self) -> String {
        self.paint("Play again? (yes/no): ".to_string(), |s| s.bold())
    }

    /// Retry message for the play-again question.
    pub fn play_again_retry(&self) -> String {
        self.paint("Choose: yes, no".to_string(), |s| s.yellow())
    }

    /// Closing line.
    pub fn farewell(&self) -> String {
        "Thanks for playing, adventurer!".to_string()
    }

    fn paint(&self, text: String, style: impl FnOnce(&str) -> ColoredString) -> String {
        if self.color {
            style(&text).to_string()
        } else {
            text
        }
    }
}

/// Greedy word wrap. Existing line breaks are kept; words longer than the
/// width get a line of their own.
pub fn wrap(text: &str, width: usize) -> String {
    let mut lines = Vec::new();

    for paragraph in text.lines() {
        let mut line = String::new();
        let mut len = 0;
        for word in paragraph.split_whitespace() {
            let word_len = word.chars().count();
            if len > 0 && len + 1 + word_len > width {
                lines.push(std::mem::take(&mut line));
                len = 0;
            }
            if len > 0 {
                line.push(' ');
                len += 1;
            }
            line.push_str(word);
            len += word_len;
        }
        lines.push(line);
    }

    lines.join("\n")
}
