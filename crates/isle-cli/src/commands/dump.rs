use std::io::{self, Write};

use isle_story::Story;

/// Print the story as pretty JSON, in the same format `--story` reads.
pub fn run(story: &Story) -> Result<(), String> {
    write_json(story, &mut io::stdout().lock())
}

fn write_json(story: &Story, out: &mut impl Write) -> Result<(), String> {
    let json = story.to_json_pretty().map_err(|e| e.to_string())?;
    writeln!(out, "{json}").map_err(|e| format!("cannot write output: {e}"))
}
