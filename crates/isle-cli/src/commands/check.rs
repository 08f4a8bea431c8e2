use std::io::{self, Write};

use colored::Colorize;

use isle_story::Story;

pub fn run(story: &Story) -> Result<(), String> {
    write_summary(story, &mut io::stdout().lock())
        .map_err(|e| format!("cannot write output: {e}"))?;

    let unreachable = story.unreachable_nodes();
    if !unreachable.is_empty() {
        for id in &unreachable {
            eprintln!("  {}: node '{id}' is unreachable from the root", "warning".yellow());
        }
        eprintln!(
            "  {} warning{}",
            unreachable.len(),
            if unreachable.len() == 1 { "" } else { "s" },
        );
    }

    Ok(())
}

fn write_summary(story: &Story, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "  All checks passed for '{}'.", story.title())?;
    writeln!(
        out,
        "  {} nodes, {} endings, root '{}'",
        story.node_count(),
        story.ending_count(),
        story.root().id
    )
}
