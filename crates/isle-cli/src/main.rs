//! Console frontend for Treasure Isle.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser};
use tracing::Level;

use isle_story::PlayConfig;

#[derive(Parser)]
#[command(
    name = "isle",
    about = "Treasure Isle, a branching text adventure",
    version
)]
struct Cli {
    /// Play a story from a JSON file instead of the built-in one
    #[arg(short, long)]
    story: Option<PathBuf>,

    /// Column at which story text is wrapped
    #[arg(short, long, default_value = "84")]
    width: usize,

    /// Offer another playthrough after an ending
    #[arg(long)]
    replay: bool,

    /// Skip the title banner
    #[arg(long)]
    no_banner: bool,

    /// Color the output
    #[arg(long)]
    color: bool,

    /// Validate the story and print a summary instead of playing
    #[arg(long, conflicts_with = "dump")]
    check: bool,

    /// Print the story as JSON instead of playing
    #[arg(long)]
    dump: bool,

    /// Log more detail to stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    colored::control::set_override(cli.color);

    let result = commands::load_story(cli.story.as_deref()).and_then(|story| {
        if cli.check {
            commands::check::run(&story)
        } else if cli.dump {
            commands::dump::run(&story)
        } else {
            let config = PlayConfig::default()
                .with_width(cli.width)
                .with_color(cli.color)
                .with_replay(cli.replay)
                .with_banner(!cli.no_banner);
            commands::play::run(&story, config)
        }
    });

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

/// Logs go to stderr so stdout carries only the game transcript.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
