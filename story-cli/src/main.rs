//! Story CLI - pre-renders the story loading screen to static HTML.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "story-cli",
    version,
    about = "Story loading screen toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: story_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::debug!("story-cli starting");
    story_cmd::run(cli.command)
}
