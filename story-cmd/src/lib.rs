//! Command implementations for the story CLI.
//!
//! Provides subcommands for pre-rendering the loading screen and exporting
//! its stylesheet, so hosts can serve the placeholder before the WASM app
//! has loaded.

use clap::Subcommand;

pub mod output;
pub mod render;

#[derive(Subcommand)]
pub enum Command {
    /// Render the loading screen to HTML
    Render {
        /// Theme label passed to the view (overrides --config)
        #[arg(short = 't', long)]
        theme: Option<String>,

        /// Path to a JSON display configuration, e.g. {"theme": "ocean"}
        #[arg(short = 'c', long)]
        config: Option<String>,

        /// Output path (stdout if omitted)
        #[arg(short = 'o', long)]
        output: Option<String>,

        /// Emit only the view markup instead of a full page
        #[arg(long)]
        fragment: bool,
    },

    /// Write the loading screen stylesheet
    Stylesheet {
        /// Output path (stdout if omitted)
        #[arg(short = 'o', long)]
        output: Option<String>,
    },
}

pub fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Render {
            theme,
            config,
            output,
            fragment,
        } => render::run_render(theme, config.as_deref(), output.as_deref(), fragment),
        Command::Stylesheet { output } => {
            output::write_output(output.as_deref(), story_ui::styles::LOADING_CSS)
        }
    }
}
