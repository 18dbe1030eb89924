//! Pre-rendering of the loading screen.

use anyhow::Context;
use story_ui::render::render_loading_status;
use story_ui::styles::LOADING_CSS;
use story_ui::DisplayConfiguration;

use crate::output::write_output;

/// Title of the standalone page.
const PAGE_TITLE: &str = "Generating your story";

/// Build the display configuration from an optional JSON file and an
/// optional theme flag. The flag wins over the file.
pub fn resolve_config(
    theme: Option<String>,
    config_path: Option<&str>,
) -> anyhow::Result<DisplayConfiguration> {
    let mut config = match config_path {
        Some(path) => DisplayConfiguration::load(path)
            .with_context(|| format!("Failed to load display configuration from {path}"))?,
        None => DisplayConfiguration::default(),
    };

    if theme.is_some() {
        config.theme = theme;
    }

    Ok(config)
}

/// Wrap a rendered fragment into a standalone HTML5 page with the stylesheet inlined.
pub fn render_page(config: &DisplayConfiguration) -> String {
    let body = render_loading_status(config);
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{PAGE_TITLE}</title>\n\
         <style>\n{LOADING_CSS}</style>\n\
         </head>\n\
         <body>\n{body}\n</body>\n\
         </html>\n"
    )
}

pub fn run_render(
    theme: Option<String>,
    config_path: Option<&str>,
    output: Option<&str>,
    fragment: bool,
) -> anyhow::Result<()> {
    let config = resolve_config(theme, config_path)?;
    log::info!(
        "Rendering loading screen (theme: {:?}, fragment: {})",
        config.theme(),
        fragment
    );

    let html = if fragment {
        render_loading_status(&config)
    } else {
        render_page(&config)
    };

    write_output(output, &html)
}
