use std::fs;
use std::io::{self, Write};

use anyhow::Context;

/// Write `contents` to `path`, or to stdout when no path is given.
pub fn write_output(path: Option<&str>, contents: &str) -> anyhow::Result<()> {
    match path {
        Some(path) => {
            fs::write(path, contents).with_context(|| format!("Failed to write {path}"))?;
            log::info!("Wrote {} bytes to {}", contents.len(), path);
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(contents.as_bytes())
                .context("Failed to write to stdout")?;
            if !contents.ends_with('\n') {
                stdout.write_all(b"\n").context("Failed to write to stdout")?;
            }
        }
    }
    Ok(())
}
