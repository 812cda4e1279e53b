use std::path::Path;

use anyhow::{Context, Result};
use rectlink::Point;
use rectlink::routing::serialize::path_to_string;

use crate::cli::OutputFormat;
use crate::config::Config;

pub fn run(file: &Path, format: OutputFormat) -> Result<()> {
    let scene = super::load_scene(file)?;
    let routing = Config::load_or_default().routing();
    tracing::debug!(file = %file.display(), ?routing, "routing scene");

    let path = scene
        .connect(&routing)
        .with_context(|| format!("No connection for {}", file.display()))?;

    println!("{}", render(&path, format)?);
    Ok(())
}

fn render(path: &[Point], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(path_to_string(path)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(path)?),
    }
}
