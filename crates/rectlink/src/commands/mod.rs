pub mod completion;
pub mod config;
pub mod route;
pub mod validate;
pub mod version;

use std::path::Path;

use anyhow::{Context, Result};
use rectlink::Scene;

/// Read and parse a YAML scene file.
pub fn load_scene(path: &Path) -> Result<Scene> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    parse_scene(&contents).with_context(|| format!("Failed to parse {}", path.display()))
}

fn parse_scene(contents: &str) -> Result<Scene> {
    Ok(serde_yaml::from_str(contents)?)
}
