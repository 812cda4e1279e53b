use std::path::Path;

use anyhow::Result;
use colored::Colorize;

use crate::config::Config;

pub fn run(file: &Path, quiet: bool) -> Result<()> {
    let scene = super::load_scene(file)?;
    let routing = Config::load_or_default().routing();
    scene.validate(&routing)?;

    if !quiet {
        println!("{} {}", "ok".green().bold(), file.display());
        for (label, cpoint) in [("cpoint1", scene.cpoint1), ("cpoint2", scene.cpoint2)] {
            println!("  {} {} at {}°", label.dimmed(), cpoint.point, cpoint.angle);
        }
    }
    Ok(())
}
