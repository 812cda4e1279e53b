use anyhow::Result;
use colored::Colorize;

use crate::cli::ConfigCommands;
use crate::config::Config;

pub fn run(command: ConfigCommands) -> Result<()> {
    match command {
        ConfigCommands::Show => show(),
        ConfigCommands::Set { key, value } => set(&key, &value),
    }
}

fn show() -> Result<()> {
    let path = Config::path()?;
    let config = Config::load_or_default();
    let routing = config.routing();

    println!("{} {}", "Config file:".bold(), path.display());
    if config.routing.is_none() {
        println!("{}", "(no routing section, showing defaults)".dimmed());
    }
    println!("routing:");
    println!("  connection_margin:  {}", routing.connection_margin);
    println!("  min_rect_gap:       {}", routing.min_rect_gap);
    println!("  obstacle_clearance: {}", routing.obstacle_clearance);
    println!("  border_epsilon:     {}", routing.border_epsilon);
    println!("  angle_epsilon:      {}", routing.angle_epsilon);
    Ok(())
}

fn set(key: &str, value: &str) -> Result<()> {
    let mut config = Config::load_or_default();
    config.set(key, value)?;
    let path = config.save()?;
    println!("{} {key} = {value}", "Set".green().bold());
    println!("{}", format!("Saved to {}", path.display()).dimmed());
    Ok(())
}
